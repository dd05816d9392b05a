//! Swept intersection tests
//!
//! A moving point is tested against each face of a box as a finite
//! parallelogram. Every test is a pure query returning `Option`; picking the
//! earliest crossing is an explicit fold done by the caller.

use glam::{Vec2, Vec3};

use super::geom::{Aabb, Face, Segment2};
use crate::consts::PARALLEL_EPSILON;

/// Earliest crossing of a swept point with a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Fraction of the sweep at the crossing, in `[0, 1]`
    pub t: f32,
    /// Outward face normal, scaled by the face area (not unit length)
    pub normal: Vec3,
}

impl Hit {
    /// Unit-length normal, or zero for a degenerate face
    pub fn unit_normal(&self) -> Vec3 {
        self.normal.normalize_or_zero()
    }
}

/// Crossing of two 2D segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit2 {
    /// Fraction along the moving segment, in `[0, 1]`
    pub t: f32,
    /// Perpendicular of the wall segment (not unit length)
    pub normal: Vec2,
}

/// Keep whichever hit has the smaller `t`; the earlier one wins ties
#[inline]
pub fn nearer(best: Option<Hit>, candidate: Hit) -> Option<Hit> {
    match best {
        Some(b) if b.t <= candidate.t => Some(b),
        _ => Some(candidate),
    }
}

/// Test the segment `p0 -> p1` against a single face
pub fn segment_vs_face(p0: Vec3, p1: Vec3, face: &Face, epsilon: f32) -> Option<Hit> {
    let dir = p1 - p0;
    let normal = face.normal();

    let denom = dir.dot(normal);
    if denom.abs() < epsilon {
        return None; // Parallel to the face plane (or zero-length sweep)
    }

    let t = (face.origin - p0).dot(normal) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    // Position of the crossing in face coordinates
    let rel = p0 + dir * t - face.origin;
    let u = rel.dot(face.e1) / face.e1.length_squared();
    let v = rel.dot(face.e2) / face.e2.length_squared();
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }

    Some(Hit { t, normal })
}

/// Earliest crossing of `p0 -> p1` with any face of `aabb`
pub fn segment_vs_box(p0: Vec3, p1: Vec3, aabb: &Aabb) -> Option<Hit> {
    segment_vs_box_with(p0, p1, aabb, PARALLEL_EPSILON)
}

/// [`segment_vs_box`] with an explicit parallel-rejection threshold
pub fn segment_vs_box_with(p0: Vec3, p1: Vec3, aabb: &Aabb, epsilon: f32) -> Option<Hit> {
    aabb.faces()
        .iter()
        .filter_map(|face| segment_vs_face(p0, p1, face, epsilon))
        .fold(None, nearer)
}

/// Crossing of the moving segment `path` with the static segment `wall`.
///
/// Kept for 2D levels; the 3D resolver does not use it.
pub fn segment_vs_segment(path: &Segment2, wall: &Segment2) -> Option<Hit2> {
    let u = path.delta();
    let v = wall.delta();
    let d = u.perp_dot(v);
    if d.abs() < PARALLEL_EPSILON {
        return None;
    }

    let w = wall.start - path.start;
    let s = w.perp_dot(u) / d;
    let t = w.perp_dot(v) / d;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&s) {
        return None;
    }

    Some(Hit2 { t, normal: v.perp() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_box() -> Aabb {
        Aabb::centered(Vec3::ONE)
    }

    #[test]
    fn test_through_center_each_axis() {
        let b = unit_box();
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            for sign in [1.0, -1.0] {
                let dir = axis * sign;
                let p0 = -dir * 3.0;
                let p1 = dir * 3.0;

                let hit = segment_vs_box(p0, p1, &b).expect("should hit");
                // Entry plane is 2 units into a 6 unit sweep
                assert!((hit.t - 1.0 / 3.0).abs() < 1e-5, "t = {}", hit.t);
                let n = hit.unit_normal();
                assert!((n + dir).length() < 1e-5, "normal {n} for dir {dir}");
            }
        }
    }

    #[test]
    fn test_short_of_the_box() {
        let b = unit_box();
        let hit = segment_vs_box(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-1.5, 0.0, 0.0), &b);
        assert!(hit.is_none());
    }

    #[test]
    fn test_zero_length_sweep_is_no_hit() {
        let b = unit_box();
        let p = Vec3::new(-1.0, 0.0, 0.0);
        assert!(segment_vs_box(p, p, &b).is_none());
    }

    #[test]
    fn test_parallel_to_face_misses_that_face() {
        let face = unit_box().faces()[0];
        let hit = segment_vs_face(
            Vec3::new(-1.0, -0.5, 0.0),
            Vec3::new(-1.0, 0.5, 0.0),
            &face,
            PARALLEL_EPSILON,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_plane_hit_outside_face_is_rejected() {
        // Crosses the x = -1 plane at y = 5, well outside the face
        let face = unit_box().faces()[0];
        let hit = segment_vs_face(
            Vec3::new(-3.0, 5.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            &face,
            PARALLEL_EPSILON,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_diagonal_picks_nearest_face() {
        let b = unit_box();
        // Crosses the y = -1 plane first (t = 0.25) but outside that face
        let hit = segment_vs_box(Vec3::new(-3.0, -2.0, 0.0), Vec3::new(1.0, 2.0, 0.0), &b)
            .expect("should hit");
        assert!((hit.t - 0.5).abs() < 1e-5);
        assert!((hit.unit_normal() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_nearer_keeps_first_on_tie() {
        let a = Hit { t: 0.5, normal: Vec3::X };
        let b = Hit { t: 0.5, normal: Vec3::Y };
        assert_eq!(nearer(Some(a), b), Some(a));
        assert_eq!(nearer(None, b), Some(b));
    }

    #[test]
    fn test_segments_cross() {
        let path = Segment2::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));
        let wall = Segment2::new(Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0));
        let hit = segment_vs_segment(&path, &wall).expect("should cross");
        assert!((hit.t - 0.25).abs() < 1e-6);
        assert!((hit.normal.normalize() - Vec2::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_segments_parallel_or_apart() {
        let path = Segment2::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));
        let parallel = Segment2::new(Vec2::new(0.0, 1.0), Vec2::new(4.0, 1.0));
        assert!(segment_vs_segment(&path, &parallel).is_none());

        let beyond = Segment2::new(Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0));
        assert!(segment_vs_segment(&path, &beyond).is_none());

        let beside = Segment2::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 2.0));
        assert!(segment_vs_segment(&path, &beside).is_none());
    }

    proptest! {
        #[test]
        fn prop_segment_beyond_a_face_never_hits(
            min in prop::array::uniform3(-10.0f32..10.0),
            size in prop::array::uniform3(0.1f32..5.0),
            axis in 0usize..3,
            above in any::<bool>(),
            gap in 0.01f32..10.0,
            a in prop::array::uniform3(-20.0f32..20.0),
            b in prop::array::uniform3(-20.0f32..20.0),
            a_off in 0.0f32..10.0,
            b_off in 0.0f32..10.0,
        ) {
            let min = Vec3::from(min);
            let aabb = Aabb::new(min, min + Vec3::from(size));
            let mut p0 = Vec3::from(a);
            let mut p1 = Vec3::from(b);
            // Push both endpoints past the same face on `axis`
            if above {
                p0[axis] = aabb.max[axis] + gap + a_off;
                p1[axis] = aabb.max[axis] + gap + b_off;
            } else {
                p0[axis] = aabb.min[axis] - gap - a_off;
                p1[axis] = aabb.min[axis] - gap - b_off;
            }
            prop_assert!(segment_vs_box(p0, p1, &aabb).is_none());
        }

        #[test]
        fn prop_hit_t_is_in_unit_range(
            start in prop::array::uniform3(-10.0f32..10.0),
            end in prop::array::uniform3(-10.0f32..10.0),
        ) {
            if let Some(hit) = segment_vs_box(Vec3::from(start), Vec3::from(end), &unit_box()) {
                prop_assert!((0.0..=1.0).contains(&hit.t));
            }
        }
    }
}
