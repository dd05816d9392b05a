//! Axis-aligned boxes, box faces and 2D segments
//!
//! Everything here is a plain value type. Boxes are stored as min/max corners
//! so per-axis ordering is an invariant of construction, not of the caller.

use glam::{Vec2, Vec3};

/// An axis-aligned box, `min <= max` on every axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two opposite corners in any order
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Build a box from six scalars, sorting each axis pair
    pub fn from_coords(x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) -> Self {
        Self::new(Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z1))
    }

    /// Box of the given half extents centered on the origin
    pub fn centered(half_extents: Vec3) -> Self {
        Self::new(-half_extents, half_extents)
    }

    /// Full edge lengths
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half of the edge lengths (w, h, d)
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.size() / 2.0
    }

    /// Centroid in the box's own frame
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.min + self.half_extents()
    }

    /// The same box moved by `offset` (local to world)
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Minkowski sum with a centered box of the given half extents
    #[inline]
    pub fn expanded(&self, half_extents: Vec3) -> Self {
        Self {
            min: self.min - half_extents,
            max: self.max + half_extents,
        }
    }

    /// Closed containment test
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// The six faces, wound so `e1 x e2` points out of the box.
    ///
    /// Order: -X, +X, -Y, +Y, -Z, +Z.
    pub fn faces(&self) -> [Face; 6] {
        let Vec3 { x: x0, y: y0, z: z0 } = self.min;
        let Vec3 { x: x1, y: y1, z: z1 } = self.max;
        let size = self.size();
        let ex = Vec3::new(size.x, 0.0, 0.0);
        let ey = Vec3::new(0.0, size.y, 0.0);
        let ez = Vec3::new(0.0, 0.0, size.z);

        [
            Face::new(Vec3::new(x0, y0, z0), ez, ey),
            Face::new(Vec3::new(x1, y0, z0), ey, ez),
            Face::new(Vec3::new(x0, y0, z0), ex, ez),
            Face::new(Vec3::new(x0, y1, z0), ez, ex),
            Face::new(Vec3::new(x0, y0, z0), ey, ex),
            Face::new(Vec3::new(x0, y0, z1), ex, ey),
        ]
    }
}

/// A finite parallelogram `origin + u*e1 + v*e2` with `u, v` in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub origin: Vec3,
    pub e1: Vec3,
    pub e2: Vec3,
}

impl Face {
    pub fn new(origin: Vec3, e1: Vec3, e2: Vec3) -> Self {
        Self { origin, e1, e2 }
    }

    /// Unnormalized face normal; its length is the face area
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.e1.cross(self.e2)
    }
}

/// A 2D line segment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment2 {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment2 {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Normalize over x/y only, leaving z untouched.
///
/// A zero x/y part is returned unchanged.
pub fn normalize_planar(v: Vec3) -> Vec3 {
    let len = v.truncate().length();
    if len > 0.0 {
        Vec3::new(v.x / len, v.y / len, v.z)
    } else {
        v
    }
}
