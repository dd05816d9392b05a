//! Per-entity collision resolution
//!
//! The mover's hitbox is swept as a point (its centroid) against every other
//! entity's box grown by the mover's half extents. The nearest hit decides the
//! response: walls absorb the normal part of the motion and the rest becomes a
//! glide; anything else is not handled yet.

use glam::Vec3;

use super::entity::{Entity, EntityKind};
use super::geom::normalize_planar;
use super::sweep::{Hit, segment_vs_box_with};
use crate::config::{NormalMode, SimConfig};

/// Parameters the resolver reads from [`SimConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveParams {
    pub max_iterations: u32,
    pub back_off: f32,
    pub parallel_epsilon: f32,
    pub normal_mode: NormalMode,
}

impl Default for ResolveParams {
    fn default() -> Self {
        Self::from(&SimConfig::default())
    }
}

impl From<&SimConfig> for ResolveParams {
    fn from(config: &SimConfig) -> Self {
        Self {
            max_iterations: config.collision_iterations,
            back_off: config.contact_back_off,
            parallel_epsilon: config.parallel_epsilon,
            normal_mode: config.normal_mode,
        }
    }
}

/// Nearest obstacle along a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub hit: Hit,
    pub kind: EntityKind,
}

/// What the resolver did about a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Slid along a wall
    Glide,
    /// Contact with a non-wall kind; no response is implemented for these
    Unhandled(EntityKind),
}

impl Response {
    fn for_kind(kind: EntityKind) -> Self {
        if kind.is_solid() {
            Response::Glide
        } else {
            Response::Unhandled(kind)
        }
    }
}

/// Summary of one resolver run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Sweeps performed
    pub iterations: u32,
    /// Wall contacts turned into glides
    pub glides: u32,
    /// Response to the last contact, if any
    pub last_response: Option<Response>,
}

/// Nearest contact of the sweep `p0 -> p1` for a mover with `half_extents`.
///
/// Ties keep the obstacle seen first.
pub fn nearest_contact<'a>(
    p0: Vec3,
    p1: Vec3,
    half_extents: Vec3,
    obstacles: impl IntoIterator<Item = &'a Entity>,
    parallel_epsilon: f32,
) -> Option<Contact> {
    obstacles
        .into_iter()
        .filter_map(|target| {
            let bounds = target.world_box().expanded(half_extents);
            segment_vs_box_with(p0, p1, &bounds, parallel_epsilon).map(|hit| Contact {
                hit,
                kind: target.kind,
            })
        })
        .fold(None, |best: Option<Contact>, candidate| match best {
            Some(b) if b.hit.t <= candidate.hit.t => best,
            _ => Some(candidate),
        })
}

/// Move `mover` by `velocity * dt`, gliding along any walls in `obstacles`.
///
/// `obstacles` must not contain the mover itself. Panics if `dt <= 0`.
pub fn resolve<'a, I>(mover: &mut Entity, obstacles: I, dt: f32, params: &ResolveParams) -> Resolution
where
    I: IntoIterator<Item = &'a Entity> + Clone,
{
    assert!(dt > 0.0, "collision resolved with non-positive dt {dt}");

    let half = mover.hitbox.half_extents();
    let center_offset = mover.hitbox.center();
    let mut resolution = Resolution::default();

    for _ in 0..params.max_iterations {
        resolution.iterations += 1;

        let p0 = mover.position + center_offset;
        let p1 = p0 + mover.velocity * dt;

        let Some(contact) = nearest_contact(p0, p1, half, obstacles.clone(), params.parallel_epsilon)
        else {
            break;
        };

        let response = Response::for_kind(contact.kind);
        resolution.last_response = Some(response);

        match response {
            Response::Glide => {
                let n = match params.normal_mode {
                    NormalMode::Full => contact.hit.unit_normal(),
                    NormalMode::Planar => normalize_planar(contact.hit.normal),
                };
                let v = p1 - p0;
                let dot = v.dot(n);

                // Up against the wall, backed off along the normal
                let center = p0 + n * (dot * contact.hit.t) + n * params.back_off;
                mover.position = center - center_offset;
                mover.velocity = (v - n * dot) / dt;
                resolution.glides += 1;
            }
            Response::Unhandled(kind) => {
                // Nothing changed, so another sweep would find the same contact
                log::trace!("no collision response for {kind}");
                break;
            }
        }
    }

    mover.position += mover.velocity * dt;
    resolution
}

/// Resolve the entity in `slot` against every other entity in `entities`
pub fn resolve_slot(
    entities: &mut [Entity],
    slot: usize,
    dt: f32,
    params: &ResolveParams,
) -> Resolution {
    let (before, rest) = entities.split_at_mut(slot);
    let Some((mover, after)) = rest.split_first_mut() else {
        return Resolution::default();
    };
    resolve(mover, before.iter().chain(after.iter()), dt, params)
}
