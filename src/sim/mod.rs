//! Simulation module
//!
//! All motion and collision logic lives here. This module must stay
//! deterministic:
//! - Entities are stepped in slot order
//! - Each entity is resolved against the current positions of all others
//! - No rendering or platform dependencies

pub mod entity;
pub mod geom;
pub mod input;
pub mod resolve;
pub mod state;
pub mod store;
pub mod sweep;
pub mod tick;

pub use entity::{Entity, EntityKind, Facing, Priority};
pub use geom::{Aabb, Face, Segment2, normalize_planar};
pub use input::{Button, InputSnapshot};
pub use resolve::{Contact, Resolution, ResolveParams, Response, nearest_contact, resolve, resolve_slot};
pub use state::{World, arena_walls, player_entity};
pub use store::{EntityStore, Rejected};
pub use sweep::{Hit, Hit2, segment_vs_box, segment_vs_face, segment_vs_segment};
pub use tick::{drive_player, frame, tick};
