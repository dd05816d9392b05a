//! Flat Arena - swept-box motion and collision core
//!
//! Core modules:
//! - `sim`: Entity table, sweep tests, collision resolution, frame stepping
//! - `config`: Data-driven tuning loaded from JSON
//! - `render`: Read-only seam for whatever draws the world
//! - `scratch`: Frame-scoped bump memory
//! - `logging`: Logger setup for binaries and tests

pub mod config;
pub mod logging;
pub mod render;
pub mod scratch;
pub mod sim;

pub use config::{ConfigError, NormalMode, PlayerTuning, SimConfig};
pub use render::{EntityView, RecordingRenderer, Renderer};
pub use sim::{Button, Entity, EntityKind, InputSnapshot, World, frame, tick};

/// Simulation constants
pub mod consts {
    /// Slots in the entity table
    pub const ENTITY_CAPACITY: usize = 256;

    /// Longest step a single frame may take (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;
    /// Sweeps per entity per frame before the remaining motion is applied as is
    pub const COLLISION_ITERATIONS: u32 = 4;
    /// Distance kept between a mover and the wall it glides along
    pub const CONTACT_BACK_OFF: f32 = 1e-4;
    /// Below this `|dir . normal|` a segment counts as parallel to a face
    pub const PARALLEL_EPSILON: f32 = 1e-4;

    /// Player handling (units/s², units/s, units/s²)
    pub const PLAYER_ACCELERATION: f32 = 15.0;
    pub const PLAYER_MAX_SPEED: f32 = 3.0;
    pub const PLAYER_SKID: f32 = 7.0;
    pub const PLAYER_HALF_EXTENT: f32 = 0.5;

    /// Camera sits this far above the player
    pub const CAMERA_HEIGHT: f32 = 10.0;

    /// Frame scratch region (128 MiB)
    pub const SCRATCH_BYTES: usize = 128 * 1024 * 1024;

    /// Arena layout
    pub const ARENA_HALF_WIDTH: f32 = 4.0;
    pub const WALL_HALF_THICKNESS: f32 = 0.1;
    pub const WALL_HALF_HEIGHT: f32 = 2.0;
}
