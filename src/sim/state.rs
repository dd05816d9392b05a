//! World state
//!
//! Everything the frame loop mutates lives here: the entity table, the
//! scratch region, and the bits of frame bookkeeping the renderer reads.

use glam::Vec3;

use super::entity::{Entity, EntityKind, Priority};
use super::geom::Aabb;
use super::store::{EntityStore, Rejected};
use crate::config::SimConfig;
use crate::consts::*;
use crate::render::{EntityView, Renderer};
use crate::scratch::ScratchStack;

/// One simulation instance
#[derive(Debug, Clone)]
pub struct World {
    pub config: SimConfig,
    pub store: EntityStore,
    /// Frame-scoped scratch memory, rewound at the start of every frame
    pub scratch: ScratchStack,
    /// Where the renderer should look from (follows the player)
    pub camera: Option<Vec3>,
    /// Simulated seconds so far
    pub elapsed: f32,
    /// Frames stepped so far
    pub frame_count: u64,
    /// Timestamp of the previous `frame` call
    pub(crate) last_ms: u64,
}

impl World {
    /// Create a world seeded with the player and the four arena walls
    pub fn new(config: SimConfig) -> Self {
        let mut world = Self::empty(config);

        for entity in [player_entity()].into_iter().chain(arena_walls()) {
            // A fresh table has room for the whole arena
            if let Err(err) = world.spawn(entity) {
                log::warn!("arena seeding: {err}");
            }
        }

        log::info!("World seeded with {} entities", world.store.len());
        world
    }

    /// Create a world with no entities
    pub fn empty(config: SimConfig) -> Self {
        let scratch = ScratchStack::new(config.scratch_bytes);
        Self {
            config,
            store: EntityStore::new(),
            scratch,
            camera: None,
            elapsed: 0.0,
            frame_count: 0,
            last_ms: 0,
        }
    }

    /// Add an entity to the table (see [`EntityStore::insert`])
    pub fn spawn(&mut self, entity: Entity) -> Result<usize, Rejected> {
        let slot = self.store.insert(entity)?;
        log::debug!("spawned {entity} in slot {slot}");
        Ok(slot)
    }

    /// The first player entity, if any
    pub fn player(&self) -> Option<&Entity> {
        self.store
            .first_of_kind(EntityKind::Player)
            .and_then(|slot| self.store.get(slot))
    }

    /// Hand the current frame to a renderer
    pub fn present(&self, renderer: &mut impl Renderer) {
        renderer.clear();
        if let Some(camera) = self.camera {
            renderer.set_camera(camera);
        }
        for entity in &self.store {
            renderer.draw_entity(&EntityView::from(entity));
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// The player: a unit box at the origin
pub fn player_entity() -> Entity {
    Entity::new(
        EntityKind::Player,
        Vec3::ZERO,
        Aabb::centered(Vec3::splat(PLAYER_HALF_EXTENT)),
    )
    .with_priority(Priority::Player)
}

/// Four thin walls enclosing the arena
pub fn arena_walls() -> [Entity; 4] {
    let r = ARENA_HALF_WIDTH;
    let t = WALL_HALF_THICKNESS;
    let h = WALL_HALF_HEIGHT;
    let horizontal = Aabb::from_coords(-r, -t, -h, r, t, h);
    let vertical = Aabb::from_coords(-t, -r, -h, t, r, h);

    [
        Entity::new(EntityKind::Wall, Vec3::new(0.0, -r, 0.0), horizontal),
        Entity::new(EntityKind::Wall, Vec3::new(-r, 0.0, 0.0), vertical),
        Entity::new(EntityKind::Wall, Vec3::new(r, 0.0, 0.0), vertical),
        Entity::new(EntityKind::Wall, Vec3::new(0.0, r, 0.0), horizontal),
    ]
    .map(|wall| wall.with_priority(Priority::Map))
}
