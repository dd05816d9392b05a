//! Renderer seam
//!
//! The simulation never generates vertices. Each frame it hands the renderer a
//! camera position and a read-only view of every live entity.

use glam::Vec3;

use crate::sim::{Aabb, Entity, EntityKind, Facing};

/// What a renderer needs to draw one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Vec3,
    pub hitbox: Aabb,
    /// Seconds since the entity was created, for animation sampling
    pub animation_clock: f32,
    pub facing: Facing,
    /// Current speed, for choosing walking vs standing frames
    pub speed: f32,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            kind: entity.kind,
            position: entity.position,
            hitbox: entity.hitbox,
            animation_clock: entity.animation_clock,
            facing: entity.facing,
            speed: entity.velocity.length(),
        }
    }
}

/// Implemented by whatever draws the world
pub trait Renderer {
    /// Drop everything queued for the previous frame
    fn clear(&mut self);

    fn set_camera(&mut self, position: Vec3);

    fn draw_entity(&mut self, view: &EntityView);
}

/// Collects views instead of drawing; used by headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub camera: Option<Vec3>,
    pub views: Vec<EntityView>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.camera = None;
        self.views.clear();
    }

    fn set_camera(&mut self, position: Vec3) {
        self.camera = Some(position);
    }

    fn draw_entity(&mut self, view: &EntityView) {
        self.views.push(*view);
    }
}
