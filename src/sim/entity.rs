//! Entity types
//!
//! An entity is a plain `Copy` value owned by the [`EntityStore`](super::EntityStore).

use std::fmt;

use glam::{Vec2, Vec3};

use super::geom::Aabb;

/// What an entity is; drives per-frame behaviour and renderer dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    None,
    Player,
    Wall,
    Monster,
    Derper,
    Thing,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::None,
        EntityKind::Player,
        EntityKind::Wall,
        EntityKind::Monster,
        EntityKind::Derper,
        EntityKind::Thing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::None => "Null",
            EntityKind::Player => "Player",
            EntityKind::Wall => "Wall",
            EntityKind::Monster => "Monster",
            EntityKind::Derper => "Derper",
            EntityKind::Thing => "Thing",
        }
    }

    /// Whether the resolver glides along this kind on contact
    pub fn is_solid(&self) -> bool {
        matches!(self, EntityKind::Wall)
    }

    /// Whether this kind is advanced by the collision resolver each frame
    pub fn is_mobile(&self) -> bool {
        matches!(
            self,
            EntityKind::Player | EntityKind::Monster | EntityKind::Derper | EntityKind::Thing
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank used by the store when it has to evict.
///
/// Declared in ascending order so the derived `Ord` matches the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Priority {
    Unimportant = -1,
    #[default]
    Map = 0,
    Player = 1,
}

impl Priority {
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }
}

/// Last movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

/// A simulated object
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub priority: Priority,
    /// Collision volume relative to `position`
    pub hitbox: Aabb,
    /// Seconds since creation
    pub animation_clock: f32,
    pub facing: Facing,
    /// Reserved for AI steering
    pub target: Vec2,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Vec3, hitbox: Aabb) -> Self {
        Self {
            kind,
            position,
            hitbox,
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Hitbox placed in world space
    #[inline]
    pub fn world_box(&self) -> Aabb {
        self.hitbox.translated(self.position)
    }

    /// World-space centroid of the hitbox
    #[inline]
    pub fn world_center(&self) -> Vec3 {
        self.position + self.hitbox.center()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position;
        let b = self.hitbox;
        write!(
            f,
            "{}: pos: ({:.3},{:.3},{:.3}) hitbox: ({:.3},{:.3},{:.3})-({:.3},{:.3},{:.3})",
            self.kind, p.x, p.y, p.z, b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
        )
    }
}
