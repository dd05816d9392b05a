//! Fixed-capacity entity table
//!
//! Entities live in a flat array with an explicit occupancy count. There is no
//! removal: when the table is full, a new entity may only take the slot of the
//! lowest-priority occupant, and only if it strictly out-ranks it.

use thiserror::Error;

use super::entity::{Entity, EntityKind, Priority};
use crate::consts::ENTITY_CAPACITY;

/// Insertion refused because no occupant ranks below the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entity table full: {kind} with priority {incoming:?} cannot evict lowest priority {lowest:?}")]
pub struct Rejected {
    pub kind: EntityKind,
    pub incoming: Priority,
    pub lowest: Priority,
}

/// Owns every entity of a simulation
#[derive(Debug, Clone)]
pub struct EntityStore {
    slots: [Entity; ENTITY_CAPACITY],
    len: usize,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub const CAPACITY: usize = ENTITY_CAPACITY;

    pub fn new() -> Self {
        Self {
            slots: [Entity::default(); ENTITY_CAPACITY],
            len: 0,
        }
    }

    /// Add an entity, evicting the lowest-priority occupant when full.
    ///
    /// Returns the slot the entity landed in.
    pub fn insert(&mut self, entity: Entity) -> Result<usize, Rejected> {
        if self.len < Self::CAPACITY {
            let slot = self.len;
            self.slots[slot] = entity;
            self.len += 1;
            return Ok(slot);
        }

        let slot = self.lowest_priority_slot();
        let lowest = self.slots[slot].priority;
        if lowest >= entity.priority {
            let rejected = Rejected {
                kind: entity.kind,
                incoming: entity.priority,
                lowest,
            };
            log::debug!("{rejected}");
            return Err(rejected);
        }

        on_evict(&self.slots[slot]);
        self.slots[slot] = entity;
        Ok(slot)
    }

    /// First slot holding the minimum priority (`0` when empty)
    fn lowest_priority_slot(&self) -> usize {
        self.as_slice()
            .iter()
            .enumerate()
            .fold(None::<(usize, Priority)>, |best, (i, e)| match best {
                Some((_, p)) if p <= e.priority => best,
                _ => Some((i, e.priority)),
            })
            .map_or(0, |(i, _)| i)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    pub fn get(&self, slot: usize) -> Option<&Entity> {
        self.as_slice().get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Entity> {
        self.as_mut_slice().get_mut(slot)
    }

    /// Live entities in slot order
    #[inline]
    pub fn as_slice(&self) -> &[Entity] {
        &self.slots[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.slots[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.as_mut_slice().iter_mut()
    }

    /// Slot of the first entity of `kind`
    pub fn first_of_kind(&self, kind: EntityKind) -> Option<usize> {
        self.iter().position(|e| e.kind == kind)
    }
}

impl<'a> IntoIterator for &'a EntityStore {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Called on an occupant just before it is overwritten
fn on_evict(entity: &Entity) {
    match entity.kind {
        EntityKind::Player => log::warn!("evicting entity {entity}"),
        _ => log::debug!("evicting entity {entity}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Aabb;
    use glam::Vec3;
    use proptest::prelude::*;

    fn entity(kind: EntityKind, priority: Priority, x: f32) -> Entity {
        Entity::new(kind, Vec3::new(x, 0.0, 0.0), Aabb::centered(Vec3::splat(0.5)))
            .with_priority(priority)
    }

    fn full_store(priority: Priority) -> EntityStore {
        let mut store = EntityStore::new();
        for i in 0..EntityStore::CAPACITY {
            store
                .insert(entity(EntityKind::Thing, priority, i as f32))
                .expect("room left");
        }
        store
    }

    #[test]
    fn test_append_until_full() {
        let mut store = EntityStore::new();
        assert!(store.is_empty());
        for i in 0..EntityStore::CAPACITY {
            let slot = store.insert(entity(EntityKind::Wall, Priority::Map, i as f32)).unwrap();
            assert_eq!(slot, i);
        }
        assert!(store.is_full());
        assert_eq!(store.len(), 256);
    }

    #[test]
    fn test_full_rejects_equal_priority() {
        let mut store = full_store(Priority::Map);
        let before = store.as_slice().to_vec();

        let err = store
            .insert(entity(EntityKind::Monster, Priority::Map, -1.0))
            .unwrap_err();
        assert_eq!(err.incoming, Priority::Map);
        assert_eq!(err.lowest, Priority::Map);
        assert_eq!(store.as_slice(), &before[..]);
    }

    #[test]
    fn test_full_rejects_lower_priority() {
        let mut store = full_store(Priority::Player);
        let before = store.as_slice().to_vec();
        assert!(store.insert(entity(EntityKind::Monster, Priority::Map, -1.0)).is_err());
        assert_eq!(store.as_slice(), &before[..]);
    }

    #[test]
    fn test_evicts_first_lowest_slot() {
        let mut store = full_store(Priority::Player);
        // Two equally low candidates; the earlier one must go
        store.get_mut(10).unwrap().priority = Priority::Unimportant;
        store.get_mut(20).unwrap().priority = Priority::Unimportant;
        let before = store.as_slice().to_vec();

        let incoming = entity(EntityKind::Monster, Priority::Map, 99.0);
        assert_eq!(store.insert(incoming), Ok(10));
        assert_eq!(store.len(), EntityStore::CAPACITY);

        for (i, (now, was)) in store.iter().zip(&before).enumerate() {
            if i == 10 {
                assert_eq!(*now, incoming);
            } else {
                assert_eq!(now, was, "slot {i} changed");
            }
        }
    }

    #[test]
    fn test_evicts_slot_zero_when_it_is_lowest() {
        let mut store = full_store(Priority::Map);
        store.get_mut(0).unwrap().priority = Priority::Unimportant;
        let incoming = entity(EntityKind::Player, Priority::Player, 0.0);
        assert_eq!(store.insert(incoming), Ok(0));
        assert_eq!(store.get(0), Some(&incoming));
    }

    #[test]
    fn test_first_of_kind() {
        let mut store = EntityStore::new();
        store.insert(entity(EntityKind::Wall, Priority::Map, 0.0)).unwrap();
        store.insert(entity(EntityKind::Player, Priority::Player, 1.0)).unwrap();
        assert_eq!(store.first_of_kind(EntityKind::Player), Some(1));
        assert_eq!(store.first_of_kind(EntityKind::Monster), None);
        assert!(store.get(2).is_none());
    }

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Unimportant),
            Just(Priority::Map),
            Just(Priority::Player),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_len_never_exceeds_capacity(
            priorities in prop::collection::vec(priority_strategy(), 0..600)
        ) {
            let mut store = EntityStore::new();
            for (i, priority) in priorities.into_iter().enumerate() {
                let before_len = store.len();
                // Rejection is only possible once the table is full
                let before = store.is_full().then(|| store.as_slice().to_vec());
                let result = store.insert(entity(EntityKind::Thing, priority, i as f32));
                prop_assert!(store.len() <= EntityStore::CAPACITY);
                match (result, before) {
                    (Ok(_), _) => prop_assert!(store.len() >= before_len),
                    (Err(_), Some(before)) => prop_assert_eq!(store.as_slice(), &before[..]),
                    (Err(_), None) => prop_assert!(false, "rejected with room left"),
                }
            }
        }
    }
}
