use slotmap::{new_key_type, SlotMap};

use super::engine::VertexSink;
use super::entity::{Entity, EntityKind, WorldView};
use super::rng::GameRng;
use crate::error::SpawnError;

new_key_type! {
    /// Generation-tagged handle into a [`Pool`]. Stale after the slot is freed.
    pub struct EntityId;
}

/// Fixed-capacity store for one entity kind.
///
/// Slots freed by garbage collection are reused. Iteration follows slot
/// order, so it only depends on the history of spawns and removals.
pub struct Pool<T> {
    capacity: usize,
    slots: SlotMap<EntityId, T>,
}

impl<T: Entity> Pool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: SlotMap::with_key(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        T::KIND
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn spawn(&mut self, entity: T) -> Result<EntityId, SpawnError> {
        if self.is_full() {
            return Err(SpawnError::PoolExhausted {
                kind: T::KIND,
                capacity: self.capacity,
            });
        }
        Ok(self.slots.insert(entity))
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slots.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.slots.get_mut(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.slots.iter_mut()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.values_mut()
    }

    /// Live (not dead) occupants.
    pub fn count_alive(&self) -> usize {
        self.values().filter(|e| e.core().is_alive()).count()
    }

    /// True when nothing in the pool is still alive.
    pub fn all_dead(&self) -> bool {
        self.values().all(|e| e.core().is_dead())
    }

    pub fn update_all(&mut self, world: &WorldView, rng: &mut GameRng, dt: f32) {
        for entity in self.slots.values_mut() {
            entity.update(world, rng, dt);
        }
    }

    pub fn mark_off_screen_as_garbage(&mut self) {
        for entity in self.slots.values_mut() {
            let core = entity.core_mut();
            if core.is_off_screen() {
                core.destroy();
            }
        }
    }

    pub fn render_all(&self, sink: &mut dyn VertexSink) {
        for entity in self.slots.values() {
            entity.render(sink);
        }
    }

    pub fn debug_render_all(&self, sink: &mut dyn VertexSink) {
        for entity in self.slots.values() {
            entity.debug_render(sink);
        }
    }

    /// Frees every slot whose occupant is flagged garbage. Returns how many.
    pub fn collect_garbage(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, e| !e.core().is_garbage());
        before - self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
