//! In-memory world registry.

use std::sync::{Arc, RwLock};

use crate::domain::world::{World, WorldRef};
use crate::ports::WorldRegistry;

/// World registry held in memory, in registration order.
///
/// Worlds can be added while resolution is not running; resolution only reads.
#[derive(Debug, Default)]
pub struct InMemoryWorldRegistry {
    worlds: RwLock<Vec<WorldRef>>,
}

impl InMemoryWorldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `worlds` in the given order.
    pub fn with_worlds(worlds: impl IntoIterator<Item = World>) -> Self {
        let registry = Self::new();
        for world in worlds {
            registry.register(world);
        }
        registry
    }

    /// Registers a world, replacing any world of the same name in place.
    pub fn register(&self, world: World) -> WorldRef {
        let world = Arc::new(world);
        let mut worlds = self.worlds.write().unwrap_or_else(|e| e.into_inner());
        match worlds.iter().position(|w| w.name() == world.name()) {
            Some(index) => worlds[index] = Arc::clone(&world),
            None => worlds.push(Arc::clone(&world)),
        }
        world
    }
}

impl WorldRegistry for InMemoryWorldRegistry {
    fn world(&self, name: &str) -> Option<WorldRef> {
        let worlds = self.worlds.read().unwrap_or_else(|e| e.into_inner());
        worlds.iter().find(|w| w.name() == name).cloned()
    }

    fn worlds(&self) -> Vec<WorldRef> {
        self.worlds
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
