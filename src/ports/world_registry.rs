//! World Registry Port - Worlds currently loaded on the server.

use crate::domain::world::WorldRef;

/// Port listing the active worlds by name.
///
/// Lookups are in-memory and fast; resolution calls them synchronously.
pub trait WorldRegistry: Send + Sync {
    /// Finds a world by its exact name.
    fn world(&self, name: &str) -> Option<WorldRef>;

    /// Lists every registered world in registration order.
    fn worlds(&self) -> Vec<WorldRef>;
}
