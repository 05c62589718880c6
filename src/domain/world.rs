//! Worlds known to the server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared, non-owning handle to a registered world.
pub type WorldRef = Arc<World>;

/// A world as seen by profile resolution: its name and spawn column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct World {
    name: String,
    #[serde(default)]
    spawn_x: i32,
    #[serde(default)]
    spawn_z: i32,
}

impl World {
    pub fn new(name: impl Into<String>, spawn_x: i32, spawn_z: i32) -> Self {
        Self {
            name: name.into(),
            spawn_x,
            spawn_z,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the spawn column as `(x, z)`.
    pub fn spawn(&self) -> (i32, i32) {
        (self.spawn_x, self.spawn_z)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
