//! Location value object for a landing coordinate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in a named world.
///
/// Locations held in a profile's cache have already been certified safe
/// by the location validator; this type carries no safety information itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_world_and_coordinates() {
        let loc = Location::new("world", 10.0, 64.0, -3.5);
        assert_eq!(loc.to_string(), "world (10, 64, -3.5)");
    }
}
