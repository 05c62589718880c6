//! Distribution definitions bound into profiles.
//!
//! The geometry behind a distribution lives elsewhere; a profile only needs
//! to know where the distribution is centred and how to describe it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved distribution name that resolves to the landing world's border.
pub const WORLD_BORDER: &str = "world-border";

/// Returns the catalog key under which a world's border distribution is registered.
pub fn world_border_key(world_name: &str) -> String {
    format!("{}_{}", WORLD_BORDER, world_name)
}

/// Where candidate coordinates are centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterType {
    /// The landing world's spawn column.
    WorldSpawn,
    /// Fixed coordinates from configuration.
    PresetValue,
    /// Wherever the requesting player stands. Locations cannot be precomputed.
    PlayerLocation,
}

impl CenterType {
    pub fn display_name(&self) -> &'static str {
        match self {
            CenterType::WorldSpawn => "World Spawn",
            CenterType::PresetValue => "Specified in Config",
            CenterType::PlayerLocation => "Player's Location",
        }
    }
}

impl fmt::Display for CenterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A named spatial distribution, owned by the distribution catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DistributionSettings {
    #[serde(default)]
    pub name: String,
    pub center: CenterType,
    #[serde(default)]
    pub center_x: i32,
    #[serde(default)]
    pub center_z: i32,
    /// Human readable description of the shape, e.g. `square r=1000`.
    #[serde(default)]
    pub shape: String,
}

impl DistributionSettings {
    pub fn new(name: impl Into<String>, center: CenterType) -> Self {
        Self {
            name: name.into(),
            center,
            center_x: 0,
            center_z: 0,
            shape: String::new(),
        }
    }

    pub fn with_center_at(mut self, x: i32, z: i32) -> Self {
        self.center_x = x;
        self.center_z = z;
        self
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = shape.into();
        self
    }

    /// True when candidate locations depend on the requesting player.
    pub fn is_player_relative(&self) -> bool {
        self.center == CenterType::PlayerLocation
    }
}
