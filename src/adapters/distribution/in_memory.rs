//! In-memory distribution catalog.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde_yaml::Value;

use crate::domain::distribution::{world_border_key, CenterType, DistributionSettings};
use crate::domain::world::World;
use crate::ports::DistributionCatalog;

/// Distribution catalog held in memory, keyed by name.
#[derive(Debug, Default)]
pub struct InMemoryDistributionCatalog {
    distributions: RwLock<BTreeMap<String, Arc<DistributionSettings>>>,
}

impl InMemoryDistributionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a distribution under `name`, which overrides the name it carries.
    pub fn register(
        &self,
        name: impl Into<String>,
        mut distribution: DistributionSettings,
    ) -> Arc<DistributionSettings> {
        let name = name.into();
        distribution.name = name.clone();
        let distribution = Arc::new(distribution);
        self.distributions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name, Arc::clone(&distribution));
        distribution
    }

    /// Registers the border distribution of `world` under `world-border_<world>`.
    pub fn register_world_border(&self, world: &World) -> Arc<DistributionSettings> {
        let (x, z) = world.spawn();
        self.register(
            world_border_key(world.name()),
            DistributionSettings::new("", CenterType::WorldSpawn)
                .with_center_at(x, z)
                .with_shape("world border"),
        )
    }

    /// Loads every entry of a YAML mapping of name to distribution.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error of the first malformed entry.
    pub fn load_yaml(&self, mapping: &Value) -> Result<usize, serde_yaml::Error> {
        let Value::Mapping(entries) = mapping else {
            return Ok(0);
        };
        let mut loaded = 0;
        for (name, body) in entries {
            let Some(name) = name.as_str() else {
                continue;
            };
            let distribution: DistributionSettings = serde_yaml::from_value(body.clone())?;
            self.register(name, distribution);
            loaded += 1;
        }
        Ok(loaded)
    }
}

impl DistributionCatalog for InMemoryDistributionCatalog {
    fn get(&self, name: &str) -> Option<Arc<DistributionSettings>> {
        self.distributions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    fn names(&self) -> Vec<String> {
        self.distributions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}
