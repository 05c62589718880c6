//! Active profiles, published as immutable snapshots.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::foundation::{DomainError, ErrorCode};
use super::profile::Profile;

/// The set of profiles activated by one load.
///
/// Never modified after construction; a reload builds a new registry.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Arc<Profile>>,
    by_name: HashMap<String, usize>,
}

impl ProfileRegistry {
    /// Builds a registry in the given order. A later profile replaces an earlier one of the same name.
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let mut registry = Self::default();
        for profile in profiles {
            let profile = Arc::new(profile);
            let existing = registry.by_name.get(profile.name()).copied();
            match existing {
                Some(index) => registry.profiles[index] = profile,
                None => {
                    registry
                        .by_name
                        .insert(profile.name().to_string(), registry.profiles.len());
                    registry.profiles.push(profile);
                }
            }
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<Arc<Profile>> {
        self.by_name
            .get(name)
            .map(|&index| Arc::clone(&self.profiles[index]))
    }

    /// Like `get`, but a missing name is a `ProfileNotFound` error listing the active names.
    pub fn require(&self, name: &str) -> Result<Arc<Profile>, DomainError> {
        self.get(name).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile '{}' is not active", name),
            )
            .with_detail("profile", name)
            .with_detail("available", self.names().join(" "))
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Profile>> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Command-enabled profiles callable from `world_name`, highest priority first.
    ///
    /// Equal priorities keep load order; choosing among them is up to the caller.
    pub fn eligible_for_world(&self, world_name: &str) -> Vec<Arc<Profile>> {
        let mut eligible: Vec<Arc<Profile>> = self
            .profiles
            .iter()
            .filter(|p| p.command_enabled() && p.can_call_from(world_name))
            .cloned()
            .collect();
        eligible.sort_by(|a, b| b.priority().total_cmp(&a.priority()));
        eligible
    }
}

/// Holder for the current registry, swapped wholesale on reload.
///
/// Readers take an `Arc` snapshot; a reload never changes a snapshot
/// someone already holds.
#[derive(Debug, Default)]
pub struct SharedProfiles {
    current: RwLock<Arc<ProfileRegistry>>,
}

impl SharedProfiles {
    pub fn new(registry: ProfileRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    pub fn current(&self) -> Arc<ProfileRegistry> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Publishes `registry` and returns the one it replaced.
    pub fn replace(&self, registry: ProfileRegistry) -> Arc<ProfileRegistry> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, Arc::new(registry))
    }
}
