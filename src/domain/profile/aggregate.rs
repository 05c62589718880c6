//! Profile aggregate and its validating builder.

use std::sync::Arc;

use super::defaults::ProfileDefaults;
use super::errors::ResolveError;
use crate::domain::check_profile::LocCheckProfile;
use crate::domain::distribution::DistributionSettings;
use crate::domain::foundation::CooldownPolicy;
use crate::domain::location_cache::LocationQueue;
use crate::domain::world::WorldRef;

/// A fully resolved teleport profile.
///
/// Every field is fixed at construction. Only the location queue changes
/// afterwards. A reload builds new profiles rather than editing these.
#[derive(Debug)]
pub struct Profile {
    name: String,
    command_enabled: bool,
    require_explicit_permission: bool,
    priority: f64,
    landing_world: WorldRef,
    call_from_worlds: Vec<WorldRef>,
    distribution: Arc<DistributionSettings>,
    cooldown: CooldownPolicy,
    warmup: u32,
    warmup_cancel_on_move: bool,
    warmup_count_down: bool,
    warmup_enabled: bool,
    low_bound: i32,
    high_bound: i32,
    check_radius_xz: u32,
    check_radius_vert: u32,
    max_attempts: u32,
    cache_location_count: u32,
    check_profile: LocCheckProfile,
    commands_to_run: Vec<String>,
    cost: f64,
    can_use_loc_queue: bool,
    location_queue: LocationQueue,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command_enabled(&self) -> bool {
        self.command_enabled
    }

    pub fn require_explicit_permission(&self) -> bool {
        self.require_explicit_permission
    }

    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub fn landing_world(&self) -> &WorldRef {
        &self.landing_world
    }

    /// Worlds this profile may be invoked from. Never empty.
    pub fn call_from_worlds(&self) -> &[WorldRef] {
        &self.call_from_worlds
    }

    /// Returns true if the profile may be invoked from the named world.
    pub fn can_call_from(&self, world_name: &str) -> bool {
        self.call_from_worlds.iter().any(|w| w.name() == world_name)
    }

    pub fn distribution(&self) -> &Arc<DistributionSettings> {
        &self.distribution
    }

    pub fn cooldown(&self) -> CooldownPolicy {
        self.cooldown
    }

    /// Warmup in seconds.
    pub fn warmup(&self) -> u32 {
        self.warmup
    }

    pub fn warmup_cancel_on_move(&self) -> bool {
        self.warmup_cancel_on_move
    }

    pub fn warmup_count_down(&self) -> bool {
        self.warmup_count_down
    }

    pub fn warmup_enabled(&self) -> bool {
        self.warmup_enabled
    }

    pub fn low_bound(&self) -> i32 {
        self.low_bound
    }

    pub fn high_bound(&self) -> i32 {
        self.high_bound
    }

    pub fn check_radius_xz(&self) -> u32 {
        self.check_radius_xz
    }

    pub fn check_radius_vert(&self) -> u32 {
        self.check_radius_vert
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn cache_location_count(&self) -> u32 {
        self.cache_location_count
    }

    pub fn check_profile(&self) -> LocCheckProfile {
        self.check_profile
    }

    pub fn commands_to_run(&self) -> &[String] {
        &self.commands_to_run
    }

    /// Cost per use. Zero when no economy is available.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn can_use_loc_queue(&self) -> bool {
        self.can_use_loc_queue
    }

    pub fn location_queue(&self) -> &LocationQueue {
        &self.location_queue
    }

    /// How many locations a prefetch worker should add to fill the cache.
    ///
    /// Always zero when the profile cannot use its cache.
    pub fn cache_deficit(&self) -> usize {
        if !self.can_use_loc_queue {
            return 0;
        }
        (self.cache_location_count as usize).saturating_sub(self.location_queue.size())
    }

    /// Returns this profile as a parent layer for further profiles.
    ///
    /// A child of this layer inherits its distribution instance directly.
    pub fn as_defaults(&self) -> ProfileDefaults {
        ProfileDefaults {
            name: self.name.clone(),
            command_enabled: self.command_enabled,
            require_explicit_permission: self.require_explicit_permission,
            priority: self.priority,
            landing_world: Some(Arc::clone(&self.landing_world)),
            call_from_worlds: Some(self.call_from_worlds.clone()),
            distribution: Some(Arc::clone(&self.distribution)),
            cooldown: self.cooldown,
            warmup: self.warmup,
            warmup_cancel_on_move: self.warmup_cancel_on_move,
            warmup_count_down: self.warmup_count_down,
            low_bound: self.low_bound,
            high_bound: self.high_bound,
            check_radius_xz: self.check_radius_xz,
            check_radius_vert: self.check_radius_vert,
            max_attempts: self.max_attempts,
            cache_location_count: self.cache_location_count,
            check_profile: self.check_profile,
            commands_to_run: self.commands_to_run.clone(),
            cost: self.cost,
        }
    }
}

/// Collects profile fields and yields either a valid `Profile` or an error.
///
/// Starts from a parent layer, so any field not set explicitly is inherited.
/// Derived flags are computed in `build` and cannot be set directly.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    fields: ProfileDefaults,
}

impl ProfileBuilder {
    /// Creates a builder for `name` that inherits everything from `parent`.
    pub fn inheriting(name: impl Into<String>, parent: &ProfileDefaults) -> Self {
        let mut fields = parent.clone();
        fields.name = name.into();
        Self { fields }
    }

    pub fn command_enabled(mut self, value: bool) -> Self {
        self.fields.command_enabled = value;
        self
    }

    pub fn require_explicit_permission(mut self, value: bool) -> Self {
        self.fields.require_explicit_permission = value;
        self
    }

    pub fn priority(mut self, value: f64) -> Self {
        self.fields.priority = value;
        self
    }

    pub fn landing_world(mut self, world: WorldRef) -> Self {
        self.fields.landing_world = Some(world);
        self
    }

    /// Replaces the inherited call-from worlds. An empty list keeps the inherited set.
    pub fn call_from_worlds(mut self, worlds: Vec<WorldRef>) -> Self {
        if !worlds.is_empty() {
            self.fields.call_from_worlds = Some(worlds);
        }
        self
    }

    pub fn distribution(mut self, distribution: Arc<DistributionSettings>) -> Self {
        self.fields.distribution = Some(distribution);
        self
    }

    pub fn cooldown(mut self, value: CooldownPolicy) -> Self {
        self.fields.cooldown = value;
        self
    }

    pub fn warmup(mut self, secs: u32) -> Self {
        self.fields.warmup = secs;
        self
    }

    pub fn warmup_cancel_on_move(mut self, value: bool) -> Self {
        self.fields.warmup_cancel_on_move = value;
        self
    }

    pub fn warmup_count_down(mut self, value: bool) -> Self {
        self.fields.warmup_count_down = value;
        self
    }

    pub fn low_bound(mut self, value: i32) -> Self {
        self.fields.low_bound = value;
        self
    }

    pub fn high_bound(mut self, value: i32) -> Self {
        self.fields.high_bound = value;
        self
    }

    pub fn check_radius_xz(mut self, value: u32) -> Self {
        self.fields.check_radius_xz = value;
        self
    }

    pub fn check_radius_vert(mut self, value: u32) -> Self {
        self.fields.check_radius_vert = value;
        self
    }

    pub fn max_attempts(mut self, value: u32) -> Self {
        self.fields.max_attempts = value;
        self
    }

    pub fn cache_location_count(mut self, value: u32) -> Self {
        self.fields.cache_location_count = value;
        self
    }

    pub fn check_profile(mut self, value: LocCheckProfile) -> Self {
        self.fields.check_profile = value;
        self
    }

    /// Replaces the inherited commands. An empty list keeps the inherited commands.
    pub fn commands_to_run(mut self, commands: Vec<String>) -> Self {
        if !commands.is_empty() {
            self.fields.commands_to_run = commands;
        }
        self
    }

    pub fn cost(mut self, value: f64) -> Self {
        self.fields.cost = value;
        self
    }

    /// Validates the collected fields and constructs the profile.
    ///
    /// # Errors
    ///
    /// - `MissingLandingWorld` if neither the builder nor the parent holds one
    /// - `MissingField` if no distribution was bound
    pub fn build(self) -> Result<Profile, ResolveError> {
        let fields = self.fields;

        let landing_world =
            fields
                .landing_world
                .ok_or_else(|| ResolveError::MissingLandingWorld {
                    profile: fields.name.clone(),
                    configured: None,
                })?;

        let distribution =
            fields
                .distribution
                .ok_or_else(|| ResolveError::MissingField {
                    profile: fields.name.clone(),
                    field: "distribution",
                })?;

        let call_from_worlds = match fields.call_from_worlds {
            Some(worlds) if !worlds.is_empty() => worlds,
            _ => vec![Arc::clone(&landing_world)],
        };

        let warmup_enabled = fields.warmup > 0;
        let can_use_loc_queue =
            !distribution.is_player_relative() && fields.cache_location_count > 0;

        Ok(Profile {
            name: fields.name,
            command_enabled: fields.command_enabled,
            require_explicit_permission: fields.require_explicit_permission,
            priority: fields.priority,
            landing_world,
            call_from_worlds,
            distribution,
            cooldown: fields.cooldown,
            warmup: fields.warmup,
            warmup_cancel_on_move: fields.warmup_cancel_on_move,
            warmup_count_down: fields.warmup_count_down,
            warmup_enabled,
            low_bound: fields.low_bound,
            high_bound: fields.high_bound,
            check_radius_xz: fields.check_radius_xz,
            check_radius_vert: fields.check_radius_vert,
            max_attempts: fields.max_attempts,
            cache_location_count: fields.cache_location_count,
            check_profile: fields.check_profile,
            commands_to_run: fields.commands_to_run,
            cost: fields.cost,
            can_use_loc_queue,
            location_queue: LocationQueue::new(),
        })
    }
}
