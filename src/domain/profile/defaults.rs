//! Parent layers that profiles inherit from.

use std::sync::Arc;

use crate::domain::check_profile::LocCheckProfile;
use crate::domain::distribution::DistributionSettings;
use crate::domain::foundation::CooldownPolicy;
use crate::domain::world::WorldRef;

/// Values a profile inherits for every key its configuration leaves unset.
///
/// The world and distribution fields are optional: the baseline has none,
/// while a layer derived from a resolved profile carries all three.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDefaults {
    pub name: String,
    pub command_enabled: bool,
    pub require_explicit_permission: bool,
    pub priority: f64,
    pub landing_world: Option<WorldRef>,
    pub call_from_worlds: Option<Vec<WorldRef>>,
    pub distribution: Option<Arc<DistributionSettings>>,
    pub cooldown: CooldownPolicy,
    pub warmup: u32,
    pub warmup_cancel_on_move: bool,
    pub warmup_count_down: bool,
    pub low_bound: i32,
    pub high_bound: i32,
    pub check_radius_xz: u32,
    pub check_radius_vert: u32,
    pub max_attempts: u32,
    pub cache_location_count: u32,
    pub check_profile: LocCheckProfile,
    pub commands_to_run: Vec<String>,
    pub cost: f64,
}

impl ProfileDefaults {
    /// Name given to the baseline layer.
    pub const BASELINE_NAME: &'static str = "__baseline__";

    /// The fixed plugin-wide baseline.
    ///
    /// Build it once at startup and pass it to every load. It is never used
    /// operationally; it has no landing world, call-from worlds or distribution.
    pub fn baseline() -> Self {
        Self {
            name: Self::BASELINE_NAME.to_string(),
            command_enabled: true,
            require_explicit_permission: false,
            priority: 1.0,
            landing_world: None,
            call_from_worlds: None,
            distribution: None,
            cooldown: CooldownPolicy::from_secs(30),
            warmup: 0,
            warmup_cancel_on_move: true,
            warmup_count_down: true,
            low_bound: 32,
            high_bound: 255,
            check_radius_xz: 2,
            check_radius_vert: 2,
            max_attempts: 10,
            cache_location_count: 10,
            check_profile: LocCheckProfile::Auto,
            commands_to_run: Vec::new(),
            cost: 0.0,
        }
    }
}
