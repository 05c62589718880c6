//! Human readable summaries of resolved profiles.

use serde::Serialize;

use super::aggregate::Profile;
use crate::domain::check_profile::LocCheckProfile;
use crate::domain::distribution::CenterType;

/// Permission node prefix for profiles that require explicit permission.
pub const EXPLICIT_PERMISSION_PREFIX: &str = "rtp.usebyname.";

fn enabled_or_disabled(value: bool) -> &'static str {
    if value {
        "Enabled"
    } else {
        "Disabled"
    }
}

impl Profile {
    /// One line per field, each prefixed with `[name] `.
    ///
    /// The short form covers what players notice; `full` adds the search
    /// tuning (bounds, radii, attempts, caching).
    pub fn info_lines(&self, full: bool) -> Vec<String> {
        let mut lines = vec![
            format!("Command: {}", enabled_or_disabled(self.command_enabled())),
            format!(
                "Require explicit permission node: {}",
                if self.require_explicit_permission() {
                    format!("True ({}{})", EXPLICIT_PERMISSION_PREFIX, self.name())
                } else {
                    "False".to_string()
                }
            ),
            format!("Priority: {}", self.priority()),
            format!(
                "The user will land in the following world: {}",
                self.landing_world().name()
            ),
            "Call from worlds:".to_string(),
        ];
        for (i, world) in self.call_from_worlds().iter().enumerate() {
            lines.push(format!("  {}: {}", i, world.name()));
        }

        let distribution = self.distribution();
        lines.push(format!(
            "Distribution: {}{}",
            distribution.name,
            if distribution.shape.is_empty() {
                String::new()
            } else {
                format!(" ({})", distribution.shape)
            }
        ));
        lines.push(format!("Rtp Region center is set to: {}", self.region_center()));

        lines.push(if self.cooldown().is_enabled() {
            format!("Cooldown time: {}", self.cooldown())
        } else {
            "Cooldown: Disabled".to_string()
        });

        if self.warmup_enabled() {
            lines.push(format!("Warmup: Enabled, Seconds: {}", self.warmup()));
            lines.push(format!(
                "  Cancel warmup on player move: {}",
                enabled_or_disabled(self.warmup_cancel_on_move())
            ));
            lines.push(format!(
                "  Count down to teleport: {}",
                enabled_or_disabled(self.warmup_count_down())
            ));
        } else {
            lines.push("Warmup: Disabled".to_string());
        }

        lines.push(if self.cost() > 0.0 {
            format!("Cost: {}", self.cost())
        } else {
            "Cost: Disabled".to_string()
        });

        if full {
            lines.push(format!(
                "Low bound: {}, High bound: {}",
                self.low_bound(),
                self.high_bound()
            ));
            lines.push(format!(
                "Check radius x and z: {}, Vert: {}",
                self.check_radius_xz(),
                self.check_radius_vert()
            ));
            lines.push(format!("Max attempts set to: {}", self.max_attempts()));
            lines.push(format!(
                "Location checking profile: {}",
                self.check_profile()
            ));
            lines.push(if self.can_use_loc_queue() {
                format!(
                    "Location caching: Enabled, Num: {}",
                    self.cache_location_count()
                )
            } else {
                "Location caching: Disabled".to_string()
            });
        }

        let prefix = format!("[{}] ", self.name());
        lines.into_iter().map(|l| format!("{}{}", prefix, l)).collect()
    }

    /// Describes where the distribution is centred for this profile.
    pub fn region_center(&self) -> String {
        let distribution = self.distribution();
        match distribution.center {
            CenterType::WorldSpawn => {
                let (x, z) = self.landing_world().spawn();
                format!("{} ({}, {})", CenterType::WorldSpawn, x, z)
            }
            CenterType::PresetValue => format!(
                "{} ({}, {})",
                CenterType::PresetValue,
                distribution.center_x,
                distribution.center_z
            ),
            CenterType::PlayerLocation => CenterType::PlayerLocation.to_string(),
        }
    }

    /// `<landing world> [<cached locations>]`, for queue diagnostics.
    pub fn queue_size_line(&self) -> String {
        format!(
            "{} [{}]",
            self.landing_world().name(),
            self.location_queue().size()
        )
    }

    /// A serializable snapshot of the resolved fields.
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            name: self.name().to_string(),
            command_enabled: self.command_enabled(),
            require_explicit_permission: self.require_explicit_permission(),
            priority: self.priority(),
            landing_world: self.landing_world().name().to_string(),
            call_from_worlds: self
                .call_from_worlds()
                .iter()
                .map(|w| w.name().to_string())
                .collect(),
            distribution: self.distribution().name.clone(),
            center: self.distribution().center,
            cooldown_ms: self.cooldown().as_millis(),
            warmup: self.warmup(),
            warmup_enabled: self.warmup_enabled(),
            warmup_cancel_on_move: self.warmup_cancel_on_move(),
            warmup_count_down: self.warmup_count_down(),
            low_bound: self.low_bound(),
            high_bound: self.high_bound(),
            check_radius_xz: self.check_radius_xz(),
            check_radius_vert: self.check_radius_vert(),
            max_attempts: self.max_attempts(),
            cache_location_count: self.cache_location_count(),
            check_profile: self.check_profile(),
            commands_to_run: self.commands_to_run().to_vec(),
            cost: self.cost(),
            can_use_loc_queue: self.can_use_loc_queue(),
            cached_locations: self.location_queue().size(),
        }
    }
}

/// Serializable view of a profile, for diagnostics output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub command_enabled: bool,
    pub require_explicit_permission: bool,
    pub priority: f64,
    pub landing_world: String,
    pub call_from_worlds: Vec<String>,
    pub distribution: String,
    pub center: CenterType,
    pub cooldown_ms: u64,
    pub warmup: u32,
    pub warmup_enabled: bool,
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
    pub can_use_loc_queue: bool,
    pub cached_locations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::distribution::DistributionSettings;
    use crate::domain::profile::{ProfileBuilder, ProfileDefaults};
    use crate::domain::world::World;
    use std::sync::Arc;

    fn profile(center: CenterType) -> Profile {
        ProfileBuilder::inheriting("survival", &ProfileDefaults::baseline())
            .landing_world(Arc::new(World::new("world", 100, -50)))
            .distribution(Arc::new(
                DistributionSettings::new("square", center)
                    .with_center_at(7, 8)
                    .with_shape("square r=1000"),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn every_line_is_prefixed_with_profile_name() {
        let lines = profile(CenterType::WorldSpawn).info_lines(true);
        assert!(lines.iter().all(|l| l.starts_with("[survival] ")));
    }

    #[test]
    fn short_form_omits_search_tuning() {
        let p = profile(CenterType::WorldSpawn);
        let short = p.info_lines(false);
        let full = p.info_lines(true);

        assert!(!short.iter().any(|l| l.contains("Max attempts")));
        assert!(full.iter().any(|l| l.contains("Max attempts set to: 10")));
        assert_eq!(full.len(), short.len() + 5);
    }

    #[test]
    fn lists_call_from_worlds_with_index() {
        let lines = profile(CenterType::WorldSpawn).info_lines(false);
        assert!(lines.contains(&"[survival] Call from worlds:".to_string()));
        assert!(lines.contains(&"[survival]   0: world".to_string()));
    }

    #[test]
    fn default_values_render_as_disabled() {
        let lines = profile(CenterType::WorldSpawn).info_lines(true);
        assert!(lines.contains(&"[survival] Warmup: Disabled".to_string()));
        assert!(lines.contains(&"[survival] Cost: Disabled".to_string()));
        assert!(lines.contains(&"[survival] Cooldown time: 30 seconds.".to_string()));
        assert!(lines.contains(&"[survival] Location caching: Enabled, Num: 10".to_string()));
    }

    #[test]
    fn region_center_depends_on_center_type() {
        assert_eq!(
            profile(CenterType::WorldSpawn).region_center(),
            "World Spawn (100, -50)"
        );
        assert_eq!(
            profile(CenterType::PresetValue).region_center(),
            "Specified in Config (7, 8)"
        );
        assert_eq!(
            profile(CenterType::PlayerLocation).region_center(),
            "Player's Location"
        );
    }

    #[test]
    fn queue_size_line_reports_cached_count() {
        let p = profile(CenterType::WorldSpawn);
        assert_eq!(p.queue_size_line(), "world [0]");
    }

    #[test]
    fn summary_serializes_to_json() {
        let json = serde_json::to_value(profile(CenterType::PresetValue).summary()).unwrap();

        assert_eq!(json["name"], "survival");
        assert_eq!(json["center"], "preset-value");
        assert_eq!(json["check_profile"], "auto");
        assert_eq!(json["cooldown_ms"], 30_000);
        assert_eq!(json["call_from_worlds"][0], "world");
    }
}
