//! Profile resolution - merges one raw configuration section over a parent layer.
//!
//! Every key follows the same rule: an explicit value wins, otherwise the
//! parent's value is inherited. The exceptions are spelled out where they
//! happen (call-from worlds, distribution binding, commands, cost).

use std::sync::Arc;

use regex::Regex;
use tracing::{info, warn};

use super::aggregate::{Profile, ProfileBuilder};
use super::defaults::ProfileDefaults;
use super::errors::ResolveError;
use crate::domain::check_profile::LocCheckProfile;
use crate::domain::distribution::{world_border_key, WORLD_BORDER};
use crate::domain::foundation::{CooldownPolicy, ValidationError};
use crate::domain::world::WorldRef;
use crate::ports::{ConfigSection, DistributionCatalog, EconomyStatus, WorldRegistry};

/// Configuration keys read from a profile section.
pub mod keys {
    pub const COMMAND_ENABLED: &str = "command-enabled";
    pub const REQUIRE_EXPLICIT_PERMISSION: &str = "require-explicit-permission";
    pub const PRIORITY: &str = "priority";
    pub const LANDING_WORLD: &str = "landing-world";
    pub const CALL_FROM_WORLDS: &str = "call-from-worlds";
    pub const DISTRIBUTION: &str = "distribution";
    pub const COOLDOWN: &str = "cooldown";
    pub const WARMUP_TIME: &str = "warmup.time";
    pub const WARMUP_CANCEL_ON_MOVE: &str = "warmup.cancel-on-move";
    pub const WARMUP_COUNT_DOWN: &str = "warmup.count-down";
    pub const COST: &str = "cost";
    pub const BOUNDS_LOW: &str = "bounds.low";
    pub const BOUNDS_HIGH: &str = "bounds.high";
    pub const CHECK_RADIUS_XZ: &str = "check-radius.x-z";
    pub const CHECK_RADIUS_VERT: &str = "check-radius.vert";
    pub const MAX_ATTEMPTS: &str = "max-attempts.value";
    pub const CACHE_LOCATIONS: &str = "preparations.cache-locations";
    pub const LOCATION_CHECKING_PROFILE: &str = "location-checking-profile";
    pub const THEN_EXECUTE: &str = "then-execute";
}

/// Resolves configuration sections into profiles.
///
/// Holds the collaborators resolution consults. Resolution itself is pure
/// apart from logging: it never touches the collaborators' state.
pub struct ProfileResolver {
    worlds: Arc<dyn WorldRegistry>,
    distributions: Arc<dyn DistributionCatalog>,
    economy: Arc<dyn EconomyStatus>,
}

impl ProfileResolver {
    pub fn new(
        worlds: Arc<dyn WorldRegistry>,
        distributions: Arc<dyn DistributionCatalog>,
        economy: Arc<dyn EconomyStatus>,
    ) -> Self {
        Self {
            worlds,
            distributions,
            economy,
        }
    }

    /// Resolves the section `config` as profile `name` over `parent`.
    ///
    /// Returns a fully valid profile or an error; nothing is logged as
    /// resolved until the profile has been built.
    pub fn resolve(
        &self,
        config: &dyn ConfigSection,
        name: &str,
        parent: &ProfileDefaults,
    ) -> Result<Profile, ResolveError> {
        info!(profile = %name, parent = %parent.name, "Loading profile");
        let reader = SectionReader {
            config,
            profile: name,
        };
        let mut builder = ProfileBuilder::inheriting(name, parent);

        if let Some(v) = reader.read_bool(keys::COMMAND_ENABLED)? {
            builder = builder.command_enabled(v);
        }
        if let Some(v) = reader.read_bool(keys::REQUIRE_EXPLICIT_PERMISSION)? {
            builder = builder.require_explicit_permission(v);
        }
        if let Some(v) = reader.read_f64(keys::PRIORITY)? {
            builder = builder.priority(v);
        }

        let landing_world = self.resolve_landing_world(&reader, parent)?;
        builder = builder
            .landing_world(Arc::clone(&landing_world))
            .call_from_worlds(self.match_call_from_worlds(&reader)?);

        // A parent that already carries a distribution passes it on unchanged.
        if parent.distribution.is_none() {
            let configured = reader.read_string(keys::DISTRIBUTION)?;
            let distribution = configured
                .as_deref()
                .map(|given| self.distribution_key(given, &landing_world))
                .and_then(|key| self.distributions.get(&key))
                .ok_or_else(|| ResolveError::DistributionNotFound {
                    profile: name.to_string(),
                    given: configured.clone(),
                    available: self.distributions.names(),
                })?;
            builder = builder.distribution(distribution);
        }

        if let Some(secs) = reader.read_unsigned::<u64>(keys::COOLDOWN)? {
            builder = builder.cooldown(CooldownPolicy::from_secs(secs));
        }

        if let Some(v) = reader.read_unsigned::<u32>(keys::WARMUP_TIME)? {
            builder = builder.warmup(v);
        }
        if let Some(v) = reader.read_bool(keys::WARMUP_CANCEL_ON_MOVE)? {
            builder = builder.warmup_cancel_on_move(v);
        }
        if let Some(v) = reader.read_bool(keys::WARMUP_COUNT_DOWN)? {
            builder = builder.warmup_count_down(v);
        }

        builder = builder.cost(self.resolve_cost(&reader, parent)?);

        if let Some(v) = reader.read_i32(keys::BOUNDS_LOW)? {
            builder = builder.low_bound(v);
        }
        if let Some(v) = reader.read_i32(keys::BOUNDS_HIGH)? {
            builder = builder.high_bound(v);
        }
        if let Some(v) = reader.read_unsigned::<u32>(keys::CHECK_RADIUS_XZ)? {
            builder = builder.check_radius_xz(v);
        }
        if let Some(v) = reader.read_unsigned::<u32>(keys::CHECK_RADIUS_VERT)? {
            builder = builder.check_radius_vert(v);
        }
        if let Some(v) = reader.read_unsigned::<u32>(keys::MAX_ATTEMPTS)? {
            builder = builder.max_attempts(v);
        }
        if let Some(v) = reader.read_unsigned::<u32>(keys::CACHE_LOCATIONS)? {
            builder = builder.cache_location_count(v);
        }

        if let Some(token) = reader.read_string(keys::LOCATION_CHECKING_PROFILE)? {
            let check_profile = LocCheckProfile::from_token(&token).ok_or_else(|| {
                ResolveError::InvalidCheckProfileToken {
                    profile: name.to_string(),
                    token: token.clone(),
                    accepted: LocCheckProfile::accepted_tokens(),
                }
            })?;
            builder = builder.check_profile(check_profile);
        }

        // An empty list, configured or not, cannot clear the parent's commands.
        builder = builder.commands_to_run(reader.read_list(keys::THEN_EXECUTE)?);

        let profile = builder.build()?;
        for line in profile.info_lines(true) {
            info!(profile = %name, "{}", line);
        }
        Ok(profile)
    }

    fn resolve_landing_world(
        &self,
        reader: &SectionReader<'_>,
        parent: &ProfileDefaults,
    ) -> Result<WorldRef, ResolveError> {
        let configured = reader.read_string(keys::LANDING_WORLD)?;
        let found = configured.as_deref().and_then(|n| self.worlds.world(n));

        if let (Some(world_name), None) = (&configured, &found) {
            warn!(
                profile = %reader.profile,
                world = %world_name,
                "Configured landing world is not loaded, inheriting parent's"
            );
        }

        found
            .or_else(|| parent.landing_world.clone())
            .ok_or_else(|| ResolveError::MissingLandingWorld {
                profile: reader.profile.to_string(),
                configured,
            })
    }

    /// Collects every registered world whose full name matches any pattern.
    ///
    /// Worlds appear in pattern order, then registration order, without repeats.
    fn match_call_from_worlds(
        &self,
        reader: &SectionReader<'_>,
    ) -> Result<Vec<WorldRef>, ResolveError> {
        let patterns = reader.read_list(keys::CALL_FROM_WORLDS)?;
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        let registered = self.worlds.worlds();
        let mut matched: Vec<WorldRef> = Vec::new();
        for pattern in &patterns {
            let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
                ResolveError::InvalidWorldPattern {
                    profile: reader.profile.to_string(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                }
            })?;
            for world in &registered {
                if regex.is_match(world.name())
                    && !matched.iter().any(|m| m.name() == world.name())
                {
                    matched.push(Arc::clone(world));
                }
            }
        }
        Ok(matched)
    }

    /// World-border distributions are registered per world.
    fn distribution_key(&self, given: &str, landing_world: &WorldRef) -> String {
        if given.eq_ignore_ascii_case(WORLD_BORDER) {
            world_border_key(landing_world.name())
        } else {
            given.to_string()
        }
    }

    fn resolve_cost(
        &self,
        reader: &SectionReader<'_>,
        parent: &ProfileDefaults,
    ) -> Result<f64, ResolveError> {
        if !self.economy.is_active() {
            return Ok(0.0);
        }
        match reader.read_f64(keys::COST)? {
            Some(cost) if !cost.is_finite() || cost < 0.0 => Err(ResolveError::invalid_value(
                reader.profile,
                ValidationError::wrong_type(keys::COST, "a non-negative number"),
            )),
            Some(cost) => Ok(cost),
            None => Ok(parent.cost),
        }
    }
}

/// Reads typed values from a section, tagging errors with the profile name.
struct SectionReader<'a> {
    config: &'a dyn ConfigSection,
    profile: &'a str,
}

impl SectionReader<'_> {
    fn tag<T>(&self, result: Result<T, ValidationError>) -> Result<T, ResolveError> {
        result.map_err(|e| ResolveError::invalid_value(self.profile, e))
    }

    fn read_bool(&self, key: &str) -> Result<Option<bool>, ResolveError> {
        self.tag(self.config.get_bool(key))
    }

    fn read_f64(&self, key: &str) -> Result<Option<f64>, ResolveError> {
        self.tag(self.config.get_f64(key))
    }

    fn read_string(&self, key: &str) -> Result<Option<String>, ResolveError> {
        self.tag(self.config.get_string(key))
    }

    fn read_list(&self, key: &str) -> Result<Vec<String>, ResolveError> {
        self.tag(self.config.get_string_list(key))
    }

    fn read_i32(&self, key: &str) -> Result<Option<i32>, ResolveError> {
        let Some(value) = self.tag(self.config.get_i64(key))? else {
            return Ok(None);
        };
        i32::try_from(value).map(Some).map_err(|_| {
            ResolveError::invalid_value(
                self.profile,
                ValidationError::out_of_range(key, i32::MIN as i64, i32::MAX as i64, value),
            )
        })
    }

    fn read_unsigned<T>(&self, key: &str) -> Result<Option<T>, ResolveError>
    where
        T: TryFrom<i64> + Bounded,
    {
        let Some(value) = self.tag(self.config.get_i64(key))? else {
            return Ok(None);
        };
        T::try_from(value).map(Some).map_err(|_| {
            ResolveError::invalid_value(
                self.profile,
                ValidationError::out_of_range(key, 0, T::MAX_I64, value),
            )
        })
    }
}

/// Upper bound of an unsigned field, as reported in range errors.
trait Bounded {
    const MAX_I64: i64;
}

impl Bounded for u32 {
    const MAX_I64: i64 = u32::MAX as i64;
}

impl Bounded for u64 {
    const MAX_I64: i64 = i64::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryDistributionCatalog, InMemoryWorldRegistry, StaticEconomy, YamlSection,
    };
    use crate::domain::distribution::{CenterType, DistributionSettings};
    use crate::domain::world::World;
    use proptest::prelude::*;

    struct Fixture {
        worlds: Arc<InMemoryWorldRegistry>,
        catalog: Arc<InMemoryDistributionCatalog>,
    }

    impl Fixture {
        fn new() -> Self {
            let worlds = Arc::new(InMemoryWorldRegistry::with_worlds(vec![
                World::new("world", 0, 0),
                World::new("nether", 0, 0),
                World::new("the_end", 100, 0),
                World::new("skyblock_1", 0, 0),
                World::new("skyblock_2", 0, 0),
            ]));
            let catalog = Arc::new(InMemoryDistributionCatalog::new());
            catalog.register(
                "square",
                DistributionSettings::new("", CenterType::WorldSpawn).with_shape("square r=1000"),
            );
            catalog.register(
                "near-player",
                DistributionSettings::new("", CenterType::PlayerLocation),
            );
            catalog.register_world_border(&World::new("world", 0, 0));
            Self { worlds, catalog }
        }

        fn resolver(&self, economy: bool) -> ProfileResolver {
            ProfileResolver::new(
                self.worlds.clone(),
                self.catalog.clone(),
                Arc::new(StaticEconomy::from(economy)),
            )
        }

        fn resolve(&self, yaml: &str, parent: &ProfileDefaults) -> Result<Profile, ResolveError> {
            let section = YamlSection::parse(yaml).unwrap();
            self.resolver(true).resolve(&section, "test", parent)
        }

        /// A resolved layer to inherit from.
        fn layer(&self, yaml: &str) -> ProfileDefaults {
            self.resolve(yaml, &ProfileDefaults::baseline())
                .unwrap()
                .as_defaults()
        }
    }

    fn names(worlds: &[WorldRef]) -> Vec<&str> {
        worlds.iter().map(|w| w.name()).collect()
    }

    #[test]
    fn minimal_profile_inherits_baseline_scalars() {
        let fx = Fixture::new();
        let p = fx
            .resolve("landing-world: world\ndistribution: square\n", &ProfileDefaults::baseline())
            .unwrap();

        assert_eq!(p.name(), "test");
        assert!(p.command_enabled());
        assert!(!p.require_explicit_permission());
        assert_eq!(p.priority(), 1.0);
        assert_eq!(p.landing_world().name(), "world");
        assert_eq!(names(p.call_from_worlds()), vec!["world"]);
        assert_eq!(p.distribution().name, "square");
        assert_eq!(p.cooldown().as_millis(), 30_000);
        assert_eq!(p.warmup(), 0);
        assert!(!p.warmup_enabled());
        assert_eq!((p.low_bound(), p.high_bound()), (32, 255));
        assert_eq!(p.max_attempts(), 10);
        assert_eq!(p.cache_location_count(), 10);
        assert_eq!(p.check_profile(), LocCheckProfile::Auto);
        assert!(p.commands_to_run().is_empty());
        assert_eq!(p.cost(), 0.0);
        assert!(p.can_use_loc_queue());
        assert!(p.location_queue().is_empty());
    }

    #[test]
    fn explicit_values_override_parent() {
        let fx = Fixture::new();
        let yaml = r#"
command-enabled: false
require-explicit-permission: true
priority: 2.5
landing-world: the_end
distribution: square
cooldown: 120
warmup:
  time: 5
  cancel-on-move: false
  count-down: false
cost: 12.5
bounds:
  low: 10
  high: 120
check-radius:
  x-z: 3
  vert: 4
max-attempts:
  value: 20
preparations:
  cache-locations: 25
location-checking-profile: c
then-execute:
  - say hello %player%
  - give %player% bread 1
"#;
        let p = fx.resolve(yaml, &ProfileDefaults::baseline()).unwrap();

        assert!(!p.command_enabled());
        assert!(p.require_explicit_permission());
        assert_eq!(p.priority(), 2.5);
        assert_eq!(p.landing_world().name(), "the_end");
        assert_eq!(p.cooldown().as_millis(), 120_000);
        assert_eq!(p.warmup(), 5);
        assert!(p.warmup_enabled());
        assert!(!p.warmup_cancel_on_move());
        assert!(!p.warmup_count_down());
        assert_eq!(p.cost(), 12.5);
        assert_eq!((p.low_bound(), p.high_bound()), (10, 120));
        assert_eq!((p.check_radius_xz(), p.check_radius_vert()), (3, 4));
        assert_eq!(p.max_attempts(), 20);
        assert_eq!(p.cache_location_count(), 25);
        assert_eq!(p.check_profile(), LocCheckProfile::MiddleOut);
        assert_eq!(
            p.commands_to_run(),
            &["say hello %player%".to_string(), "give %player% bread 1".to_string()]
        );
    }

    #[test]
    fn empty_config_over_resolved_layer_is_identical() {
        let fx = Fixture::new();
        let parent = fx.layer(
            "landing-world: nether\ndistribution: square\ncall-from-worlds: [world, nether]\n\
             priority: 3\ncooldown: 5\nwarmup: {time: 2}\ncost: 4\nthen-execute: [heal]\n\
             location-checking-profile: b\n",
        );

        let p = fx.resolve("", &parent).unwrap();
        let mut inherited = p.as_defaults();
        inherited.name = parent.name.clone();

        assert_eq!(inherited, parent);
        assert!(Arc::ptr_eq(p.distribution(), parent.distribution.as_ref().unwrap()));
    }

    #[test]
    fn landing_world_missing_everywhere_fails() {
        let fx = Fixture::new();
        let err = fx
            .resolve("distribution: square\n", &ProfileDefaults::baseline())
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingLandingWorld {
                profile: "test".to_string(),
                configured: None,
            }
        );
    }

    #[test]
    fn unknown_landing_world_falls_back_to_parent() {
        let fx = Fixture::new();
        let parent = fx.layer("landing-world: nether\ndistribution: square\n");

        let p = fx.resolve("landing-world: atlantis\n", &parent).unwrap();
        assert_eq!(p.landing_world().name(), "nether");
    }

    #[test]
    fn unknown_landing_world_without_parent_fails_naming_it() {
        let fx = Fixture::new();
        let err = fx
            .resolve("landing-world: atlantis\ndistribution: square\n", &ProfileDefaults::baseline())
            .unwrap_err();
        assert_eq!(err.code(), crate::domain::foundation::ErrorCode::MissingLandingWorld);
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn call_from_patterns_match_full_names_in_order() {
        let fx = Fixture::new();
        let p = fx
            .resolve(
                "landing-world: world\ndistribution: square\n\
                 call-from-worlds: [\"skyblock_.*\", nether, \"skyblock_1\", \"sky\"]\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap();

        assert_eq!(
            names(p.call_from_worlds()),
            vec!["skyblock_1", "skyblock_2", "nether"]
        );
    }

    #[test]
    fn unmatched_patterns_inherit_parent_set() {
        let fx = Fixture::new();
        let parent = fx.layer(
            "landing-world: world\ndistribution: square\ncall-from-worlds: [world, the_end]\n",
        );

        let p = fx
            .resolve("landing-world: nether\ncall-from-worlds: [\"mars.*\"]\n", &parent)
            .unwrap();
        assert_eq!(names(p.call_from_worlds()), vec!["world", "the_end"]);
    }

    #[test]
    fn unmatched_patterns_without_parent_set_use_landing_world() {
        let fx = Fixture::new();
        let p = fx
            .resolve(
                "landing-world: nether\ndistribution: square\ncall-from-worlds: [\"mars.*\"]\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap();
        assert_eq!(names(p.call_from_worlds()), vec!["nether"]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let fx = Fixture::new();
        let err = fx
            .resolve(
                "landing-world: world\ndistribution: square\ncall-from-worlds: [\"(unclosed\"]\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidWorldPattern { ref pattern, .. } if pattern == "(unclosed"
        ));
    }

    #[test]
    fn world_border_resolves_per_landing_world() {
        let fx = Fixture::new();
        let p = fx
            .resolve("landing-world: world\ndistribution: World-Border\n", &ProfileDefaults::baseline())
            .unwrap();
        assert_eq!(p.distribution().name, "world-border_world");
    }

    #[test]
    fn missing_world_border_lists_all_catalog_keys() {
        let fx = Fixture::new();
        let err = fx
            .resolve("landing-world: nether\ndistribution: world-border\n", &ProfileDefaults::baseline())
            .unwrap_err();

        match err {
            ResolveError::DistributionNotFound {
                given, available, ..
            } => {
                assert_eq!(given.as_deref(), Some("world-border"));
                assert_eq!(available, fx.catalog.names());
                assert_eq!(available, vec!["near-player", "square", "world-border_world"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unconfigured_distribution_without_parent_fails() {
        let fx = Fixture::new();
        let err = fx
            .resolve("landing-world: world\n", &ProfileDefaults::baseline())
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::DistributionNotFound { given: None, .. }
        ));
    }

    #[test]
    fn parent_distribution_is_inherited_without_lookup() {
        let fx = Fixture::new();
        let parent = fx.layer("landing-world: world\ndistribution: square\n");

        let p = fx
            .resolve("distribution: does-not-exist\n", &parent)
            .unwrap();
        assert_eq!(p.distribution().name, "square");
    }

    #[test]
    fn check_profile_token_selects_by_offset() {
        let fx = Fixture::new();
        let p = fx
            .resolve(
                "landing-world: world\ndistribution: square\nlocation-checking-profile: b\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap();
        assert_eq!(p.check_profile(), LocCheckProfile::TopDown);
        assert_eq!(LocCheckProfile::all()[1], p.check_profile());
    }

    #[test]
    fn out_of_range_check_profile_token_fails() {
        let fx = Fixture::new();
        let err = fx
            .resolve(
                "landing-world: world\ndistribution: square\nlocation-checking-profile: z\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidCheckProfileToken {
                profile: "test".to_string(),
                token: "z".to_string(),
                accepted: "a, b, c".to_string(),
            }
        );
    }

    #[test]
    fn empty_commands_inherit_parent_commands() {
        let fx = Fixture::new();
        let parent = fx.layer("landing-world: world\ndistribution: square\nthen-execute: [heal]\n");

        let p = fx.resolve("then-execute: []\n", &parent).unwrap();
        assert_eq!(p.commands_to_run(), &["heal".to_string()]);
    }

    #[test]
    fn empty_commands_over_empty_parent_stay_empty() {
        let fx = Fixture::new();
        let parent = fx.layer("landing-world: world\ndistribution: square\n");

        let p = fx.resolve("then-execute: []\n", &parent).unwrap();
        assert!(p.commands_to_run().is_empty());
    }

    #[test]
    fn cost_is_zero_without_economy() {
        let fx = Fixture::new();
        let mut parent = ProfileDefaults::baseline();
        parent.cost = 3.0;
        let section = YamlSection::parse("landing-world: world\ndistribution: square\ncost: 50\n").unwrap();

        let p = fx.resolver(false).resolve(&section, "test", &parent).unwrap();
        assert_eq!(p.cost(), 0.0);
    }

    #[test]
    fn negative_cost_is_rejected() {
        let fx = Fixture::new();
        let err = fx
            .resolve(
                "landing-world: world\ndistribution: square\ncost: -1\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap_err();
        assert_eq!(err.code(), crate::domain::foundation::ErrorCode::InvalidValue);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let fx = Fixture::new();
        let err = fx
            .resolve(
                "landing-world: world\ndistribution: square\nwarmup: {time: -3}\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::invalid_value(
                "test",
                ValidationError::out_of_range("warmup.time", 0, u32::MAX as i64, -3)
            )
        );
    }

    #[test]
    fn wrong_type_names_the_key() {
        let fx = Fixture::new();
        let err = fx
            .resolve(
                "landing-world: world\ndistribution: square\npriority: high\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Profile 'test': Key 'priority' must be a number");
    }

    #[test]
    fn player_relative_distribution_disables_queue() {
        let fx = Fixture::new();
        let p = fx
            .resolve(
                "landing-world: world\ndistribution: near-player\npreparations: {cache-locations: 50}\n",
                &ProfileDefaults::baseline(),
            )
            .unwrap();
        assert!(!p.can_use_loc_queue());
        assert_eq!(p.cache_deficit(), 0);
    }

    proptest! {
        #[test]
        fn derived_flags_always_match_inputs(
            warmup in 0u32..100,
            cache in 0u32..100,
            player_relative in any::<bool>(),
        ) {
            let fx = Fixture::new();
            let distribution = if player_relative { "near-player" } else { "square" };
            let yaml = format!(
                "landing-world: world\ndistribution: {}\nwarmup: {{time: {}}}\npreparations: {{cache-locations: {}}}\n",
                distribution, warmup, cache
            );
            let p = fx.resolve(&yaml, &ProfileDefaults::baseline()).unwrap();

            prop_assert_eq!(p.warmup_enabled(), p.warmup() > 0);
            prop_assert_eq!(
                p.can_use_loc_queue(),
                !p.distribution().is_player_relative() && p.cache_location_count() > 0
            );
        }

        #[test]
        fn unmatched_patterns_never_leave_call_from_empty(suffix in "[a-z]{1,8}") {
            let fx = Fixture::new();
            let yaml = format!(
                "landing-world: the_end\ndistribution: square\ncall-from-worlds: [\"zz{}\"]\n",
                suffix
            );
            let p = fx.resolve(&yaml, &ProfileDefaults::baseline()).unwrap();
            prop_assert_eq!(names(p.call_from_worlds()), vec!["the_end"]);
        }

        #[test]
        fn empty_config_inherits_every_scalar(
            priority in -10.0f64..10.0,
            warmup in 0u32..60,
            low in -64i32..64,
            attempts in 1u32..50,
        ) {
            let fx = Fixture::new();
            let mut parent = fx.layer("landing-world: world\ndistribution: square\n");
            parent.priority = priority;
            parent.warmup = warmup;
            parent.low_bound = low;
            parent.max_attempts = attempts;

            let p = fx.resolve("", &parent).unwrap();
            let mut inherited = p.as_defaults();
            inherited.name = parent.name.clone();
            prop_assert_eq!(inherited, parent);
        }
    }
}
