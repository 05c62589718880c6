//! Domain layer containing profile resolution and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, locations, cooldowns)
//! - `world` - Worlds as seen by resolution
//! - `distribution` - Named spatial distributions
//! - `check_profile` - Safe-location search strategies
//! - `profile` - Profile resolution, builder and defaults
//! - `location_cache` - Per-profile queue of cached locations
//! - `registry` - Active profiles and reload swapping

pub mod check_profile;
pub mod distribution;
pub mod foundation;
pub mod location_cache;
pub mod profile;
pub mod registry;
pub mod world;
