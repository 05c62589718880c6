//! CooldownPolicy value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a player must wait between uses of a profile.
///
/// Configured in whole seconds, held in milliseconds. Zero disables the cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CooldownPolicy(u64);

impl CooldownPolicy {
    /// No cooldown.
    pub const DISABLED: Self = Self(0);

    /// Creates a policy from a duration in whole seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Returns the duration in milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Returns the duration truncated to whole seconds.
    pub fn as_secs(&self) -> u64 {
        self.0 / 1000
    }

    pub fn is_enabled(&self) -> bool {
        self.0 > 0
    }
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self::DISABLED
    }
}

impl fmt::Display for CooldownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_enabled() {
            write!(f, "{} seconds.", self.as_secs())
        } else {
            write!(f, "Disabled")
        }
    }
}
