//! LocCheckProfile enum selecting the safe-location search strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy the safe-location search uses to scan a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocCheckProfile {
    /// Let the search pick per world environment.
    Auto,
    /// Scan downwards from the high bound.
    TopDown,
    /// Scan outwards from the middle of the bounds.
    MiddleOut,
}

/// Configuration token for each strategy. Every variant appears exactly once.
const TOKENS: &[(char, LocCheckProfile)] = &[
    ('a', LocCheckProfile::Auto),
    ('b', LocCheckProfile::TopDown),
    ('c', LocCheckProfile::MiddleOut),
];

impl LocCheckProfile {
    /// Returns all strategies in token order.
    pub fn all() -> &'static [LocCheckProfile] {
        &[
            LocCheckProfile::Auto,
            LocCheckProfile::TopDown,
            LocCheckProfile::MiddleOut,
        ]
    }

    /// Maps a configured token to a strategy by its first character, ignoring case.
    ///
    /// Returns `None` for an empty token or an unmapped character.
    pub fn from_token(token: &str) -> Option<Self> {
        let first = token.chars().next()?.to_ascii_lowercase();
        TOKENS
            .iter()
            .find(|(c, _)| *c == first)
            .map(|(_, profile)| *profile)
    }

    /// Returns the configuration token for this strategy.
    pub fn token(&self) -> char {
        match self {
            LocCheckProfile::Auto => 'a',
            LocCheckProfile::TopDown => 'b',
            LocCheckProfile::MiddleOut => 'c',
        }
    }

    /// Returns the list of accepted tokens, for error messages.
    pub fn accepted_tokens() -> String {
        TOKENS
            .iter()
            .map(|(c, _)| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LocCheckProfile::Auto => "Auto",
            LocCheckProfile::TopDown => "Top down",
            LocCheckProfile::MiddleOut => "Middle out",
        }
    }
}

impl fmt::Display for LocCheckProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
