//! Profile document - the YAML file profiles are loaded from.
//!
//! ```yaml
//! worlds:
//!   - { name: world, spawn-x: 0, spawn-z: 0 }
//! distributions:
//!   square-1000: { center: world-spawn, shape: square r=1000 }
//! defaults:
//!   landing-world: world
//!   distribution: square-1000
//! profiles:
//!   survival: { cooldown: 60 }
//! ```
//!
//! `worlds` and `distributions` stand in for the live server when the
//! document is checked offline.

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

use super::section::{scalar_to_string, YamlSection};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::world::World;

const PROFILE_BODY: &str = "a mapping of profile settings";

/// Errors reading or interpreting a profile document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read profile document '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile document is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Profile document key '{key}' must be {expected}")]
    Malformed {
        key: &'static str,
        expected: &'static str,
    },
}

impl DocumentError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::DocumentUnreadable
    }
}

impl From<DocumentError> for DomainError {
    fn from(err: DocumentError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// A profile body as declared, or why it cannot be used.
pub type ProfileBody = Result<YamlSection, ValidationError>;

/// A parsed profile document.
#[derive(Debug, Clone, Default)]
pub struct ProfileDocument {
    root: YamlSection,
}

impl ProfileDocument {
    pub const DEFAULTS: &'static str = "defaults";
    pub const PROFILES: &'static str = "profiles";
    pub const WORLDS: &'static str = "worlds";
    pub const DISTRIBUTIONS: &'static str = "distributions";

    /// Parses a document. `profiles` must be a mapping when present.
    pub fn parse(yaml: &str) -> Result<Self, DocumentError> {
        let root = YamlSection::parse(yaml)?;
        match root.as_value().get(Self::PROFILES) {
            None | Some(Value::Null) | Some(Value::Mapping(_)) => Ok(Self { root }),
            Some(_) => Err(DocumentError::Malformed {
                key: Self::PROFILES,
                expected: "a mapping of profile names to settings",
            }),
        }
    }

    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The shared defaults layer, if the document declares one.
    pub fn defaults(&self) -> Option<ProfileBody> {
        match self.root.as_value().get(Self::DEFAULTS) {
            None | Some(Value::Null) => None,
            Some(body) => Some(profile_body(Self::DEFAULTS, body)),
        }
    }

    /// Named profile bodies in document order.
    ///
    /// Names are taken as written, dots included. A profile declared with no
    /// body (`name:` or `name: ~`) gets an empty section. A body that is not a
    /// mapping, or a name that is not text, is returned as an error so the
    /// profile fails instead of resolving with inherited values only.
    pub fn profiles(&self) -> Vec<(String, ProfileBody)> {
        let Some(Value::Mapping(profiles)) = self.root.as_value().get(Self::PROFILES) else {
            return Vec::new();
        };
        profiles
            .iter()
            .map(|(key, body)| match key {
                Value::String(name) => (name.clone(), profile_body(name, body)),
                other => {
                    let name = scalar_to_string(other).unwrap_or_else(|| format!("{:?}", other));
                    let err = ValidationError::wrong_type(name.clone(), "a quoted profile name");
                    (name, Err(err))
                }
            })
            .collect()
    }

    /// Worlds declared for offline checking.
    pub fn worlds(&self) -> Result<Vec<World>, DocumentError> {
        match self.root.as_value().get(Self::WORLDS) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_yaml::from_value(value.clone())?),
        }
    }

    /// Raw `distributions` mapping for offline checking.
    pub fn distributions(&self) -> Option<&Value> {
        self.root.as_value().get(Self::DISTRIBUTIONS)
    }
}

fn profile_body(name: &str, body: &Value) -> ProfileBody {
    match body {
        Value::Null => Ok(YamlSection::default()),
        Value::Mapping(_) => Ok(YamlSection::new(body.clone())),
        _ => Err(ValidationError::wrong_type(name, PROFILE_BODY)),
    }
}
