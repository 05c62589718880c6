//! LoadProfilesHandler - Command handler for loading and reloading profiles.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::ProfileDocument;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::{ProfileDefaults, ProfileResolver, ResolveError};
use crate::domain::registry::{ProfileRegistry, SharedProfiles};

/// Name the shared defaults layer resolves under.
pub const DEFAULTS_LAYER_NAME: &str = "defaults";

/// Command to resolve every profile in a document.
#[derive(Debug, Clone)]
pub struct LoadProfilesCommand {
    pub document: ProfileDocument,
    /// Skip profiles that fail to resolve instead of aborting the load.
    pub skip_invalid: bool,
}

/// Result of a successful load.
#[derive(Debug)]
pub struct LoadProfilesResult {
    pub registry: ProfileRegistry,
    /// Profiles that were skipped, in document order.
    pub failures: Vec<ResolveError>,
}

/// Errors that abort a load. Nothing is registered when one is returned.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("Defaults layer failed to resolve: {0}")]
    Defaults(#[source] ResolveError),

    #[error("Profile load aborted: {0}")]
    Profile(#[source] ResolveError),
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadError::Defaults(e) | LoadError::Profile(e) => e.code(),
        }
    }
}

impl From<LoadError> for DomainError {
    fn from(err: LoadError) -> Self {
        let (LoadError::Defaults(source) | LoadError::Profile(source)) = &err;
        DomainError::new(err.code(), err.to_string()).with_detail("profile", source.profile())
    }
}

/// Handler for loading profiles.
///
/// The baseline is built once by the caller and handed in; the handler
/// never falls back to any other root layer.
pub struct LoadProfilesHandler {
    resolver: Arc<ProfileResolver>,
    baseline: ProfileDefaults,
}

impl LoadProfilesHandler {
    pub fn new(resolver: Arc<ProfileResolver>, baseline: ProfileDefaults) -> Self {
        Self { resolver, baseline }
    }

    pub fn handle(&self, cmd: LoadProfilesCommand) -> Result<LoadProfilesResult, LoadError> {
        // 1. Resolve the shared layer, if any
        let parent = match cmd.document.defaults() {
            Some(body) => {
                let section = body
                    .map_err(|e| ResolveError::invalid_value(DEFAULTS_LAYER_NAME, e))
                    .map_err(LoadError::Defaults)?;
                self.resolver
                    .resolve(&section, DEFAULTS_LAYER_NAME, &self.baseline)
                    .map_err(LoadError::Defaults)?
                    .as_defaults()
            }
            None => self.baseline.clone(),
        };

        // 2. Resolve each profile independently
        let mut profiles = Vec::new();
        let mut failures = Vec::new();
        for (name, body) in cmd.document.profiles() {
            let resolved = body
                .map_err(|e| ResolveError::invalid_value(name.as_str(), e))
                .and_then(|section| self.resolver.resolve(&section, &name, &parent));
            match resolved {
                Ok(profile) => profiles.push(profile),
                Err(e) if cmd.skip_invalid => {
                    warn!(profile = %name, error = %e, "Skipping profile that failed to resolve");
                    failures.push(e);
                }
                Err(e) => return Err(LoadError::Profile(e)),
            }
        }

        // 3. Publish as one registry
        let registry = ProfileRegistry::new(profiles);
        info!(
            loaded = registry.len(),
            skipped = failures.len(),
            "Profiles loaded"
        );

        Ok(LoadProfilesResult { registry, failures })
    }

    /// Loads `cmd` and swaps the result into `shared`.
    ///
    /// On error the current registry stays in place. Returns the skipped profiles.
    pub fn reload(
        &self,
        cmd: LoadProfilesCommand,
        shared: &SharedProfiles,
    ) -> Result<Vec<ResolveError>, LoadError> {
        let result = self.handle(cmd)?;
        shared.replace(result.registry);
        Ok(result.failures)
    }
}
