//! Profile resolution error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Reasons a profile fails to resolve.
///
/// Every variant names the profile so an operator can find the offending
/// section. None of these are transient; resolution is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(
        "Profile '{profile}': landing world not recognised (configured: '{}')",
        .configured.as_deref().unwrap_or("<unset>")
    )]
    MissingLandingWorld {
        profile: String,
        configured: Option<String>,
    },

    #[error(
        "Profile '{profile}': distribution not found. Distribution given: '{}', distributions available: {}",
        .given.as_deref().unwrap_or("<unset>"),
        .available.join(" ")
    )]
    DistributionNotFound {
        profile: String,
        given: Option<String>,
        available: Vec<String>,
    },

    #[error(
        "Profile '{profile}': location-checking-profile '{token}' is not one of: {accepted}"
    )]
    InvalidCheckProfileToken {
        profile: String,
        token: String,
        accepted: String,
    },

    #[error("Profile '{profile}': call-from-worlds pattern '{pattern}' is invalid: {reason}")]
    InvalidWorldPattern {
        profile: String,
        pattern: String,
        reason: String,
    },

    #[error("Profile '{profile}': no {field} was bound")]
    MissingField {
        profile: String,
        field: &'static str,
    },

    #[error("Profile '{profile}': {source}")]
    InvalidValue {
        profile: String,
        #[source]
        source: ValidationError,
    },
}

impl ResolveError {
    pub fn invalid_value(profile: impl Into<String>, source: ValidationError) -> Self {
        ResolveError::InvalidValue {
            profile: profile.into(),
            source,
        }
    }

    /// Name of the profile that failed.
    pub fn profile(&self) -> &str {
        match self {
            ResolveError::MissingLandingWorld { profile, .. }
            | ResolveError::DistributionNotFound { profile, .. }
            | ResolveError::InvalidCheckProfileToken { profile, .. }
            | ResolveError::InvalidWorldPattern { profile, .. }
            | ResolveError::MissingField { profile, .. }
            | ResolveError::InvalidValue { profile, .. } => profile,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::MissingLandingWorld { .. } => ErrorCode::MissingLandingWorld,
            ResolveError::DistributionNotFound { .. } => ErrorCode::DistributionNotFound,
            ResolveError::InvalidCheckProfileToken { .. } => ErrorCode::InvalidCheckProfileToken,
            ResolveError::InvalidWorldPattern { .. } => ErrorCode::InvalidWorldPattern,
            ResolveError::MissingField { .. } => ErrorCode::ValidationFailed,
            ResolveError::InvalidValue { .. } => ErrorCode::InvalidValue,
        }
    }
}

impl From<ResolveError> for DomainError {
    fn from(err: ResolveError) -> Self {
        let profile = err.profile().to_string();
        DomainError::new(err.code(), err.to_string()).with_detail("profile", profile)
    }
}
