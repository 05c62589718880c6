//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when a configured value cannot be read as its field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Key '{key}' must be {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("Key '{key}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        key: String,
        min: i64,
        max: i64,
        actual: i64,
    },
}

impl ValidationError {
    /// Creates a wrong type validation error.
    pub fn wrong_type(key: impl Into<String>, expected: &'static str) -> Self {
        ValidationError::WrongType {
            key: key.into(),
            expected,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(key: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            key: key.into(),
            min,
            max,
            actual,
        }
    }

    /// The configuration key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            ValidationError::WrongType { key, .. } => key,
            ValidationError::OutOfRange { key, .. } => key,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Configuration errors
    ValidationFailed,
    InvalidValue,
    InvalidWorldPattern,
    InvalidCheckProfileToken,

    // Not found errors
    MissingLandingWorld,
    DistributionNotFound,
    ProfileNotFound,

    // Infrastructure errors
    DocumentUnreadable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::InvalidWorldPattern => "INVALID_WORLD_PATTERN",
            ErrorCode::InvalidCheckProfileToken => "INVALID_CHECK_PROFILE_TOKEN",
            ErrorCode::MissingLandingWorld => "MISSING_LANDING_WORLD",
            ErrorCode::DistributionNotFound => "DISTRIBUTION_NOT_FOUND",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::DocumentUnreadable => "DOCUMENT_UNREADABLE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
