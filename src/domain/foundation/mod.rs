//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of teleport profile resolution.

mod cooldown;
mod errors;
mod location;

pub use cooldown::CooldownPolicy;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use location::Location;
