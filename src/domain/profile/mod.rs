//! Profile domain module.
//!
//! A profile is a named bundle of teleport behaviour resolved from one
//! configuration section layered over a parent (`ProfileDefaults`).
//!
//! - `ProfileResolver` - reads a section and drives the builder
//! - `ProfileBuilder` - the only way to construct a `Profile`
//! - `ProfileDefaults` - a parent layer; `baseline()` is the root

mod aggregate;
mod defaults;
mod errors;
mod resolver;
mod summary;

pub use aggregate::{Profile, ProfileBuilder};
pub use defaults::ProfileDefaults;
pub use errors::ResolveError;
pub use resolver::{keys, ProfileResolver};
pub use summary::{ProfileSummary, EXPLICIT_PERMISSION_PREFIX};
