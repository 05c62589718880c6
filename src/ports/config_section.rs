//! Config Section Port - Typed reads from a hierarchical configuration section.
//!
//! One section holds the settings of one profile. Keys are dotted paths
//! (`warmup.time`, `bounds.low`) into nested sections.

use crate::domain::foundation::ValidationError;

/// Port for reading one profile's raw configuration.
///
/// # Contract
///
/// Every getter returns:
/// - `Ok(None)` when the key is absent (the caller then inherits)
/// - `Ok(Some(value))` when the key is present and has the requested type
/// - `Err(ValidationError)` when the key is present with an incompatible type
///
/// `get_string_list` returns an empty list for an absent key.
pub trait ConfigSection: Send + Sync {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, ValidationError>;

    fn get_f64(&self, key: &str) -> Result<Option<f64>, ValidationError>;

    fn get_i64(&self, key: &str) -> Result<Option<i64>, ValidationError>;

    /// Reads a scalar as text. Numbers and booleans are rendered as written.
    fn get_string(&self, key: &str) -> Result<Option<String>, ValidationError>;

    fn get_string_list(&self, key: &str) -> Result<Vec<String>, ValidationError>;

    /// Returns whether the key is present at all.
    fn contains(&self, key: &str) -> bool;
}
