//! Distribution Catalog Port - Named spatial distributions.

use std::sync::Arc;

use crate::domain::distribution::DistributionSettings;

/// Port for looking up distributions by name.
///
/// The catalog owns its distributions; profiles hold shared references.
/// World-border distributions are registered once per world under
/// `world-border_<world>`.
pub trait DistributionCatalog: Send + Sync {
    fn get(&self, name: &str) -> Option<Arc<DistributionSettings>>;

    /// Every key in the catalog, sorted.
    fn names(&self) -> Vec<String>;
}
