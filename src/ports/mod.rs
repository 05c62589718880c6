//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Resolution Inputs
//!
//! - `ConfigSection` - Raw per-profile configuration
//! - `WorldRegistry` - Loaded worlds by name
//! - `DistributionCatalog` - Named spatial distributions
//! - `EconomyStatus` - Whether costs can be charged

mod config_section;
mod distribution_catalog;
mod economy;
mod world_registry;

pub use config_section::ConfigSection;
pub use distribution_catalog::DistributionCatalog;
pub use economy::EconomyStatus;
pub use world_registry::WorldRegistry;
