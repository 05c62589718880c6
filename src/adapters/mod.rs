//! Adapters - Implementations of port interfaces.
//!
//! - `yaml` - `ConfigSection` over parsed YAML
//! - `world` - In-memory world registry
//! - `distribution` - In-memory distribution catalog
//! - `economy` - Fixed economy availability

pub mod distribution;
pub mod economy;
pub mod world;
pub mod yaml;

pub use distribution::InMemoryDistributionCatalog;
pub use economy::StaticEconomy;
pub use world::InMemoryWorldRegistry;
pub use yaml::{DocumentError, ProfileDocument, YamlSection};
