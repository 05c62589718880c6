//! YAML configuration adapters.

mod document;
mod section;

pub use document::{DocumentError, ProfileDocument};
pub use section::YamlSection;
