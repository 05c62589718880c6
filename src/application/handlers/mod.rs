//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod profiles;

pub use profiles::{
    LoadError, LoadProfilesCommand, LoadProfilesHandler, LoadProfilesResult,
    DEFAULTS_LAYER_NAME,
};
