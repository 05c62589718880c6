//! Profile handlers.

mod load_profiles;

pub use load_profiles::{
    LoadError, LoadProfilesCommand, LoadProfilesHandler, LoadProfilesResult,
    DEFAULTS_LAYER_NAME,
};
