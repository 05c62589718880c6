//! RTP Profiles - Layered random-teleport profile resolution
//!
//! This crate resolves named teleport profiles from hierarchical configuration,
//! layered over plugin-wide defaults, and gives each resolved profile a
//! concurrent cache of pre-validated landing locations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
