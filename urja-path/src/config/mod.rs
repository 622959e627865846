//! Configuration loading for UrjaPath.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod sections;
mod urja;

pub use sections::{OutputSection, SearchSection};
pub use urja::UrjaConfig;
