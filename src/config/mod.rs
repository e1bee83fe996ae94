//! Configuration management for `ShutterDesk`.

/// Fixture data loading - sample entities that seed the store
pub mod fixtures;

/// Application settings from environment variables
pub mod settings;

pub use fixtures::{FixtureSet, default_fixtures, load_fixtures};
pub use settings::{AppConfig, load_app_configuration};
