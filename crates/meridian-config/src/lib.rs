//! Settings for the Meridian globe.
//!
//! [`Config`] is stored as `meridian.ron` in the platform config directory.
//! Missing fields fall back to their defaults, [`CliArgs`] override single
//! values for one run, and [`Config::reload`] picks up edits made on disk.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, GlobeConfig, default_config_dir};
pub use error::ConfigError;
