//! Configuration for terramap.
//!
//! Settings persist to disk as `config.ron`, missing fields fall back to
//! defaults, and command-line flags parsed with clap override loaded values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, OutputConfig, RegionConfig, RenderConfig, TerrainConfig, ViewConfig,
};
pub use error::ConfigError;
