//! Configuration for planet generation.
//!
//! Settings persist to disk as RON, can be overridden from the command line
//! via clap, and are validated before any geometry is built.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, MAX_SUBDIVISIONS, PlanetConfig};
pub use error::ConfigError;
