//! Configuration error types.

use icoplanet_terrain::HeightModelError;

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// Subdivision depth is negative or deeper than supported.
    #[error("subdivision depth {value} is outside 0..={max}")]
    InvalidSubdivisions {
        /// Requested depth.
        value: i32,
        /// Deepest allowed depth.
        max: i32,
    },

    /// Height range, redistribution exponent, or strategy name is invalid.
    #[error(transparent)]
    Height(#[from] HeightModelError),

    /// Seed offset must be three finite components.
    #[error("seed offset must be three finite numbers, got {0:?}")]
    InvalidSeedOffset(Vec<f32>),

    /// The color gradient has no keys.
    #[error("color gradient has no keys")]
    EmptyGradient,
}
