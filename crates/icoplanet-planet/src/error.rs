//! Pipeline error types.

use icoplanet_config::ConfigError;
use icoplanet_mesh::MeshError;
use icoplanet_terrain::HeightModelError;

/// Why a generation run produced no mesh.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// The configuration was rejected before any geometry was built.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The height model could not be constructed.
    #[error("invalid height model: {0}")]
    Height(#[from] HeightModelError),

    /// Geometry became degenerate during the run.
    #[error("geometry failure: {0}")]
    Mesh(#[from] MeshError),
}

impl PlanetError {
    /// Returns `true` for configuration errors, `false` for numeric degeneracy.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Height(_))
    }
}
