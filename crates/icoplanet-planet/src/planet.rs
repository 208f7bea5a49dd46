//! A planet that regenerates its mesh only when its configuration changes.

use std::sync::Arc;

use icoplanet_config::PlanetConfig;
use icoplanet_mesh::MeshBuffers;
use tracing::{debug, warn};

use crate::error::PlanetError;
use crate::pipeline::generate;

/// Holds the last successfully generated mesh and the config that built it.
#[derive(Debug, Default)]
pub struct Planet {
    config: Option<PlanetConfig>,
    mesh: Option<Arc<MeshBuffers>>,
}

impl Planet {
    /// A planet with no mesh; the first [`regenerate`](Self::regenerate) builds one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mesh, if any generation has succeeded.
    pub fn mesh(&self) -> Option<&Arc<MeshBuffers>> {
        self.mesh.as_ref()
    }

    /// The config that produced [`Planet::mesh`].
    pub fn config(&self) -> Option<&PlanetConfig> {
        self.config.as_ref()
    }

    /// Whether the current mesh was built from `config`.
    pub fn is_current(&self, config: &PlanetConfig) -> bool {
        self.mesh.is_some() && self.config.as_ref() == Some(config)
    }

    /// Rebuild the mesh for `config`, reusing the current one if unchanged.
    ///
    /// On failure the previous mesh and config are kept and the error is
    /// returned.
    pub fn regenerate(&mut self, config: &PlanetConfig) -> Result<Arc<MeshBuffers>, PlanetError> {
        if self.is_current(config)
            && let Some(mesh) = &self.mesh
        {
            debug!("planet config unchanged, reusing mesh");
            return Ok(Arc::clone(mesh));
        }

        match generate(config) {
            Ok(buffers) => {
                let mesh = Arc::new(buffers);
                self.mesh = Some(Arc::clone(&mesh));
                self.config = Some(config.clone());
                Ok(mesh)
            }
            Err(err) => {
                warn!(error = %err, "planet generation failed, keeping previous mesh");
                Err(err)
            }
        }
    }
}
