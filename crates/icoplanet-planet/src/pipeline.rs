//! One full generation run from a [`PlanetConfig`] to [`MeshBuffers`].

use std::time::Instant;

use icoplanet_config::PlanetConfig;
use icoplanet_mesh::{ColorRamp, MeshBuffers, build_icosahedron, subdivide};
use icoplanet_terrain::{HeightModel, NoiseField};
use tracing::{debug, info};

use crate::assembler::{Surface, assemble};
use crate::error::PlanetError;

/// Generate a planet using the strategy's default noise and the configured
/// gradient.
pub fn generate(config: &PlanetConfig) -> Result<MeshBuffers, PlanetError> {
    let noise = config.height_strategy.default_noise(config.noise_seed);
    generate_with(config, &*noise, &config.gradient)
}

/// Generate a planet with caller-supplied noise and color ramp.
///
/// The configuration is validated before any geometry is built. Output is
/// deterministic for identical inputs.
pub fn generate_with(
    config: &PlanetConfig,
    noise: &dyn NoiseField,
    ramp: &dyn ColorRamp,
) -> Result<MeshBuffers, PlanetError> {
    let start = Instant::now();
    config.validate()?;
    let depth = config.depth()?;

    let surface = if config.generate {
        let model = HeightModel::new(config.height_strategy, config.height_params(), noise)?;
        Some(Surface {
            model,
            ramp,
            seed_offset: config.seed_offset(),
            roughness_passes: config.roughness_passes,
        })
    } else {
        None
    };

    let mesh = subdivide(build_icosahedron(), depth)?;
    debug!(
        depth,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "sphere subdivided"
    );

    let buffers = assemble(&mesh, surface.as_ref())?;

    info!(
        strategy = %config.height_strategy,
        depth,
        displaced = config.generate,
        triangles = buffers.triangle_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "planet generated"
    );
    Ok(buffers)
}
