//! Turns subdivided topology into flattened, displaced, colored buffers.
//!
//! The primary pass displaces each vertex radially and colors it by how far
//! it moved. Roughness passes then add `0.10 * displace(2 * p)` straight to
//! the position. That vector is not re-projected onto the radius, so
//! roughness perturbs the surface tangentially too, unlike the primary pass.

use glam::Vec3;
use icoplanet_mesh::{Color, ColorRamp, MeshBuffers, MeshError, SphereMesh};
use icoplanet_terrain::HeightModel;
use rayon::prelude::*;

/// Weight of each roughness pass.
pub const ROUGHNESS_SCALE: f32 = 0.10;

/// Frequency multiplier applied to the position sampled by a roughness pass.
pub const ROUGHNESS_FREQUENCY: f32 = 2.0;

/// How to shape and color the sphere when generation is enabled.
#[derive(Clone, Copy)]
pub struct Surface<'a> {
    /// Height model for the primary and roughness passes.
    pub model: HeightModel<'a>,
    /// Maps normalized displacement to color.
    pub ramp: &'a dyn ColorRamp,
    /// Offset added to every noise sample position.
    pub seed_offset: Vec3,
    /// Number of roughness passes.
    pub roughness_passes: u32,
}

impl Surface<'_> {
    /// Displacement ratio handed to the color ramp, clamped to `[0, 1]`.
    ///
    /// Normalized by `max_height`; when that is not positive the deepest
    /// inward displacement `-min_height` is used instead.
    pub fn color_ratio(&self, before: Vec3, after: Vec3) -> f32 {
        let params = self.model.params();
        let scale = if params.max_height > 0.0 {
            params.max_height
        } else {
            -params.min_height
        };
        if scale <= 0.0 {
            return 0.0;
        }
        (before.distance(after) / scale).clamp(0.0, 1.0)
    }

    /// Displace one vertex and return its color.
    fn shape_vertex(&self, position: &mut Vec3) -> Color {
        let before = *position;
        let mut p = self.model.displace(before, self.seed_offset);
        let color = self.ramp.evaluate(self.color_ratio(before, p));

        for _ in 0..self.roughness_passes {
            p += ROUGHNESS_SCALE
                * self
                    .model
                    .displace(ROUGHNESS_FREQUENCY * p, self.seed_offset);
        }

        *position = p;
        color
    }
}

/// Flatten `mesh` into render buffers, displacing it with `surface` if given.
///
/// Without a surface, positions are the subdivided sphere exactly and every
/// color is [`Color::WHITE`].
pub fn assemble(
    mesh: &SphereMesh,
    surface: Option<&Surface<'_>>,
) -> Result<MeshBuffers, MeshError> {
    let mut positions = mesh.flattened_positions();

    let colors: Vec<Color> = match surface {
        Some(surface) => positions
            .par_iter_mut()
            .map(|p| surface.shape_vertex(p))
            .collect(),
        None => vec![Color::WHITE; positions.len()],
    };

    MeshBuffers::from_flattened(positions, colors)
}
