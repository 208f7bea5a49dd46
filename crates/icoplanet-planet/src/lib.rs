//! Planet generation pipeline: icosahedron, subdivision, height displacement,
//! and render buffer assembly, plus a memoizing [`Planet`] wrapper.

mod assembler;
mod error;
mod pipeline;
mod planet;
mod stats;

pub use assembler::{ROUGHNESS_FREQUENCY, ROUGHNESS_SCALE, Surface, assemble};
pub use error::PlanetError;
pub use pipeline::{generate, generate_with};
pub use planet::Planet;
pub use stats::MeshStats;
