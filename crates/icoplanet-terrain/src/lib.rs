//! Procedural height generation: noise field adapters, the height strategy
//! registry, and the radial [`HeightModel`] used to displace sphere vertices.

mod height_model;
mod noise_field;
mod strategy;

pub use height_model::{HeightModel, HeightModelError, HeightParams, OCTAVES};
pub use noise_field::NoiseField;
pub use strategy::HeightStrategy;
