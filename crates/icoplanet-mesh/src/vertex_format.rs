//! Canonical `wgpu::VertexBufferLayout` for planet mesh rendering.
//!
//! Hosts that draw [`MeshBuffers::interleaved`](crate::MeshBuffers::interleaved)
//! output reference [`PLANET_VERTEX_LAYOUT`] so the shader inputs and the
//! Rust struct cannot drift apart.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x4 | color    |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::buffers::PlanetVertex;

/// Vertex attributes covering all 40 bytes of [`PlanetVertex`].
pub const PLANET_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 24,
        shader_location: 2,
    },
];

/// The vertex buffer layout for planet mesh pipelines.
pub const PLANET_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<PlanetVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &PLANET_VERTEX_ATTRIBUTES,
};

/// Return the planet vertex buffer layout as an owned value.
pub fn planet_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    PLANET_VERTEX_LAYOUT
}

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

const _: () = assert!(
    mem::size_of::<PlanetVertex>() == 40,
    "PlanetVertex size changed, update PLANET_VERTEX_LAYOUT"
);

const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[0].offset == mem::offset_of!(PlanetVertex, position) as u64);
const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[1].offset == mem::offset_of!(PlanetVertex, normal) as u64);
const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[2].offset == mem::offset_of!(PlanetVertex, color) as u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(
            PLANET_VERTEX_LAYOUT.array_stride,
            mem::size_of::<PlanetVertex>() as u64,
        );
    }

    #[test]
    fn test_attributes_fit_in_stride() {
        let stride = PLANET_VERTEX_LAYOUT.array_stride;
        for (i, attr) in PLANET_VERTEX_ATTRIBUTES.iter().enumerate() {
            let size = attr.format.size();
            assert!(
                attr.offset + size <= stride,
                "Attribute {i} at offset {} with size {size} exceeds stride {stride}",
                attr.offset,
            );
        }
    }

    #[test]
    fn test_shader_locations_are_sequential() {
        for (i, attr) in PLANET_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_helper_returns_same_layout() {
        let layout = planet_vertex_buffer_layout();
        assert_eq!(layout.array_stride, PLANET_VERTEX_LAYOUT.array_stride);
        assert_eq!(layout.attributes.len(), PLANET_VERTEX_LAYOUT.attributes.len());
    }

    #[test]
    fn test_layout_is_valid_for_wgpu_pipeline() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            force_fallback_adapter: true,
            ..Default::default()
        }));

        let Ok(adapter) = adapter else {
            // No adapter available (headless CI without GPU).
            return;
        };

        let Ok((device, _queue)) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
        else {
            return;
        };

        let shader_source = r#"
            struct VsOut {
                @builtin(position) clip: vec4<f32>,
                @location(0) color: vec4<f32>,
            };

            @vertex
            fn vs_main(
                @location(0) position: vec3<f32>,
                @location(1) normal: vec3<f32>,
                @location(2) color: vec4<f32>,
            ) -> VsOut {
                var out: VsOut;
                out.clip = vec4<f32>(position, 1.0);
                out.color = color * max(dot(normal, vec3<f32>(0.0, 1.0, 0.0)), 0.1);
                return out;
            }

            @fragment
            fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
                return in.color;
            }
        "#;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("test_planet_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let _pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("test_planet_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PLANET_VERTEX_LAYOUT],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Bgra8UnormSrgb,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview_mask: None,
            cache: None,
        });
    }
}
