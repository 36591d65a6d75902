// Vertex structure for the full-window quad

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex in clip space with texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in clip space
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }

    /// Quad covering the whole viewport, image top at the top of the window
    pub fn fullscreen_quad() -> ([Vertex; 4], [u16; 6]) {
        let vertices = [
            Vertex::new(Vec2::new(-1.0, -1.0), Vec2::new(0.0, 1.0)),
            Vertex::new(Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0)),
            Vertex::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)),
            Vertex::new(Vec2::new(-1.0, 1.0), Vec2::new(0.0, 0.0)),
        ];
        (vertices, [0, 1, 2, 0, 2, 3])
    }
}
