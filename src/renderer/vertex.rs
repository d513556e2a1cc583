//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (court space) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::Environment;

    /// `0xRRGGBBAA` to normalized RGBA
    pub const fn from_hex(hex: u32) -> [f32; 4] {
        [
            ((hex >> 24) & 0xff) as f32 / 255.0,
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ]
    }

    pub const MUD: [f32; 4] = from_hex(0xff0000ff);
    pub const ICE: [f32; 4] = from_hex(0x888888ff);
    pub const WATER: [f32; 4] = from_hex(0x0000ffff);
    pub const AIR: [f32; 4] = from_hex(0xf3ffc6ff);
    /// Bird, bars, walls and score pips
    pub const FOREGROUND: [f32; 4] = from_hex(0x000000ff);

    /// Background tint for an environment
    pub fn background(environment: Environment) -> [f32; 4] {
        match environment {
            Environment::Mud => MUD,
            Environment::Ice => ICE,
            Environment::Water => WATER,
            Environment::Air => AIR,
        }
    }
}
