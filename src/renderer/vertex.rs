//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position (arena pixels until uploaded, then NDC) and color
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

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const ARENA: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const PADDLE: [f32; 4] = [0.204, 0.596, 0.859, 1.0]; // #3498db
    pub const BLOCK: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    /// Destroyed blocks: outline only, half opacity
    pub const BLOCK_WRECK: [f32; 4] = [0.0, 0.5, 0.0, 0.5];
    pub const LOST_VEIL: [f32; 4] = [0.6, 0.0, 0.0, 0.35];
    pub const BACKGROUND: [f32; 4] = [0.08, 0.08, 0.1, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
        let v = Vertex::at(Vec2::new(3.0, 4.0), colors::BALL);
        assert_eq!(v.pos(), Vec2::new(3.0, 4.0));
        assert_eq!(bytemuck::cast_slice::<Vertex, f32>(&[v]).len(), 6);
    }
}
