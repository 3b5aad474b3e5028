//! WebGPU rendering module
//!
//! The scene is rebuilt every frame as a flat triangle list in arena
//! coordinates and mapped to NDC on upload.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{arena_to_ndc, build_scene};
pub use vertex::Vertex;
