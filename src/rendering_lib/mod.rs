// src/rendering_lib/mod.rs

pub mod material;
pub mod mesh;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use material::{style_for, MaterialStyle};
pub use mesh::{tessellate, MeshData, SceneMesh};
pub use renderer::Renderer;
pub use shader::WGSL_SHADER_SOURCE;
pub use vertex::Vertex;
