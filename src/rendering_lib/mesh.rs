// src/rendering_lib/mesh.rs
//
// Host-side tessellation of generated court shapes. Local-frame triangles
// are produced per shape kind, then each shape's transform is baked in so the
// whole static court becomes a single world-space buffer.

use glam::Vec3;

use super::material::style_for;
use super::vertex::Vertex;
use crate::court_lib::{BoxParams, PlaneParams, RingParams, SceneDescriptor, Shape};

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    // Quad from a center and two half-axes, counter-clockwise when u x v
    // points towards the viewer.
    fn push_quad(&mut self, center: Vec3, u: Vec3, v: Vec3, normal: Vec3) {
        let base = self.positions.len() as u32;
        for corner in [center - u - v, center + u - v, center + u + v, center - u + v] {
            self.positions.push(corner);
            self.normals.push(normal);
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

pub fn tessellate(shape: &Shape) -> MeshData {
    match shape {
        Shape::Box(params) => tessellate_box(params),
        Shape::Plane(params) => tessellate_plane(params),
        Shape::Ring(params) => tessellate_ring(params),
    }
}

fn tessellate_box(params: &BoxParams) -> MeshData {
    let half = Vec3::new(params.width, params.height, params.depth) * 0.5;
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        mesh.push_quad(normal * half, u * half, v * half, normal);
    }
    mesh
}

fn tessellate_plane(params: &PlaneParams) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_quad(
        Vec3::ZERO,
        Vec3::X * (params.width * 0.5),
        Vec3::Y * (params.height * 0.5),
        Vec3::Z,
    );
    mesh
}

fn tessellate_ring(params: &RingParams) -> MeshData {
    let theta_segments = params.theta_segments.max(3);
    let phi_segments = params.phi_segments.max(1);
    let radius_step = (params.outer_radius - params.inner_radius) / phi_segments as f32;

    let mut mesh = MeshData::default();
    for j in 0..=phi_segments {
        let radius = params.inner_radius + j as f32 * radius_step;
        for i in 0..=theta_segments {
            let theta =
                params.theta_start + (i as f32 / theta_segments as f32) * params.theta_length;
            mesh.positions.push(Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0));
            mesh.normals.push(Vec3::Z);
        }
    }

    let row = theta_segments + 1;
    for j in 0..phi_segments {
        for i in 0..theta_segments {
            let a = j * row + i;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// The whole court as one world-space vertex/index buffer.
#[derive(Clone, Debug, Default)]
pub struct SceneMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SceneMesh {
    pub fn from_descriptor(scene: &SceneDescriptor) -> Self {
        let mut out = SceneMesh::default();
        for placed in scene {
            let local = tessellate(&placed.shape);
            let model = placed.transform.matrix();
            let rotation = placed.transform.rotation_quat();
            let style = style_for(placed.material);
            let color = style.linear_color();
            let material = style.vertex_material();

            let base = out.vertices.len() as u32;
            for (p, n) in local.positions.iter().zip(&local.normals) {
                let world_p = model.transform_point3(*p);
                let world_n = (rotation * *n).normalize_or_zero();
                out.vertices.push(Vertex::new(world_p.to_array(), world_n.to_array(), color, material));
            }
            out.indices.extend(local.indices.iter().map(|i| i + base));

            log::debug!(
                "Tessellated {:?}: {} vertices, {} triangles",
                placed.kind(),
                local.vertex_count(),
                local.triangle_count()
            );
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
