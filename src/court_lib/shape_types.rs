// src/court_lib/shape_types.rs
use std::fmt;

use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Plane,
    Ring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Floor,
    Marking,
}

/// Axis-aligned box centered on its local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxParams {
    pub width: f32,  // X
    pub height: f32, // Y
    pub depth: f32,  // Z
}

/// Rectangle in the local XY plane, facing +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneParams {
    pub width: f32,
    pub height: f32,
}

/// Annulus, or annulus sector, in the local XY plane facing +Z.
/// Angles are radians measured from local +X towards local +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingParams {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub theta_segments: u32,
    pub phi_segments: u32,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl RingParams {
    pub fn mid_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    pub fn band_width(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }

    pub fn is_full_circle(&self) -> bool {
        self.theta_length >= std::f32::consts::TAU
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Box(BoxParams),
    Plane(PlaneParams),
    Ring(RingParams),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box(_) => ShapeKind::Box,
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Ring(_) => ShapeKind::Ring,
        }
    }

    pub fn as_ring(&self) -> Option<&RingParams> {
        match self {
            Shape::Ring(ring) => Some(ring),
            _ => None,
        }
    }
}

/// Position plus Euler XYZ rotation (radians). The rotation composes as
/// `Rx * Ry * Rz`, so Z is applied first in the shape's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { position: Vec3::ZERO, rotation: Vec3::ZERO };

    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y)
            * Quat::from_rotation_z(self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation_quat(), self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedShape {
    pub shape: Shape,
    pub material: MaterialKind,
    pub transform: Transform,
    pub receive_shadow: bool,
}

impl PlacedShape {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}

impl fmt::Display for PlacedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.transform.position;
        let r = self.transform.rotation;
        match &self.shape {
            Shape::Box(b) => write!(f, "box {}x{}x{}", b.width, b.height, b.depth)?,
            Shape::Plane(pl) => write!(f, "plane {}x{}", pl.width, pl.height)?,
            Shape::Ring(ring) => write!(
                f,
                "ring r=[{}, {}] segments={} theta={:.1}deg+{:.1}deg",
                ring.inner_radius,
                ring.outer_radius,
                ring.theta_segments,
                ring.theta_start.to_degrees(),
                ring.theta_length.to_degrees(),
            )?,
        }
        write!(
            f,
            " {:?} at ({}, {}, {}) rot ({:.3}, {:.3}, {:.3})",
            self.material, p.x, p.y, p.z, r.x, r.y, r.z
        )?;
        if self.receive_shadow {
            write!(f, " receives-shadow")?;
        }
        Ok(())
    }
}

/// Ordered, read-only set of shapes handed to the scene host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneDescriptor {
    shapes: Vec<PlacedShape>,
}

impl SceneDescriptor {
    pub fn new(shapes: Vec<PlacedShape>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedShape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a SceneDescriptor {
    type Item = &'a PlacedShape;
    type IntoIter = std::slice::Iter<'a, PlacedShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
