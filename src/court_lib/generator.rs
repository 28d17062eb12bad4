// src/court_lib/generator.rs

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use super::config::CourtConfig;
use super::error::ConfigResult;
use super::shape_types::{
    BoxParams, MaterialKind, PlaneParams, PlacedShape, RingParams, SceneDescriptor, Shape,
    Transform,
};

/// Lift of every flat marking above the floor's top face.
pub const MARKING_EPSILON: f32 = 0.01;
/// Center-circle radius. Fixed regardless of court size, unlike the
/// three-point radius which scales with width.
pub const CENTER_CIRCLE_RADIUS: f32 = 1.8;
/// Three-point arcs sweep the half circle facing the court interior.
pub const ARC_THETA_START: f32 = 3.0 * FRAC_PI_2; // 270 deg
pub const ARC_THETA_LENGTH: f32 = PI; // 180 deg

// Rotation that takes a local-XY shape (normal +Z) onto the floor (normal +Y).
const LAY_FLAT: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);

pub struct CourtGeometryGenerator;

impl CourtGeometryGenerator {
    /// Y of every flat marking. The only offset formula markings use.
    pub fn marking_y(config: &CourtConfig) -> f32 {
        config.floor_thickness / 2.0 + MARKING_EPSILON
    }

    pub fn three_point_radius(config: &CourtConfig) -> f32 {
        config.width * config.three_point_radius_factor
    }

    pub fn generate_floor(config: &CourtConfig) -> PlacedShape {
        PlacedShape {
            shape: Shape::Box(BoxParams {
                width: config.length,
                height: config.floor_thickness,
                depth: config.width,
            }),
            material: MaterialKind::Floor,
            transform: Transform::IDENTITY,
            receive_shadow: true,
        }
    }

    pub fn generate_center_line(config: &CourtConfig) -> PlacedShape {
        PlacedShape {
            shape: Shape::Plane(PlaneParams {
                width: config.marking_thickness,
                height: config.width,
            }),
            material: MaterialKind::Marking,
            transform: Transform::new(Vec3::new(0.0, Self::marking_y(config), 0.0), LAY_FLAT),
            receive_shadow: false,
        }
    }

    pub fn generate_center_circle(config: &CourtConfig) -> PlacedShape {
        let half = config.marking_thickness / 2.0;
        PlacedShape {
            shape: Shape::Ring(RingParams {
                inner_radius: CENTER_CIRCLE_RADIUS - half,
                outer_radius: CENTER_CIRCLE_RADIUS + half,
                theta_segments: config.ring_segments,
                phi_segments: 1,
                theta_start: 0.0,
                theta_length: TAU,
            }),
            material: MaterialKind::Marking,
            transform: Transform::new(Vec3::new(0.0, Self::marking_y(config), 0.0), LAY_FLAT),
            receive_shadow: false,
        }
    }

    /// Half-ring arc centered on a baseline at `x_pos`. With `mirror` the
    /// arc is spun 180 deg about the vertical so it opens towards the other
    /// baseline; its angular parameters stay identical.
    pub fn generate_three_point_arc(config: &CourtConfig, x_pos: f32, mirror: bool) -> PlacedShape {
        let radius = Self::three_point_radius(config);
        let half = config.marking_thickness / 2.0;

        // Z is applied first, i.e. about the ring's own normal, which ends up
        // being world Y once laid flat.
        let mut rotation = LAY_FLAT;
        if mirror {
            rotation.z = PI;
        }

        PlacedShape {
            shape: Shape::Ring(RingParams {
                inner_radius: radius - half,
                outer_radius: radius + half,
                theta_segments: config.ring_segments,
                phi_segments: 1,
                theta_start: ARC_THETA_START,
                theta_length: ARC_THETA_LENGTH,
            }),
            material: MaterialKind::Marking,
            transform: Transform::new(Vec3::new(x_pos, Self::marking_y(config), 0.0), rotation),
            receive_shadow: false,
        }
    }

    /// Floor, center line, center circle, then one arc per baseline.
    pub fn generate_court(config: &CourtConfig) -> SceneDescriptor {
        let half_length = config.length / 2.0;
        SceneDescriptor::new(vec![
            Self::generate_floor(config),
            Self::generate_center_line(config),
            Self::generate_center_circle(config),
            Self::generate_three_point_arc(config, -half_length, false),
            Self::generate_three_point_arc(config, half_length, true),
        ])
    }

    /// Validates first; nothing is generated for a rejected config.
    pub fn try_generate_court(config: &CourtConfig) -> ConfigResult<SceneDescriptor> {
        config.validate()?;
        let scene = Self::generate_court(config);
        log::debug!("Generated court with {} shapes", scene.len());
        Ok(scene)
    }
}
