// src/engine_lib/camera.rs

use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_Y_DEG: f32 = 75.0;
pub const DEFAULT_ZNEAR: f32 = 0.1;
pub const DEFAULT_ZFAR: f32 = 1000.0;
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 15.0, 30.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(
        eye: Vec3,
        target: Vec3,
        fov_y_deg: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            fov_y_rad: fov_y_deg.to_radians(),
            znear,
            zfar,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    // wgpu clip space: depth in [0, 1]
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, aspect_ratio, self.znear, self.zfar)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    pub fn distance_to_target(&self) -> f32 {
        (self.eye - self.target).length()
    }
}

impl Default for Camera {
    /// Raised above one sideline, looking at center court.
    fn default() -> Self {
        Self::new(DEFAULT_EYE, Vec3::ZERO, DEFAULT_FOV_Y_DEG, DEFAULT_ZNEAR, DEFAULT_ZFAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn target_projects_to_screen_center() {
        let camera = Camera::default();
        let clip = camera.view_projection(16.0 / 9.0) * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn default_pose() {
        let camera = Camera::default();
        assert_eq!(camera.eye, Vec3::new(0.0, 15.0, 30.0));
        assert_abs_diff_eq!(camera.distance_to_target(), 1125f32.sqrt(), epsilon = 1e-4);
        assert_abs_diff_eq!(camera.fov_y_rad, 75f32.to_radians());
    }
}
