// src/engine_lib/controller.rs

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::engine_lib::camera::Camera;

const POLAR_EPSILON: f32 = 0.01;
pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 200.0;
const DOLLY_BASE: f32 = 0.95;
const KEY_ROTATE_SPEED: f32 = 1.5; // rad/s
const PIXELS_PER_SCROLL_LINE: f32 = 50.0;

/// What a key press or release asks of the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    ToggleOrbit,
    /// Held yaw in [-1, 1], 0 on release.
    Yaw(f32),
    /// Held pitch in [-1, 1], 0 on release.
    Pitch(f32),
}

fn is_bound(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::KeyO | KeyCode::ArrowLeft | KeyCode::ArrowRight | KeyCode::ArrowUp | KeyCode::ArrowDown
    )
}

/// Maps a key transition to a controller action. `O` toggles once per
/// physical press; auto-repeat and release are ignored for it.
pub fn key_action(code: KeyCode, state: ElementState, repeat: bool) -> Option<KeyAction> {
    let pressed = state == ElementState::Pressed;
    let held = |dir: f32| if pressed { dir } else { 0.0 };
    match code {
        KeyCode::KeyO if pressed && !repeat => Some(KeyAction::ToggleOrbit),
        KeyCode::ArrowLeft => Some(KeyAction::Yaw(held(1.0))),
        KeyCode::ArrowRight => Some(KeyAction::Yaw(held(-1.0))),
        KeyCode::ArrowUp => Some(KeyAction::Pitch(held(1.0))),
        KeyCode::ArrowDown => Some(KeyAction::Pitch(held(-1.0))),
        _ => None,
    }
}

/// Orbit-style camera input: drag to rotate around the target, right-drag
/// to pan, wheel to zoom. Input accumulates between frames and is applied
/// once per `update`.
#[derive(Debug)]
pub struct OrbitController {
    pub enabled: bool,

    target: Vec3,
    radius: f32,
    theta: f32, // azimuth around +Y, measured from +Z towards +X
    phi: f32,   // polar angle from +Y

    rotate_accum: (f32, f32), // pixels
    pan_accum: (f32, f32),    // pixels
    dolly_accum: f32,         // wheel steps, positive zooms in
    key_yaw: f32,
    key_pitch: f32,

    rotating: bool,
    panning: bool,
    last_cursor: Option<(f32, f32)>,
}

impl OrbitController {
    pub fn new(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let theta = offset.x.atan2(offset.z);
        let phi = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        Self {
            enabled: true,
            target: camera.target,
            radius,
            theta,
            phi: phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            rotate_accum: (0.0, 0.0),
            pan_accum: (0.0, 0.0),
            dolly_accum: 0.0,
            key_yaw: 0.0,
            key_pitch: 0.0,
            rotating: false,
            panning: false,
            last_cursor: None,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
        self.clear_input();
        log::info!("Orbit camera {}", if self.enabled { "enabled" } else { "disabled" });
    }

    fn clear_input(&mut self) {
        self.rotate_accum = (0.0, 0.0);
        self.pan_accum = (0.0, 0.0);
        self.dolly_accum = 0.0;
        self.key_yaw = 0.0;
        self.key_pitch = 0.0;
    }

    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32) {
        if !self.enabled { return; }
        self.rotate_accum.0 += dx;
        self.rotate_accum.1 += dy;
    }

    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32) {
        if !self.enabled { return; }
        self.pan_accum.0 += dx;
        self.pan_accum.1 += dy;
    }

    pub fn dolly_by_steps(&mut self, steps: f32) {
        if !self.enabled { return; }
        self.dolly_accum += steps;
    }

    /// Held-key rotation in [-1, 1] per axis.
    pub fn set_key_rotation(&mut self, yaw: f32, pitch: f32) {
        if !self.enabled { return; }
        self.key_yaw = yaw;
        self.key_pitch = pitch;
    }

    pub fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ToggleOrbit => self.toggle_enabled(),
            KeyAction::Yaw(yaw) => self.set_key_rotation(yaw, self.key_pitch),
            KeyAction::Pitch(pitch) => self.set_key_rotation(self.key_yaw, pitch),
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let PhysicalKey::Code(code) = key_event.physical_key else { return false };
                match key_action(code, key_event.state, key_event.repeat) {
                    Some(action) => { self.apply_key_action(action); true }
                    None => is_bound(code),
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;
                match button {
                    MouseButton::Left => { self.rotating = pressed; true }
                    MouseButton::Right => { self.panning = pressed; true }
                    _ => false,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = (position.x as f32, position.y as f32);
                if let Some((last_x, last_y)) = self.last_cursor {
                    let (dx, dy) = (current.0 - last_x, current.1 - last_y);
                    if self.rotating {
                        self.rotate_by_pixels(dx, dy);
                    } else if self.panning {
                        self.pan_by_pixels(dx, dy);
                    }
                }
                self.last_cursor = Some(current);
                self.rotating || self.panning
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                self.dolly_by_steps(steps);
                true
            }
            WindowEvent::Focused(false) => {
                // Releases can be missed while unfocused.
                self.rotating = false;
                self.panning = false;
                self.key_yaw = 0.0;
                self.key_pitch = 0.0;
                false
            }
            _ => false,
        }
    }

    /// Applies this frame's accumulated input and writes the pose into `camera`.
    pub fn update(&mut self, camera: &mut Camera, viewport_height: f32, dt: f32) {
        if !self.enabled {
            return;
        }
        let height = viewport_height.max(1.0);

        self.theta -= TAU * self.rotate_accum.0 / height;
        self.phi -= TAU * self.rotate_accum.1 / height;
        self.theta += self.key_yaw * KEY_ROTATE_SPEED * dt;
        self.phi -= self.key_pitch * KEY_ROTATE_SPEED * dt;
        self.phi = self.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.theta = self.theta.rem_euclid(TAU);

        if self.dolly_accum != 0.0 {
            self.radius *= DOLLY_BASE.powf(self.dolly_accum);
        }
        self.radius = self.radius.clamp(MIN_DISTANCE, MAX_DISTANCE);

        if self.pan_accum != (0.0, 0.0) {
            let forward = (self.target - camera.eye).normalize_or_zero();
            let right = forward.cross(camera.up).normalize_or_zero();
            let up = right.cross(forward);
            let target_distance = self.radius * (camera.fov_y_rad / 2.0).tan();
            let pan_x = 2.0 * self.pan_accum.0 * target_distance / height;
            let pan_y = 2.0 * self.pan_accum.1 * target_distance / height;
            self.target += -right * pan_x + up * pan_y;
        }

        self.rotate_accum = (0.0, 0.0);
        self.pan_accum = (0.0, 0.0);
        self.dolly_accum = 0.0;

        let offset = Vec3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        );
        camera.target = self.target;
        camera.eye = self.target + offset;
    }
}
