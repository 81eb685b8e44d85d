// camera.rs - Orbit camera around a fixed target
//
// Spherical coordinates (radius, azimuth, polar) about the orbit target.
// Pointer input accumulates into pending deltas that are eased in a
// fraction per frame, so the view keeps gliding after the pointer stops.

use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::config::{CameraConfig, ControlsConfig};

/// Radians of orbit per pixel of pointer movement
const ROTATE_SPEED: f32 = 0.005;
/// Relative distance change per wheel unit
const ZOOM_SPEED: f32 = 0.002;
/// Keeps the polar angle off the poles where `look_at` degenerates
const POLE_MARGIN: f32 = 0.01;
/// Pending rotation below this is dropped
const REST_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    radius: f32,
    azimuth: f32,
    polar: f32,

    min_distance: f32,
    max_distance: f32,
    damping: f32,

    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,

    // Input not yet applied
    pending_azimuth: f32,
    pending_polar: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    pub fn new(camera: &CameraConfig, controls: &ControlsConfig) -> Self {
        let target = Vec3::from(controls.target);
        let offset = Vec3::from(camera.position) - target;
        let radius = offset.length().max(f32::EPSILON);

        Self {
            target,
            radius: radius.clamp(controls.min_distance, controls.max_distance),
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos().clamp(POLE_MARGIN, PI - POLE_MARGIN),
            min_distance: controls.min_distance,
            max_distance: controls.max_distance,
            damping: controls.damping,
            fov_y: camera.fov.to_radians(),
            near: camera.near,
            far: camera.far,
            aspect: 1.0,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_zoom: 0.0,
        }
    }

    /// Pointer drag in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_azimuth -= dx * ROTATE_SPEED;
        self.pending_polar -= dy * ROTATE_SPEED;
    }

    /// Wheel delta; positive moves away from the target
    pub fn zoom(&mut self, delta: f32) {
        self.pending_zoom += delta * ZOOM_SPEED;
    }

    /// Jump straight to a distance (clamped to the orbit bounds)
    pub fn set_distance(&mut self, distance: f32) {
        self.radius = distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Apply pending input once per frame
    pub fn update(&mut self) {
        let k = if self.damping > 0.0 { self.damping } else { 1.0 };

        let da = self.pending_azimuth * k;
        let dp = self.pending_polar * k;
        self.azimuth += da;
        self.polar = (self.polar + dp).clamp(POLE_MARGIN, PI - POLE_MARGIN);
        self.pending_azimuth -= da;
        self.pending_polar -= dp;
        if self.pending_azimuth.abs() < REST_EPSILON { self.pending_azimuth = 0.0; }
        if self.pending_polar.abs() < REST_EPSILON { self.pending_polar = 0.0; }

        // Zoom is not eased
        if self.pending_zoom != 0.0 {
            self.set_distance(self.radius * (1.0 + self.pending_zoom));
            self.pending_zoom = 0.0;
        }
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(self.radius * sp * sa, self.radius * cp, self.radius * sp * ca)
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position().distance(self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World point to pixel coordinates; `None` when behind the camera
    pub fn project(&self, view_proj: &Mat4, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = *view_proj * point.extend(1.0);
        if clip.w <= 0.0 { return None; }

        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width,
            (-ndc.y * 0.5 + 0.5) * height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraConfig::default(), &ControlsConfig::default())
    }

    #[test]
    fn starts_at_configured_position() {
        let cam = camera();
        let pos = cam.position();
        assert!((pos - Vec3::new(0.0, 2.0, 10.0)).length() < 1e-4, "{:?}", pos);
        assert!((cam.distance_to_target() - 104f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn distance_is_clamped() {
        let mut cam = camera();
        cam.set_distance(0.5);
        assert!((cam.distance_to_target() - 2.0).abs() < 1e-4);
        cam.set_distance(500.0);
        assert!((cam.distance_to_target() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_applies_on_next_update() {
        let mut cam = camera();
        let before = cam.distance_to_target();
        cam.zoom(-100.0);
        assert_eq!(cam.distance_to_target(), before);
        cam.update();
        assert!(cam.distance_to_target() < before);
    }

    #[test]
    fn rotation_eases_in_without_changing_distance() {
        let mut cam = camera();
        let start = cam.position();
        let d = cam.distance_to_target();
        cam.rotate(200.0, 0.0);

        cam.update();
        let first = cam.position().distance(start);
        for _ in 0..200 { cam.update(); }
        let total = cam.position().distance(start);

        assert!(first > 0.0 && first < total);
        assert!((cam.distance_to_target() - d).abs() < 1e-3);
    }

    #[test]
    fn target_projects_to_viewport_center() {
        let mut cam = camera();
        cam.resize(800, 600);
        let vp = cam.view_proj();
        let p = cam.project(&vp, cam.target, 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-2 && (p.y - 300.0).abs() < 1e-2, "{:?}", p);

        // Higher in the world is higher on screen
        let up = cam.project(&vp, Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(up.y < p.y);
    }

    #[test]
    fn points_behind_the_eye_are_not_projected() {
        let cam = camera();
        let vp = cam.view_proj();
        assert!(cam.project(&vp, Vec3::new(0.0, 2.0, 30.0), 800.0, 600.0).is_none());
    }
}
