use glam::{Mat4, Quat, Vec3};

use crate::trackball::TrackballSession;
use crate::types::OrientationUniform;

pub const DEFAULT_DISTANCE: f32 = 5.0;
pub const MIN_DISTANCE: f32 = 0.1;

/// Camera orbiting a target point, oriented by a trackball session.
///
/// The session orientation turns the camera frame; dragging to the right
/// swings the eye to the left, so the scene appears to follow the pointer.
#[derive(Debug, Clone, Copy)]
pub struct TrackballCamera {
    pub target: Vec3,
    pub distance: f32,
    pub session: TrackballSession,
}

impl TrackballCamera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance: distance.max(MIN_DISTANCE),
            session: TrackballSession::new(),
        }
    }

    pub fn orientation(&self) -> Quat {
        self.session.orientation
    }

    pub fn position(&self) -> Vec3 {
        self.target + self.orientation() * Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, self.up())
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation())
    }

    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).max(MIN_DISTANCE);
    }

    pub fn to_uniform(&self) -> OrientationUniform {
        OrientationUniform::new(self.orientation(), self.view_matrix())
    }
}

impl Default for TrackballCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackball::trackball;

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = TrackballCamera::default();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, DEFAULT_DISTANCE));
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn test_drag_right_swings_camera_left() {
        let mut camera = TrackballCamera::default();
        camera.session.fold(trackball(0.0, 0.0, 0.3, 0.0));
        let pos = camera.position();
        assert!(pos.x < 0.0, "{:?}", pos);
        assert!((pos.length() - DEFAULT_DISTANCE).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_maps_target_in_front() {
        let mut camera = TrackballCamera::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        camera.session.fold(trackball(0.1, 0.2, -0.4, 0.5));
        let target_in_view = camera.view_matrix().transform_point3(camera.target);
        assert!((target_in_view - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn test_rotation_matrix_matches_orientation() {
        let mut camera = TrackballCamera::default();
        camera.session.fold(trackball(-0.2, 0.1, 0.3, 0.4));
        let v = Vec3::new(0.5, -1.0, 2.0);
        let rotated = camera.rotation_matrix().transform_vector3(v);
        assert!((rotated - camera.orientation() * v).length() < 1e-5);
    }

    #[test]
    fn test_zoom_clamps_distance() {
        let mut camera = TrackballCamera::default();
        camera.zoom(0.5);
        assert!((camera.distance - 2.5).abs() < 1e-6);
        camera.zoom(0.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
    }
}
