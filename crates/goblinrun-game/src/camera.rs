//! Third-person follow camera

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera offset in the character's local frame
    pub offset: Vec3,
    /// Look-at point in the character's local frame
    pub look_at: Vec3,
    /// Smoothing base: fraction of the remaining distance left after one
    /// second of following (smaller = snappier)
    pub smoothing: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(-15.0, 20.0, -30.0),
            look_at: Vec3::new(0.0, 10.0, 50.0),
            smoothing: 0.001,
            fov_degrees: 70.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}

/// Camera that trails the character, easing toward an ideal offset and
/// look-at expressed in the character's frame.
pub struct ThirdPersonCamera {
    /// Configuration
    pub config: CameraConfig,
    position: Vec3,
    look_target: Vec3,
}

impl ThirdPersonCamera {
    /// Create a camera with default config
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            config,
            position: Vec3::ZERO,
            look_target: Vec3::ZERO,
        }
    }

    /// The camera's current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The point the camera is looking at
    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    /// Ease toward the ideal framing of the target for this frame
    pub fn update(&mut self, dt: f32, target_position: Vec3, target_orientation: Quat) {
        let ideal_position = target_orientation * self.config.offset + target_position;
        let ideal_look = target_orientation * self.config.look_at + target_position;

        // framerate-independent exponential approach
        let t = 1.0 - self.config.smoothing.powf(dt);
        self.position = self.position.lerp(ideal_position, t);
        self.look_target = self.look_target.lerp(ideal_look, t);
    }

    /// Snap directly to the ideal framing (level start, respawn cuts)
    pub fn snap_to(&mut self, target_position: Vec3, target_orientation: Quat) {
        self.position = target_orientation * self.config.offset + target_position;
        self.look_target = target_orientation * self.config.look_at + target_position;
    }

    /// View matrix for the renderer
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target, Vec3::Y)
    }

    /// Projection matrix for the renderer
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            aspect_ratio,
            self.config.near,
            self.config.far,
        )
    }
}

impl Default for ThirdPersonCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_approaches_ideal_position() {
        let mut camera = ThirdPersonCamera::new();
        let target = Vec3::new(10.0, 0.0, 5.0);
        let ideal = camera.config.offset + target;

        let start_distance = camera.position().distance(ideal);
        for _ in 0..60 {
            camera.update(1.0 / 60.0, target, Quat::IDENTITY);
        }
        let end_distance = camera.position().distance(ideal);
        assert!(end_distance < start_distance * 0.05);
    }

    #[test]
    fn test_snap_matches_ideal() {
        let mut camera = ThirdPersonCamera::new();
        let target = Vec3::new(-670.0, 755.0, 905.0);
        camera.snap_to(target, Quat::IDENTITY);
        assert_eq!(camera.position(), camera.config.offset + target);
    }

    #[test]
    fn test_offset_rotates_with_target() {
        let mut camera = ThirdPersonCamera::new();
        let yaw = Quat::from_rotation_y(std::f32::consts::PI);
        camera.snap_to(Vec3::ZERO, yaw);
        // behind the character means flipped with it
        assert!((camera.position().z - (-camera.config.offset.z)).abs() < 1e-4);
    }
}
