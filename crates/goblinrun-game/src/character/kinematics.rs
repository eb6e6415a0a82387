//! The character's kinematic state

use glam::{Quat, Vec3};

/// Per-character kinematic record.
///
/// Exclusively owned and mutated by the [`CharacterController`]; the
/// renderer and camera read it as a borrowed snapshot. Velocity is in the
/// character's local frame (z forward) until the controller rotates it into
/// world space for the mover.
///
/// [`CharacterController`]: crate::CharacterController
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterKinematics {
    /// Local-frame velocity in world units per second
    pub velocity: Vec3,
    /// World-space position
    pub position: Vec3,
    /// World-space orientation (unit quaternion)
    pub orientation: Quat,
    /// Whether the last mover resolution detected supporting contact
    pub grounded: bool,
    /// Latched from last frame's contact; consumed by a jump launch
    pub jump_ready: bool,
}

impl CharacterKinematics {
    /// Create a character at rest at the given position
    pub fn new(position: Vec3) -> Self {
        Self {
            velocity: Vec3::ZERO,
            position,
            orientation: Quat::IDENTITY,
            grounded: false,
            jump_ready: false,
        }
    }
}
