//! Movement configuration and constants

use glam::Vec3;
use goblinrun_core::InputSnapshot;
use serde::{Deserialize, Serialize};

/// Movement configuration.
///
/// The acceleration vector is per-axis in the character's local frame:
/// x scales the turn rate, y is the jump launch impulse, z is forward
/// acceleration. The deceleration vector's y doubles as the constant
/// gravity term while airborne.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Per-axis acceleration (turn factor, jump impulse, forward)
    pub acceleration: Vec3,
    /// Per-axis deceleration coefficients (negative; y is gravity)
    pub deceleration: Vec3,
    /// Multiplier applied to turn and forward acceleration while sprinting
    pub sprint_multiplier: f32,
    /// Base turn rate in radians per second before the acceleration factor
    pub turn_rate: f32,
    /// Height below which the character is considered to have fallen out
    pub fall_limit: f32,
    /// Where a fallen character is placed
    pub respawn_point: Vec3,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            acceleration: Vec3::new(0.4, 0.5, 0.5),
            deceleration: Vec3::new(-5.0, -0.8, -5.0),
            sprint_multiplier: 3.0,
            turn_rate: std::f32::consts::PI,
            fall_limit: -200.0,
            respawn_point: Vec3::new(0.0, 10.0, 0.0),
        }
    }
}

impl MovementConfig {
    /// Acceleration for this frame: sprinting triples the horizontal-plane
    /// terms while moving forward, and a dance request locks the character
    /// in place by zeroing acceleration entirely.
    pub fn shaped_acceleration(&self, input: &InputSnapshot) -> Vec3 {
        let mut acc = self.acceleration;
        if input.sprint && input.forward {
            acc.x *= self.sprint_multiplier;
            acc.z *= self.sprint_multiplier;
        }
        if input.dance {
            acc = Vec3::ZERO;
        }
        acc
    }
}
