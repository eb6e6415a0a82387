//! Kinematic move-and-slide resolution for the character

use glam::Vec3;
use rapier3d::control::{CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use tracing::warn;

/// Mover configuration
#[derive(Debug, Clone)]
pub struct MoverConfig {
    /// Cylinder half height (default: 7.5 world units)
    pub half_height: f32,
    /// Cylinder radius (default: 1.5 world units)
    pub radius: f32,
    /// Collision offset kept between the shape and geometry (default: 0.1)
    pub offset: f32,
    /// Maximum slope angle the character can climb, in degrees (default: 45)
    pub max_climb_angle: f32,
    /// Minimum slope angle the character slides down, in degrees (default: 10)
    pub min_slide_angle: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            half_height: 7.5,
            radius: 1.5,
            offset: 0.1,
            max_climb_angle: 45.0,
            min_slide_angle: 10.0,
        }
    }
}

/// Result of resolving one desired displacement against world geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResolution {
    /// The displacement that can actually be applied
    pub applied: Vec3,
    /// Whether supporting contact was detected beneath the character
    pub grounded: bool,
}

impl MovementResolution {
    fn rejected() -> Self {
        Self {
            applied: Vec3::ZERO,
            grounded: false,
        }
    }
}

/// Kinematic character mover.
///
/// The character's position is owned by the caller; the mover only turns a
/// desired displacement into an achievable one by sliding along the static
/// course geometry, and reports ground contact.
pub struct KinematicMover {
    /// Configuration
    pub config: MoverConfig,
    /// The character's collider, once spawned
    collider_handle: Option<ColliderHandle>,
    /// Rapier's kinematic character controller
    controller: KinematicCharacterController,
}

impl KinematicMover {
    /// Create a mover with default config
    pub fn new() -> Self {
        Self::with_config(MoverConfig::default())
    }

    /// Create a mover with custom config
    pub fn with_config(config: MoverConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_climb_angle.to_radians();
        controller.min_slope_slide_angle = config.min_slide_angle.to_radians();
        controller.offset = CharacterLength::Absolute(config.offset);

        Self {
            config,
            collider_handle: None,
            controller,
        }
    }

    /// Create the character's collider in the physics world
    pub fn spawn(
        &mut self,
        physics: &mut crate::PhysicsWorld,
        position: Vec3,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cylinder(self.config.half_height, self.config.radius)
            .translation(vector![position.x, position.y, position.z])
            .friction(0.0)
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        handle
    }

    /// Resolve a desired displacement from `position` against the world.
    ///
    /// Degenerate input (non-finite displacement) is rejected here, before
    /// it can reach the solver.
    pub fn resolve(
        &self,
        physics: &mut crate::PhysicsWorld,
        position: Vec3,
        desired: Vec3,
        dt: f32,
    ) -> MovementResolution {
        if !desired.is_finite() {
            warn!(?desired, "rejecting non-finite displacement");
            return MovementResolution::rejected();
        }

        let Some(collider_handle) = self.collider_handle else {
            return MovementResolution::rejected();
        };

        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return MovementResolution::rejected();
        };

        let shape = collider.shape();
        let current_pos = Isometry::translation(position.x, position.y, position.z);

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired.x, desired.y, desired.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        MovementResolution {
            applied: Vec3::new(
                movement.translation.x,
                movement.translation.y,
                movement.translation.z,
            ),
            grounded: movement.grounded,
        }
    }

    /// Write the character's position back to its collider after the caller
    /// has applied (or overridden) the resolved displacement
    pub fn sync(&self, physics: &mut crate::PhysicsWorld, position: Vec3) {
        let Some(handle) = self.collider_handle else {
            return;
        };
        if let Some(collider) = physics.collider_set.get_mut(handle) {
            collider.set_translation(vector![position.x, position.y, position.z]);
        }
    }

    /// Half extents of the mover's bounding volume
    pub fn bounding_half_extents(&self) -> Vec3 {
        Vec3::new(self.config.radius, self.config.half_height, self.config.radius)
    }
}

impl Default for KinematicMover {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhysicsWorld;

    #[test]
    fn test_mover_config_defaults() {
        let config = MoverConfig::default();
        assert_eq!(config.half_height, 7.5);
        assert_eq!(config.radius, 1.5);
        assert_eq!(config.max_climb_angle, 45.0);
    }

    #[test]
    fn test_resolve_rejects_non_finite_input() {
        let mut physics = PhysicsWorld::new();
        let mut mover = KinematicMover::new();
        mover.spawn(&mut physics, Vec3::new(0.0, 10.0, 0.0));

        let res = mover.resolve(
            &mut physics,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(f32::NAN, 0.0, 0.0),
            0.016,
        );
        assert_eq!(res, MovementResolution::rejected());
    }

    #[test]
    fn test_resolve_without_spawn_is_inert() {
        let mut physics = PhysicsWorld::new();
        let mover = KinematicMover::new();
        let res = mover.resolve(&mut physics, Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), 0.016);
        assert_eq!(res.applied, Vec3::ZERO);
        assert!(!res.grounded);
    }

    #[test]
    fn test_resolve_returns_finite_displacement() {
        let mut physics = PhysicsWorld::new();
        physics.create_static_box(
            glam::Vec3::new(50.0, 0.1, 50.0),
            glam::Vec3::ZERO,
            glam::Quat::IDENTITY,
        );
        let mut mover = KinematicMover::new();
        mover.spawn(&mut physics, Vec3::new(0.0, 20.0, 0.0));
        physics.step();

        let res = mover.resolve(
            &mut physics,
            Vec3::new(0.0, 20.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            0.016,
        );
        assert!(res.applied.is_finite());
        assert!(res.applied.y <= 0.0);
    }
}
