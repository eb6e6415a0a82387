//! Goblinrun Physics - Collision world and kinematic mover using rapier3d
//!
//! Level geometry lives here as static colliders; the character is moved
//! with a kinematic move-and-slide resolution rather than forces.

mod mover;

pub use mover::{KinematicMover, MovementResolution, MoverConfig};

use glam::{Quat, Vec3};
use rapier3d::prelude::*;

/// Physics world configuration
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    /// Gravity vector (default: -9.81 on Y axis)
    pub gravity: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
        }
    }
}

/// The physics world containing all collision state
pub struct PhysicsWorld {
    /// Configuration
    pub config: PhysicsConfig,

    /// Rigid body storage (empty in practice; required by the pipelines)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,

    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    pub(crate) query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            config,
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Step the collision pipelines and refresh the query pipeline the
    /// mover resolves against
    pub fn step(&mut self) {
        let gravity = vector![
            self.config.gravity.x,
            self.config.gravity.y,
            self.config.gravity.z
        ];

        self.physics_pipeline.step(
            &gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (course geometry)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Create a static box collider with an orientation
    pub fn create_static_box(
        &mut self,
        half_extents: Vec3,
        position: Vec3,
        rotation: Quat,
    ) -> ColliderHandle {
        let (axis, angle) = rotation.to_axis_angle();
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .rotation(vector![axis.x * angle, axis.y * angle, axis.z * angle])
            .friction(0.7)
            .build();
        self.add_static_collider(collider)
    }

    /// Number of colliders in the world
    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_world_creation() {
        let world = PhysicsWorld::new();
        assert_eq!(world.config.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert_eq!(world.collider_count(), 0);
    }

    #[test]
    fn test_static_box_creation() {
        let mut world = PhysicsWorld::new();
        let handle = world.create_static_box(
            Vec3::new(50.0, 0.1, 350.0),
            Vec3::new(0.0, 0.0, 320.0),
            Quat::from_rotation_y(1.4),
        );
        assert!(world.collider_set.get(handle).is_some());
        assert_eq!(world.collider_count(), 1);
    }
}
