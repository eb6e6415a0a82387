//! The character controller: input + time -> displacement, every frame

use glam::{Quat, Vec3};
use goblinrun_animation::{AnimationError, AnimationSet, ClipName, LocomotionStateMachine};
use goblinrun_assets::AssetStore;
use goblinrun_core::{Aabb, InputSnapshot};
use goblinrun_physics::{KinematicMover, PhysicsWorld};
use tracing::info;

use super::config::MovementConfig;
use super::kinematics::CharacterKinematics;

/// Owns the character's kinematic state, its locomotion state machine, and
/// its physics mover, and reconciles them once per frame.
///
/// Until `finish_loading` has run the controller is inert: updates are safe
/// no-ops, matching the window where clips are still being decoded.
pub struct CharacterController {
    /// Movement configuration
    pub config: MovementConfig,
    /// Kinematic state, readable by the renderer and camera
    pub kinematics: CharacterKinematics,
    machine: LocomotionStateMachine,
    animations: Option<AnimationSet>,
    mover: KinematicMover,
}

impl CharacterController {
    /// Create an unloaded character at `start`
    pub fn new(config: MovementConfig, start: Vec3) -> Self {
        Self {
            config,
            kinematics: CharacterKinematics::new(start),
            machine: LocomotionStateMachine::new(),
            animations: None,
            mover: KinematicMover::new(),
        }
    }

    /// Create the character's collider in the physics world
    pub fn spawn(&mut self, physics: &mut PhysicsWorld) {
        self.mover.spawn(physics, self.kinematics.position);
    }

    /// Attach the clip set once the store reports ready and enter idle.
    pub fn finish_loading(&mut self, store: &AssetStore) -> Result<(), AnimationError> {
        let mut animations = AnimationSet::from_store(store)?;
        self.machine.set_state(&mut animations, ClipName::Idle);
        self.animations = Some(animations);
        info!("character clips ready; entering idle");
        Ok(())
    }

    /// Whether the clip set has been attached
    pub fn is_loaded(&self) -> bool {
        self.animations.is_some()
    }

    /// Advance the character by one frame.
    ///
    /// Transition evaluation runs first, then velocity integration, then the
    /// displacement is resolved against the course geometry. A no-op until
    /// loading has finished.
    pub fn update(&mut self, physics: &mut PhysicsWorld, input: &InputSnapshot, dt: f32) {
        let Some(mut animations) = self.animations.take() else {
            return;
        };

        // the machine sees last frame's ground contact, not this frame's
        let input = InputSnapshot {
            grounded: self.kinematics.jump_ready,
            ..*input
        };

        self.machine.update(&mut animations, dt, &input);
        self.integrate(&input, dt);

        let desired = self.world_velocity();
        let resolution = self
            .mover
            .resolve(physics, self.kinematics.position, desired, dt);
        self.apply_movement(resolution.applied, resolution.grounded);
        self.mover.sync(physics, self.kinematics.position);

        animations.advance(dt);
        self.machine.poll_finished(&mut animations);
        self.animations = Some(animations);
    }

    /// Integrate input into the local-frame velocity and yaw.
    fn integrate(&mut self, input: &InputSnapshot, dt: f32) {
        let config = &self.config;
        let k = &mut self.kinematics;

        // frame deceleration, clamped so it can never overshoot zero
        let decel_x = k.velocity.x * config.deceleration.x * dt;
        let decel_z = k.velocity.z * config.deceleration.z * dt;
        k.velocity.x += decel_x.signum() * decel_x.abs().min(k.velocity.x.abs());
        k.velocity.z += decel_z.signum() * decel_z.abs().min(k.velocity.z.abs());

        let acc = config.shaped_acceleration(input);

        if input.forward {
            k.velocity.z += acc.z * dt;
        }
        if input.backward {
            k.velocity.z -= acc.z * dt;
        }

        if input.jump && k.jump_ready {
            // launch: an instantaneous impulse, consumed with the latch
            k.jump_ready = false;
            k.velocity.y = acc.y;
        } else if k.jump_ready {
            k.velocity.y = 0.0;
        } else {
            k.velocity.y += config.deceleration.y * dt;
        }

        let turn = config.turn_rate * dt * acc.x;
        if input.left {
            k.orientation *= Quat::from_axis_angle(Vec3::Y, turn);
        }
        if input.right {
            k.orientation *= Quat::from_axis_angle(Vec3::Y, -turn);
        }
        k.orientation = k.orientation.normalize();
    }

    /// Rotate the local-frame velocity into world space
    fn world_velocity(&self) -> Vec3 {
        let k = &self.kinematics;
        let forward = k.orientation * Vec3::Z;
        let sideways = k.orientation * Vec3::X;
        let upwards = k.orientation * Vec3::Y;
        sideways * k.velocity.x + upwards * k.velocity.y + forward * k.velocity.z
    }

    /// Apply the resolved displacement, recover from falling out of the
    /// course, and latch ground contact for the next frame.
    fn apply_movement(&mut self, applied: Vec3, grounded: bool) {
        let k = &mut self.kinematics;
        k.position += applied;

        if k.position.y < self.config.fall_limit {
            info!(respawn = ?self.config.respawn_point, "fell out of the course; respawning");
            k.position = self.config.respawn_point;
            k.velocity = Vec3::ZERO;
        }

        k.grounded = grounded;
        k.jump_ready = grounded;
    }

    /// World-space position, for the renderer and camera
    pub fn position(&self) -> Vec3 {
        self.kinematics.position
    }

    /// World-space orientation, for the renderer and camera
    pub fn orientation(&self) -> Quat {
        self.kinematics.orientation
    }

    /// Bounding volume around the character's collider
    pub fn bounding_volume(&self) -> Aabb {
        Aabb::from_center_half_extents(self.kinematics.position, self.mover.bounding_half_extents())
    }

    /// Name of the active locomotion state, once loaded
    pub fn state(&self) -> Option<ClipName> {
        self.machine.current()
    }
}
