//! The running game session: physics, character, camera, clock

use goblinrun_animation::AnimationError;
use goblinrun_assets::AssetStore;
use goblinrun_core::{GameTime, InputSnapshot};
use goblinrun_physics::PhysicsWorld;

use crate::camera::{CameraConfig, ThirdPersonCamera};
use crate::character::{CharacterController, MovementConfig};
use crate::level::{Course, CourseId};

/// Everything one loaded course session owns.
pub struct GameWorld {
    /// Collision world holding the course geometry and the character
    pub physics: PhysicsWorld,
    /// The loaded course
    pub course: Course,
    /// The player character
    pub player: CharacterController,
    /// Follow camera
    pub camera: ThirdPersonCamera,
    /// Frame clock
    pub time: GameTime,
}

impl GameWorld {
    /// Build a course and spawn the (still unloaded) character on it
    pub fn new(course_id: CourseId, movement: MovementConfig, camera: CameraConfig) -> Self {
        let mut physics = PhysicsWorld::new();
        let course = Course::build(course_id, &mut physics);

        let mut player = CharacterController::new(movement, course.spawn_point);
        player.spawn(&mut physics);

        let mut camera = ThirdPersonCamera::with_config(camera);
        camera.snap_to(player.position(), player.orientation());

        Self {
            physics,
            course,
            player,
            camera,
            time: GameTime::default(),
        }
    }

    /// Hand the character its clips once the store is ready
    pub fn finish_loading(&mut self, store: &AssetStore) -> Result<(), AnimationError> {
        self.player.finish_loading(store)
    }

    /// Advance the session by one display frame.
    ///
    /// `raw_delta` is the measured wall-clock delta; while paused the
    /// simulation holds still but the clock keeps counting frames.
    pub fn update(&mut self, raw_delta: f32, input: &InputSnapshot) {
        self.time.update(raw_delta);
        if self.time.paused {
            return;
        }

        let dt = self.time.delta_time;
        self.physics.step();
        self.player.update(&mut self.physics, input, dt);
        self.camera
            .update(dt, self.player.position(), self.player.orientation());
    }

    /// Toggle the pause state
    pub fn toggle_pause(&mut self) {
        self.time.toggle_pause();
    }
}
