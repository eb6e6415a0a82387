//! Goblinrun Game - Game logic and systems
//!
//! Provides the character controller, input handling, third-person camera,
//! course construction, and the per-frame world update.

pub mod camera;
pub mod character;
pub mod input;
pub mod level;
pub mod world;

pub use camera::{CameraConfig, ThirdPersonCamera};
pub use character::{CharacterController, CharacterKinematics, MovementConfig};
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use level::{Course, CourseId};
pub use world::GameWorld;
