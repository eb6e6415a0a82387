//! Goblinrun Core - Shared types and frame timing
//!
//! This crate provides the foundational types used throughout the game:
//! - Mathematical primitives (re-exported from glam)
//! - Axis-aligned bounding box for the renderer boundary
//! - The per-frame input snapshot consumed by the locomotion core
//! - Frame clock for variable-timestep updates

pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec3};
pub use time::{GameTime, TimeConfig};
pub use types::{Aabb, InputSnapshot};
