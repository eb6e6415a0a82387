//! Goblinrun Animation - Locomotion state machine and clip blending
//!
//! The character's animation is a six-state machine (idle, walk, run, jump,
//! walk-back, dance) layered over a set of shared clips. States own the
//! transition rules; the [`AnimationSet`] owns clip playback, cross-fades,
//! and one-shot completion tracking. Exactly one state is active at a time
//! and transitions run exit-then-enter atomically.

mod clip;
mod error;
mod machine;
mod set;
mod states;

pub use clip::{AnimationClip, LoopMode};
pub use error::AnimationError;
pub use machine::LocomotionStateMachine;
pub use set::{AnimationSet, FinishToken};

pub use goblinrun_assets::ClipName;
