//! Core types used throughout the game

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
///
/// Exposed to the renderer and camera as the character's bounding volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a bounding box from explicit corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a bounding box from a center point and half extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half extents of the box
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check whether two boxes overlap
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Immutable record of the control inputs for one frame.
///
/// Built fresh each frame by the input adapter. `grounded` is derived state:
/// the character controller stamps it from the previous frame's ground
/// contact before dispatching to the locomotion state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Move forward
    pub forward: bool,
    /// Move backward
    pub backward: bool,
    /// Turn left
    pub left: bool,
    /// Turn right
    pub right: bool,
    /// Sprint modifier
    pub sprint: bool,
    /// Jump requested
    pub jump: bool,
    /// Dance requested
    pub dance: bool,
    /// Supporting contact detected beneath the character on the previous frame
    pub grounded: bool,
}

impl InputSnapshot {
    /// A snapshot with no buttons held
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any movement key (forward or backward) is held
    pub fn moving(&self) -> bool {
        self.forward || self.backward
    }
}
