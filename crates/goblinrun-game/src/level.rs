//! The two obstacle courses, built as static collision geometry

use glam::{Quat, Vec3};
use goblinrun_physics::PhysicsWorld;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which course to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseId {
    /// Course 1: runway, rising spiral of ramps, switchback descent
    Ramps,
    /// Course 2: flat practice arena
    Arena,
}

impl CourseId {
    /// Map the menu's 1-based course number
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(CourseId::Ramps),
            2 => Some(CourseId::Arena),
            _ => None,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            CourseId::Ramps => "ramps",
            CourseId::Arena => "arena",
        }
    }
}

/// A built course: its static geometry lives in the physics world, the
/// character starts at `spawn_point`.
pub struct Course {
    /// Which course this is
    pub id: CourseId,
    /// Where the character is placed on load
    pub spawn_point: Vec3,
}

impl Course {
    /// Build the course geometry into the physics world
    pub fn build(id: CourseId, physics: &mut PhysicsWorld) -> Self {
        match id {
            CourseId::Ramps => Self::build_ramps(physics),
            CourseId::Arena => Self::build_arena(physics),
        }

        info!(
            course = id.label(),
            colliders = physics.collider_count(),
            "course built"
        );

        Self {
            id,
            spawn_point: Vec3::new(-670.0, 755.0, 905.0),
        }
    }

    fn build_ramps(physics: &mut PhysicsWorld) {
        // starting runway
        physics.create_static_box(
            Vec3::new(50.0, 0.1, 350.0),
            Vec3::new(0.0, 0.0, 320.0),
            Quat::IDENTITY,
        );

        // rising spiral of ramp segments
        for i in 0..19 {
            let i = i as f32;
            physics.create_static_box(
                Vec3::new(15.0, 1.0, 8.0),
                Vec3::new(45.0 + i * 15.0, 15.0 + i * 10.0, 15.0 + i * 30.0),
                Quat::from_rotation_y(1.4 - 0.4 * i),
            );
        }

        // mid-course rest platform
        physics.create_static_box(
            Vec3::new(25.0, 1.0, 30.0),
            Vec3::new(345.0, 215.0, 615.0),
            Quat::IDENTITY,
        );

        // switchback climb to the summit
        for i in 1..30 {
            let i = i as f32;
            physics.create_static_box(
                Vec3::new(8.0, 1.0, 20.0),
                Vec3::new(345.0 - i * 35.0, 215.0 + i * 15.0, 615.0 + i * 10.0),
                Quat::from_rotation_y(1.4 - 0.2 * i),
            );
        }

        // summit platform, where the character starts
        physics.create_static_box(
            Vec3::new(30.0, 1.0, 30.0),
            Vec3::new(-705.0, 155.0, 915.0),
            Quat::IDENTITY,
        );
    }

    fn build_arena(physics: &mut PhysicsWorld) {
        physics.create_static_box(
            Vec3::new(350.0, 0.1, 350.0),
            Vec3::ZERO,
            Quat::IDENTITY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_index_mapping() {
        assert_eq!(CourseId::from_index(1), Some(CourseId::Ramps));
        assert_eq!(CourseId::from_index(2), Some(CourseId::Arena));
        assert_eq!(CourseId::from_index(3), None);
    }

    #[test]
    fn test_ramps_course_geometry() {
        let mut physics = PhysicsWorld::new();
        let course = Course::build(CourseId::Ramps, &mut physics);
        // runway + 19 spiral ramps + rest platform + 29 switchbacks + summit
        assert_eq!(physics.collider_count(), 51);
        assert_eq!(course.spawn_point, Vec3::new(-670.0, 755.0, 905.0));
    }

    #[test]
    fn test_arena_course_geometry() {
        let mut physics = PhysicsWorld::new();
        let course = Course::build(CourseId::Arena, &mut physics);
        assert_eq!(physics.collider_count(), 1);
        assert_eq!(course.id, CourseId::Arena);
    }
}
