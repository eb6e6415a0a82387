//! Clip naming and loaded clip metadata

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of locomotion clips.
///
/// Clip names double as the names of the locomotion states they drive, so
/// this enum is the single name space shared by the asset store and the
/// animation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipName {
    Idle,
    Walk,
    Run,
    Jump,
    WalkBack,
    Dance,
}

impl ClipName {
    /// Number of locomotion clips
    pub const COUNT: usize = 6;

    /// All clip names, in index order
    pub const ALL: [ClipName; Self::COUNT] = [
        ClipName::Idle,
        ClipName::Walk,
        ClipName::Run,
        ClipName::Jump,
        ClipName::WalkBack,
        ClipName::Dance,
    ];

    /// Dense index for fixed-size per-clip storage
    pub fn index(self) -> usize {
        match self {
            ClipName::Idle => 0,
            ClipName::Walk => 1,
            ClipName::Run => 2,
            ClipName::Jump => 3,
            ClipName::WalkBack => 4,
            ClipName::Dance => 5,
        }
    }

    /// Lowercase label used in logs and settings files
    pub fn label(self) -> &'static str {
        match self {
            ClipName::Idle => "idle",
            ClipName::Walk => "walk",
            ClipName::Run => "run",
            ClipName::Jump => "jump",
            ClipName::WalkBack => "walkback",
            ClipName::Dance => "dance",
        }
    }
}

impl fmt::Display for ClipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata for a decoded animation clip, owned by the [`AssetStore`].
///
/// The clip's sampled pose data stays on the loader/renderer side of the
/// boundary; the locomotion core only needs the duration.
///
/// [`AssetStore`]: crate::AssetStore
#[derive(Debug, Clone, PartialEq)]
pub struct ClipAsset {
    /// Source file stem the clip was decoded from
    pub source: String,
    /// Clip length in seconds
    pub duration: f32,
}

impl ClipAsset {
    /// Create clip metadata for a decoded clip
    pub fn new(source: impl Into<String>, duration: f32) -> Self {
        Self {
            source: source.into(),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_name_indices_are_dense() {
        for (expected, name) in ClipName::ALL.iter().enumerate() {
            assert_eq!(name.index(), expected);
        }
    }

    #[test]
    fn test_clip_name_labels() {
        assert_eq!(ClipName::WalkBack.to_string(), "walkback");
        assert_eq!(ClipName::Idle.to_string(), "idle");
    }
}
