//! The list of clips a character needs before it can animate

use serde::{Deserialize, Serialize};

use crate::clip::ClipName;

/// One clip the loader is expected to deliver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Which locomotion clip this is
    pub name: ClipName,
    /// Source file stem (without extension) under the animation asset path
    pub source: String,
    /// Clip length in seconds, as authored
    pub duration: f32,
}

/// The full set of clips to request from the loader for one character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipManifest {
    pub entries: Vec<ManifestEntry>,
}

impl ClipManifest {
    /// The stock goblin locomotion set.
    pub fn standard() -> Self {
        let entry = |name, source: &str, duration| ManifestEntry {
            name,
            source: source.to_string(),
            duration,
        };
        Self {
            entries: vec![
                entry(ClipName::Idle, "breathingidle", 7.33),
                entry(ClipName::Walk, "walking", 1.04),
                entry(ClipName::Run, "running", 0.76),
                entry(ClipName::Jump, "jump", 1.17),
                entry(ClipName::WalkBack, "walkingbackwards", 1.10),
                entry(ClipName::Dance, "hiphopdancing", 9.60),
            ],
        }
    }
}
