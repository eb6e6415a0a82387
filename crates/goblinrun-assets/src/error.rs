use crate::clip::ClipName;

/// Errors that can occur while registering clips.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetError {
    #[error("clip '{name}' has a non-positive duration ({duration})")]
    InvalidDuration { name: ClipName, duration: f32 },
}
