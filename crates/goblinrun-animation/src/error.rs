use goblinrun_assets::ClipName;

/// Errors raised when wiring the animation system to loaded assets.
///
/// Configuration problems surface here, at construction time; state dispatch
/// itself has no failure path.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnimationError {
    #[error("no clip loaded for '{0}'")]
    MissingClip(ClipName),
}
