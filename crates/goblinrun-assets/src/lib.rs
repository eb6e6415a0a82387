//! Goblinrun Assets - Animation clip registry
//!
//! The store is the boundary to the external asset loader: decoded clips are
//! registered here by name, and the rest of the game only ever sees clip
//! metadata and a readiness signal that fires once all locomotion clips have
//! arrived.

mod clip;
mod error;
mod manifest;
mod store;

pub use clip::{ClipAsset, ClipName};
pub use error::AssetError;
pub use manifest::{ClipManifest, ManifestEntry};
pub use store::AssetStore;
