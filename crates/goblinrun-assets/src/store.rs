use std::collections::HashMap;

use tracing::{debug, info};

use crate::clip::{ClipAsset, ClipName};
use crate::error::AssetError;
use crate::manifest::ClipManifest;

/// Central clip registry. The external loader registers decoded clips here;
/// the game queries them by name and waits on the readiness signal.
pub struct AssetStore {
    clips: HashMap<ClipName, ClipAsset>,
    ready_announced: bool,
}

impl AssetStore {
    /// Create an empty store
    pub fn new() -> Self {
        info!("asset store created");
        Self {
            clips: HashMap::new(),
            ready_announced: false,
        }
    }

    /// Register a decoded clip. Re-registering a name keeps the first clip
    /// and returns successfully, mirroring a cached load.
    pub fn insert(&mut self, name: ClipName, asset: ClipAsset) -> Result<(), AssetError> {
        if asset.duration <= 0.0 {
            return Err(AssetError::InvalidDuration {
                name,
                duration: asset.duration,
            });
        }

        if self.clips.contains_key(&name) {
            debug!(clip = %name, "clip already registered; keeping existing");
            return Ok(());
        }

        info!(clip = %name, source = %asset.source, duration = asset.duration, "clip registered");
        self.clips.insert(name, asset);
        Ok(())
    }

    /// Register every clip in a manifest, as the external loader would on
    /// bulk-load completion.
    pub fn load_manifest(&mut self, manifest: &ClipManifest) -> Result<(), AssetError> {
        for entry in &manifest.entries {
            self.insert(entry.name, ClipAsset::new(entry.source.clone(), entry.duration))?;
        }
        Ok(())
    }

    /// Look up a registered clip by name
    pub fn get(&self, name: ClipName) -> Option<&ClipAsset> {
        self.clips.get(&name)
    }

    /// Whether all locomotion clips have been registered
    pub fn ready(&self) -> bool {
        ClipName::ALL.iter().all(|name| self.clips.contains_key(name))
    }

    /// Bulk-load completion signal: returns `true` exactly once, the first
    /// time the store is observed with all clips present.
    pub fn take_ready_event(&mut self) -> bool {
        if self.ready_announced || !self.ready() {
            return false;
        }
        self.ready_announced = true;
        info!("all locomotion clips loaded");
        true
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}
