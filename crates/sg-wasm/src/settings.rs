// ============================================================================
// AUDIO SETTINGS
// Player toggles and sound asset locations (in memory only)
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sg_core::{SgError, SgResult, SoundId};

/// Background music volume when enabled
pub const MUSIC_VOLUME: f64 = 0.5;

/// Sound effect volume when enabled
pub const SFX_VOLUME: f64 = 1.0;

/// Music and sound-effect toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub music_on: bool,
    pub sfx_on: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_on: true,
            sfx_on: true,
        }
    }
}

impl AudioSettings {
    pub fn music_volume(&self) -> f64 {
        if self.music_on { MUSIC_VOLUME } else { 0.0 }
    }

    pub fn sfx_volume(&self) -> f64 {
        if self.sfx_on { SFX_VOLUME } else { 0.0 }
    }
}

/// URL of each sound asset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundAssets {
    pub paths: HashMap<SoundId, String>,
}

impl Default for SoundAssets {
    fn default() -> Self {
        Self::under("/assets")
    }
}

impl SoundAssets {
    /// `<base>/<key>.mp3` for every sound
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let paths = SoundId::ALL
            .into_iter()
            .map(|id| (id, format!("{}/{}.mp3", base, id.as_str())))
            .collect();
        Self { paths }
    }

    pub fn path(&self, id: SoundId) -> Option<&str> {
        self.paths.get(&id).map(String::as_str)
    }

    /// Parse a `{ "music": "...", "reel": "..." }` map
    ///
    /// Sounds left out of the map have no asset and are skipped on playback.
    pub fn from_json(json: &str) -> SgResult<Self> {
        let paths: HashMap<SoundId, String> =
            serde_json::from_str(json).map_err(|e| SgError::Serialization(e.to_string()))?;
        Ok(Self { paths })
    }
}

// ============================================================================
// TESTS
// ============================================================================
