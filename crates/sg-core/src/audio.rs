//! Audio collaborator seam
//!
//! The game core requests sounds by symbolic id and never inspects whether
//! playback actually started. Implementations live outside the core (the
//! browser port drives `HtmlAudioElement`s, tests record calls).

use serde::{Deserialize, Serialize};

use crate::error::SgResult;

/// Symbolic sound identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundId {
    /// Background music loop
    Music,
    /// Spin button press (one-shot)
    Spin,
    /// Reels in motion (looped while any reel spins)
    Reel,
    /// Win celebration (looped until the next spin)
    Win,
}

impl SoundId {
    pub const ALL: [SoundId; 4] = [SoundId::Music, SoundId::Spin, SoundId::Reel, SoundId::Win];

    /// Asset key
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundId::Music => "music",
            SoundId::Spin => "spin",
            SoundId::Reel => "reel",
            SoundId::Win => "win",
        }
    }

    /// Parse from asset key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == key)
    }
}

/// Audio playback capability injected into the game core
///
/// Every call is fire-and-forget from the caller's side. Errors are reported
/// so the call boundary can log them, but the core never acts on them.
pub trait AudioSink {
    /// Play a non-looping effect
    fn play_one_shot(&mut self, id: SoundId) -> SgResult<()>;

    /// Start a loop, restarting it if already playing
    fn play_loop(&mut self, id: SoundId) -> SgResult<()>;

    /// Stop a loop (no-op when not playing)
    fn stop_loop(&mut self, id: SoundId) -> SgResult<()>;
}

/// Sink that discards every request
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_one_shot(&mut self, _id: SoundId) -> SgResult<()> {
        Ok(())
    }

    fn play_loop(&mut self, _id: SoundId) -> SgResult<()> {
        Ok(())
    }

    fn stop_loop(&mut self, _id: SoundId) -> SgResult<()> {
        Ok(())
    }
}

/// Audio request kinds, used when forwarding failures to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioRequest {
    OneShot(SoundId),
    Loop(SoundId),
    StopLoop(SoundId),
}

/// Issue an audio request and swallow any failure
///
/// Audio faults must never block or fail a spin, so the error only reaches
/// the log.
pub fn fire(sink: &mut dyn AudioSink, request: AudioRequest) {
    let result = match request {
        AudioRequest::OneShot(id) => sink.play_one_shot(id),
        AudioRequest::Loop(id) => sink.play_loop(id),
        AudioRequest::StopLoop(id) => sink.stop_loop(id),
    };

    if let Err(e) = result {
        log::warn!("audio request {:?} failed: {}", request, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SgError;

    struct BrokenSpeaker {
        attempts: u32,
    }

    impl AudioSink for BrokenSpeaker {
        fn play_one_shot(&mut self, _id: SoundId) -> SgResult<()> {
            self.attempts += 1;
            Err(SgError::Audio("device lost".into()))
        }

        fn play_loop(&mut self, _id: SoundId) -> SgResult<()> {
            self.attempts += 1;
            Err(SgError::Audio("device lost".into()))
        }

        fn stop_loop(&mut self, _id: SoundId) -> SgResult<()> {
            self.attempts += 1;
            Ok(())
        }
    }

    #[test]
    fn test_sound_id_keys() {
        for id in SoundId::ALL {
            assert_eq!(SoundId::from_key(id.as_str()), Some(id));
        }
        assert_eq!(SoundId::from_key("jackpot"), None);
    }

    #[test]
    fn test_fire_swallows_failures() {
        let mut speaker = BrokenSpeaker { attempts: 0 };
        fire(&mut speaker, AudioRequest::OneShot(SoundId::Spin));
        fire(&mut speaker, AudioRequest::Loop(SoundId::Reel));
        fire(&mut speaker, AudioRequest::StopLoop(SoundId::Reel));
        assert_eq!(speaker.attempts, 3);
    }
}
