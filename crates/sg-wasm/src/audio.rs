// ============================================================================
// BROWSER AUDIO
// HtmlAudioElement playback behind the core's AudioSink
// ============================================================================

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use sg_core::{AudioSink, SgError, SgResult, SoundId};

use crate::settings::{AudioSettings, SoundAssets};

/// Sound manager backed by preloaded `<audio>` elements
///
/// One-shots rewind the preloaded element, or play a clone when it is
/// still busy so effects can overlap. Loops always play a fresh clone that
/// can be stopped at any time.
pub struct WebAudio {
    music: Option<HtmlAudioElement>,
    music_playing: bool,
    sounds: HashMap<SoundId, HtmlAudioElement>,
    looping: HashMap<SoundId, HtmlAudioElement>,
    settings: AudioSettings,
}

impl WebAudio {
    /// Preload every asset
    pub fn new(assets: &SoundAssets, settings: AudioSettings) -> SgResult<Self> {
        let mut music = None;
        let mut sounds = HashMap::new();

        for (&id, path) in &assets.paths {
            let element = HtmlAudioElement::new_with_src(path).map_err(js_error)?;
            if id == SoundId::Music {
                element.set_loop(true);
                element.set_volume(settings.music_volume());
                music = Some(element);
            } else {
                element.set_volume(settings.sfx_volume());
                sounds.insert(id, element);
            }
        }

        log::info!("[SlotGrid WASM] Preloaded {} sounds", sounds.len() + music.iter().count());
        Ok(Self {
            music,
            music_playing: false,
            sounds,
            looping: HashMap::new(),
            settings,
        })
    }

    pub fn settings(&self) -> AudioSettings {
        self.settings
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Start background music from the top (no-op when already playing)
    ///
    /// Browsers only allow this from a user gesture.
    pub fn start_music(&mut self) -> SgResult<()> {
        let Some(music) = &self.music else {
            return Ok(());
        };
        if self.music_playing {
            return Ok(());
        }
        music.set_current_time(0.0);
        start(music)?;
        self.music_playing = true;
        Ok(())
    }

    pub fn stop_music(&mut self) -> SgResult<()> {
        if let Some(music) = &self.music {
            if self.music_playing {
                music.pause().map_err(js_error)?;
                self.music_playing = false;
            }
        }
        Ok(())
    }

    /// Toggle background music; enabling starts it, disabling stops it
    pub fn set_music_enabled(&mut self, on: bool) -> SgResult<()> {
        self.settings.music_on = on;
        if let Some(music) = &self.music {
            music.set_volume(self.settings.music_volume());
        }
        if on { self.start_music() } else { self.stop_music() }
    }

    /// Mute or unmute effects; muting also ends the win loop
    pub fn set_sfx_enabled(&mut self, on: bool) -> SgResult<()> {
        self.settings.sfx_on = on;
        let volume = self.settings.sfx_volume();
        for element in self.sounds.values().chain(self.looping.values()) {
            element.set_volume(volume);
        }
        if !on {
            self.stop_loop(SoundId::Win)?;
        }
        Ok(())
    }

    /// Check whether a loop is currently playing
    pub fn is_looping(&self, id: SoundId) -> bool {
        self.looping.contains_key(&id)
    }

    fn sound(&self, id: SoundId) -> SgResult<&HtmlAudioElement> {
        self.sounds
            .get(&id)
            .ok_or_else(|| SgError::Audio(format!("no asset for '{}'", id.as_str())))
    }
}

impl AudioSink for WebAudio {
    fn play_one_shot(&mut self, id: SoundId) -> SgResult<()> {
        let sound = self.sound(id)?;
        if sound.paused() {
            sound.set_current_time(0.0);
            start(sound)
        } else {
            let overlap = duplicate(sound)?;
            overlap.set_volume(sound.volume());
            start(&overlap)
        }
    }

    fn play_loop(&mut self, id: SoundId) -> SgResult<()> {
        self.stop_loop(id)?;

        let looped = duplicate(self.sound(id)?)?;
        looped.set_loop(true);
        looped.set_volume(self.settings.sfx_volume());
        looped.set_current_time(0.0);
        start(&looped)?;
        self.looping.insert(id, looped);
        Ok(())
    }

    fn stop_loop(&mut self, id: SoundId) -> SgResult<()> {
        if let Some(looped) = self.looping.remove(&id) {
            looped.pause().map_err(js_error)?;
            looped.set_current_time(0.0);
        }
        Ok(())
    }
}

/// Begin playback; a refused play() promise (autoplay policy) only logs
fn start(element: &HtmlAudioElement) -> SgResult<()> {
    let promise = element.play().map_err(js_error)?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("[SlotGrid WASM] Playback refused: {:?}", e);
        }
    });
    Ok(())
}

fn duplicate(element: &HtmlAudioElement) -> SgResult<HtmlAudioElement> {
    element
        .clone_node_with_deep(true)
        .map_err(js_error)?
        .dyn_into::<HtmlAudioElement>()
        .map_err(|_| SgError::Audio("cloned node is not an audio element".into()))
}

fn js_error(e: JsValue) -> SgError {
    SgError::Audio(format!("{:?}", e))
}
