// ============================================================================
// SLOT GAME (JS-visible)
// Owns machine, session, audio and view; the page forwards taps and frames
// ============================================================================

use wasm_bindgen::prelude::*;

use sg_core::SgError;
use sg_slot::{Collaborators, Command, Response, Session, SlotConfig, SlotMachine, TimingProfile};

use crate::audio::WebAudio;
use crate::settings::{AudioSettings, SoundAssets};
use crate::view::{ReelView, ViewPresenter, ViewSurface};

#[wasm_bindgen]
pub struct SlotGame {
    machine: SlotMachine,
    session: Session,
    audio: WebAudio,
    surface: ViewSurface,
    presenter: ViewPresenter,
}

#[wasm_bindgen]
impl SlotGame {
    /// Create a game bound to a JS view
    ///
    /// `config_json` falls back to the classic 3×3 machine and
    /// `assets_json` to `/assets/<sound>.mp3`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        view: ReelView,
        config_json: Option<String>,
        assets_json: Option<String>,
    ) -> Result<SlotGame, JsValue> {
        let config = match config_json {
            Some(json) => SlotConfig::from_json(&json).map_err(to_js)?,
            None => SlotConfig::classic(),
        };
        let assets = match assets_json {
            Some(json) => SoundAssets::from_json(&json).map_err(to_js)?,
            None => SoundAssets::default(),
        };

        let session = Session::from_config(&config);
        let machine = SlotMachine::with_seed(config, browser_seed()).map_err(to_js)?;
        let audio = WebAudio::new(&assets, AudioSettings::default()).map_err(to_js)?;

        log::info!(
            "[SlotGrid WASM] Game ready: {}×{}, balance {}",
            machine.config().grid.reels,
            machine.config().grid.rows,
            session.balance()
        );

        Ok(SlotGame {
            machine,
            session,
            audio,
            surface: ViewSurface(view.clone()),
            presenter: ViewPresenter(view),
        })
    }

    /// Spin button pressed
    ///
    /// Returns "started", "fast_forwarded" or "ignored"; a short balance is
    /// an error.
    #[wasm_bindgen]
    pub fn spin(&mut self) -> Result<String, JsValue> {
        // First gesture unlocks audio
        if self.audio.settings().music_on {
            if let Err(e) = self.audio.start_music() {
                log::warn!("[SlotGrid WASM] Music did not start: {}", e);
            }
        }
        let response = self.handle(Command::RequestSpin)?;
        Ok(response_kind(&response).to_string())
    }

    /// Animation frame
    ///
    /// Returns true on the frame that completes a spin.
    #[wasm_bindgen]
    pub fn tick(&mut self, delta_ms: f64) -> Result<bool, JsValue> {
        let response = self.handle(Command::Tick { delta_ms })?;
        Ok(matches!(response, Response::Completed(_)))
    }

    #[wasm_bindgen]
    pub fn balance(&self) -> f64 {
        self.session.balance() as f64
    }

    #[wasm_bindgen]
    pub fn bet(&self) -> f64 {
        self.session.bet() as f64
    }

    #[wasm_bindgen]
    pub fn can_spin(&self) -> bool {
        !self.machine.is_spinning() && self.session.can_afford()
    }

    #[wasm_bindgen]
    pub fn is_spinning(&self) -> bool {
        self.machine.is_spinning()
    }

    /// Session statistics as a plain object
    #[wasm_bindgen]
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.stats()).map_err(JsValue::from)
    }

    /// Last completed spin as a plain object (undefined before the first)
    #[wasm_bindgen]
    pub fn last_outcome(&self) -> Result<JsValue, JsValue> {
        match self.machine.last_outcome() {
            Some(outcome) => serde_wasm_bindgen::to_value(outcome).map_err(JsValue::from),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn set_turbo(&mut self, turbo: bool) -> Result<(), JsValue> {
        let profile = if turbo {
            TimingProfile::Turbo
        } else {
            TimingProfile::Normal
        };
        self.machine.set_timing_profile(profile).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.machine.config().to_json().map_err(to_js)
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn music_enabled(&self) -> bool {
        self.audio.settings().music_on
    }

    #[wasm_bindgen]
    pub fn sfx_enabled(&self) -> bool {
        self.audio.settings().sfx_on
    }

    #[wasm_bindgen]
    pub fn set_music_enabled(&mut self, on: bool) -> Result<(), JsValue> {
        self.audio.set_music_enabled(on).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_sfx_enabled(&mut self, on: bool) -> Result<(), JsValue> {
        self.audio.set_sfx_enabled(on).map_err(to_js)
    }
}

impl SlotGame {
    fn handle(&mut self, command: Command) -> Result<Response, JsValue> {
        let mut io = Collaborators {
            audio: &mut self.audio,
            surface: &mut self.surface,
            presenter: &mut self.presenter,
        };
        self.machine
            .handle(command, &mut self.session, &mut io)
            .map_err(to_js)
    }
}

/// Short name of a spin-button response for the page
pub fn response_kind(response: &Response) -> &'static str {
    match response {
        Response::Started { .. } => "started",
        Response::FastForwarded => "fast_forwarded",
        Response::Ignored => "ignored",
        Response::Idle => "idle",
        Response::Animating => "animating",
        Response::Completed(_) => "completed",
    }
}

/// 64-bit seed from two `Math.random()` draws
fn browser_seed() -> u64 {
    seed_from_unit(js_sys::Math::random(), js_sys::Math::random())
}

fn seed_from_unit(high: f64, low: f64) -> u64 {
    const SCALE: f64 = 4_294_967_296.0;
    let hi = (high.clamp(0.0, 1.0) * SCALE) as u64 & 0xFFFF_FFFF;
    let lo = (low.clamp(0.0, 1.0) * SCALE) as u64 & 0xFFFF_FFFF;
    (hi << 32) | lo
}

fn to_js(e: SgError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
