//! Slot machine orchestrator
//!
//! Consumes [`Command`]s and drives one spin at a time through the reel
//! state machines, the evaluator and the injected collaborators.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use sg_core::{AudioRequest, AudioSink, SgError, SgResult, SoundId, fire};

use crate::config::SlotConfig;
use crate::evaluator::evaluate;
use crate::grid::Grid;
use crate::pulse::WinPulse;
use crate::reel::{ReelAnimation, ReelTransition};
use crate::session::Session;
use crate::spin::SpinOutcome;
use crate::surface::{ReelSurface, SpinPresenter};
use crate::timing::{ReelTiming, TimingProfile};

/// Input message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Spin button pressed
    RequestSpin,
    /// Animation frame, carrying the time since the previous frame
    Tick { delta_ms: f64 },
}

/// What a command did
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A new spin was accepted and the bet debited
    Started { spin_id: String },
    /// The press shortened the spin in flight
    FastForwarded,
    /// The press was dropped (spin in flight already fast-forwarded)
    Ignored,
    /// Tick with no spin in flight
    Idle,
    /// Tick advanced a spin that is still animating
    Animating,
    /// Tick brought every reel to rest
    Completed(SpinOutcome),
}

/// External capabilities the machine calls into
pub struct Collaborators<'a> {
    pub audio: &'a mut dyn AudioSink,
    pub surface: &'a mut dyn ReelSurface,
    pub presenter: &'a mut dyn SpinPresenter,
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    spin_id: String,
    bet: u64,
}

/// Single-spin-at-a-time slot machine
///
/// Holds only per-spin state; balance lives in the caller's [`Session`].
pub struct SlotMachine {
    config: SlotConfig,
    rng: StdRng,
    reels: Vec<ReelAnimation>,
    /// Accumulated tick time (ms)
    clock_ms: f64,
    fast_forward: bool,
    spin_count: u64,
    active: Option<ActiveSpin>,
    pulse: WinPulse,
    last_outcome: Option<SpinOutcome>,
}

impl SlotMachine {
    /// Create a machine with the classic config and OS entropy
    #[cfg(feature = "os-rng")]
    pub fn new() -> Self {
        Self::build(SlotConfig::classic(), StdRng::from_os_rng())
    }

    /// Create with specific config and OS entropy
    #[cfg(feature = "os-rng")]
    pub fn with_config(config: SlotConfig) -> SgResult<Self> {
        config.validate()?;
        Ok(Self::build(config, StdRng::from_os_rng()))
    }

    /// Create with a deterministic random stream
    pub fn with_seed(config: SlotConfig, seed: u64) -> SgResult<Self> {
        config.validate()?;
        Ok(Self::build(config, StdRng::seed_from_u64(seed)))
    }

    fn build(config: SlotConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            reels: Vec::new(),
            clock_ms: 0.0,
            fast_forward: false,
            spin_count: 0,
            active: None,
            pulse: WinPulse::new(),
            last_outcome: None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Replace reel timing (only between spins)
    pub fn set_timing(&mut self, timing: ReelTiming) -> SgResult<()> {
        if self.is_spinning() {
            return Err(SgError::InvalidConfig(
                "timing cannot change while reels are moving".into(),
            ));
        }
        let mut config = self.config.clone();
        config.timing = timing;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Switch between normal and turbo timing (only between spins)
    pub fn set_timing_profile(&mut self, profile: TimingProfile) -> SgResult<()> {
        self.set_timing(ReelTiming::from_profile(profile))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Check if a spin is in flight
    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    /// Check if the spin in flight has been fast-forwarded
    pub fn is_fast_forwarded(&self) -> bool {
        self.fast_forward
    }

    /// Per-column animation state of the current (or last) spin
    pub fn reels(&self) -> &[ReelAnimation] {
        &self.reels
    }

    /// Accumulated tick time (ms)
    pub fn now_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Spins started so far
    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    /// Outcome of the most recently completed spin
    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn pulse(&self) -> &WinPulse {
        &self.pulse
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // COMMANDS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Apply one command
    pub fn handle(
        &mut self,
        command: Command,
        session: &mut Session,
        io: &mut Collaborators<'_>,
    ) -> SgResult<Response> {
        match command {
            Command::RequestSpin => self.request_spin(session, io),
            Command::Tick { delta_ms } => self.tick(delta_ms, session, io),
        }
    }

    /// Spin button pressed
    ///
    /// Starts a spin when idle, turns the first repeat press into a
    /// fast-forward and drops any further press. Fails with
    /// [`SgError::InsufficientBalance`] before touching any state when the
    /// balance does not cover the bet.
    pub fn request_spin(
        &mut self,
        session: &mut Session,
        io: &mut Collaborators<'_>,
    ) -> SgResult<Response> {
        fire(io.audio, AudioRequest::StopLoop(SoundId::Win));

        if self.is_spinning() {
            if self.fast_forward {
                return Ok(Response::Ignored);
            }
            self.fast_forward = true;
            debug!("fast-forward requested at {:.0}ms", self.clock_ms);
            return Ok(Response::FastForwarded);
        }

        session.debit_bet()?;

        self.spin_count += 1;
        let spin_id = format!("spin-{:06}", self.spin_count);
        self.pulse.clear(io.surface);
        self.fast_forward = false;

        let rows = self.config.grid.rows as usize;
        let timing = &self.config.timing;
        let palette = &self.config.symbols;

        self.reels.clear();
        for col in 0..self.config.grid.reels as usize {
            let result = palette.random_column(&mut self.rng, rows);
            let speed = timing.roll_speed(&mut self.rng);
            let duration = timing.roll_duration(&mut self.rng, col);
            // One hidden cell above and below the visible rows
            let strip = palette.random_column(&mut self.rng, rows + 2);

            io.surface.show_spin_strip(col, &strip);
            io.surface.set_column_offset(col, 0.0);
            self.reels.push(ReelAnimation::start(col, result, speed, duration, self.clock_ms));
        }

        fire(io.audio, AudioRequest::OneShot(SoundId::Spin));
        fire(io.audio, AudioRequest::Loop(SoundId::Reel));

        self.active = Some(ActiveSpin {
            spin_id: spin_id.clone(),
            bet: session.bet(),
        });
        io.presenter.spin_started(&spin_id, session);

        info!(
            "{} started: bet {}, balance {}",
            spin_id,
            session.bet(),
            session.balance()
        );
        Ok(Response::Started { spin_id })
    }

    /// Advance the clock by one animation frame
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn tick(
        &mut self,
        delta_ms: f64,
        session: &mut Session,
        io: &mut Collaborators<'_>,
    ) -> SgResult<Response> {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        self.clock_ms += delta_ms;

        self.pulse.update(delta_ms, &self.config.timing, io.surface);

        if !self.is_spinning() {
            return Ok(Response::Idle);
        }

        for reel in &mut self.reels {
            let transition = reel.update(
                self.clock_ms,
                delta_ms,
                self.fast_forward,
                &self.config.timing,
                io.surface,
            );
            if transition == Some(ReelTransition::Settled) {
                debug!("reel {} settled at {:.0}ms", reel.col(), self.clock_ms);
                io.presenter.reel_settled(reel.col(), reel.result());
            }
        }

        if !self.reels.iter().all(ReelAnimation::is_done) {
            return Ok(Response::Animating);
        }
        let Some(active) = self.active.take() else {
            debug_assert!(false, "reels settled with no spin in flight");
            return Ok(Response::Idle);
        };
        self.complete(active, session, io).map(Response::Completed)
    }

    fn complete(
        &mut self,
        active: ActiveSpin,
        session: &mut Session,
        io: &mut Collaborators<'_>,
    ) -> SgResult<SpinOutcome> {
        self.fast_forward = false;

        fire(io.audio, AudioRequest::StopLoop(SoundId::Reel));

        let grid = Grid::from_columns(self.reels.iter().map(|r| r.result().to_vec()).collect())?;
        let eval = evaluate(&grid);
        let outcome = SpinOutcome::new(active.spin_id, grid, active.bet).with_evaluation(eval);

        session.settle(&outcome);
        if outcome.is_win() {
            fire(io.audio, AudioRequest::Loop(SoundId::Win));
            self.pulse.start(&outcome.winning_positions);
        }

        io.presenter.spin_completed(&outcome, session);
        info!(
            "{} complete: payout {}, balance {}",
            outcome.spin_id,
            outcome.payout,
            session.balance()
        );

        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }
}

#[cfg(feature = "os-rng")]
impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}
