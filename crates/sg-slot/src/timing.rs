//! Timing profiles for reel motion
//!
//! All durations are in milliseconds and all distances in design units
//! (unscaled pixels of the reference layout). The renderer applies its own
//! scale factor to offsets.

use rand::Rng;
use serde::{Deserialize, Serialize};

use sg_core::Easing;

/// Timing profile for reel animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast/Turbo mode
    Turbo,
    /// Custom timing (scaled or hand-tuned)
    Custom,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Detailed reel timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelTiming {
    /// Profile type
    pub profile: TimingProfile,

    /// Base time the first reel spins before settling (ms)
    pub spin_duration_ms: f64,

    /// Extra spin time per column, producing the left-to-right stop cascade (ms)
    pub reel_stop_interval_ms: f64,

    /// Upper bound of random extra spin time per column (ms)
    pub stop_jitter_ms: f64,

    /// Distance between vertically adjacent cells (sprite size + margin)
    pub cell_spacing: f32,

    /// Base scroll speed as a fraction of cell spacing per ms
    pub base_speed_factor: f32,

    /// Total width of the random speed band (0.35 = ±17.5 %)
    pub speed_jitter: f32,

    /// Offset a reel snaps to when it settles (below rest)
    pub bounce_overshoot: f32,

    /// Offset the bounce-out segment eases toward (above rest)
    pub bounce_back: f32,

    /// Duration of the bounce-out segment (ms)
    pub bounce_out_ms: f64,

    /// Duration of the bounce-back segment (ms)
    pub bounce_back_ms: f64,

    /// Curve of the bounce-out segment
    pub bounce_out_easing: Easing,

    /// Curve of the bounce-back segment
    pub bounce_back_easing: Easing,

    /// Win pulse phase advance per ms
    pub pulse_rate_per_ms: f64,

    /// Win pulse scale amplitude
    pub pulse_amplitude: f32,
}

impl ReelTiming {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            spin_duration_ms: 1100.0,
            reel_stop_interval_ms: 220.0,
            stop_jitter_ms: 180.0,
            cell_spacing: 232.0,
            base_speed_factor: 0.0125,
            speed_jitter: 0.35,
            bounce_overshoot: 36.0,
            bounce_back: 12.0,
            bounce_out_ms: 120.0,
            bounce_back_ms: 110.0,
            bounce_out_easing: Easing::EaseOut { power: 1.7 },
            bounce_back_easing: Easing::Linear,
            // 0.05 per frame at 60 Hz
            pulse_rate_per_ms: 0.003,
            pulse_amplitude: 0.1,
        }
    }

    /// Turbo mode (short spins, same bounce feel)
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            spin_duration_ms: 450.0,
            reel_stop_interval_ms: 110.0,
            stop_jitter_ms: 60.0,
            base_speed_factor: 0.02,
            ..Self::normal()
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Custom => Self::normal(),
        }
    }

    /// Scale spin timing by factor (< 1.0 = faster)
    ///
    /// Bounce segments keep their length so the settle feels the same.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: TimingProfile::Custom,
            spin_duration_ms: self.spin_duration_ms * factor,
            reel_stop_interval_ms: self.reel_stop_interval_ms * factor,
            stop_jitter_ms: self.stop_jitter_ms * factor,
            ..self.clone()
        }
    }

    /// Nominal scroll speed in design units per ms
    pub fn base_speed(&self) -> f32 {
        self.cell_spacing * self.base_speed_factor
    }

    /// Random scroll speed for one reel
    pub fn roll_speed<R: Rng>(&self, rng: &mut R) -> f32 {
        let r: f32 = rng.random();
        self.base_speed() * (1.0 + (r - 0.5) * self.speed_jitter)
    }

    /// Random spin duration for one reel
    pub fn roll_duration<R: Rng>(&self, rng: &mut R, column: usize) -> f64 {
        let r: f64 = rng.random();
        self.spin_duration_ms + column as f64 * self.reel_stop_interval_ms + r * self.stop_jitter_ms
    }

    /// Longest spin duration a reel in `column` can roll
    pub fn max_spin_duration(&self, column: usize) -> f64 {
        self.spin_duration_ms + column as f64 * self.reel_stop_interval_ms + self.stop_jitter_ms
    }

    /// Combined length of both bounce segments
    pub fn settle_duration(&self) -> f64 {
        self.bounce_out_ms + self.bounce_back_ms
    }

    /// Upper bound for a full spin of `reel_count` reels (no fast-forward)
    pub fn max_total_duration(&self, reel_count: usize) -> f64 {
        self.max_spin_duration(reel_count.saturating_sub(1)) + self.settle_duration()
    }
}

impl Default for ReelTiming {
    fn default() -> Self {
        Self::normal()
    }
}
