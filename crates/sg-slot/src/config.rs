//! Slot machine configuration

use serde::{Deserialize, Serialize};

use sg_core::{Easing, SgError, SgResult};

use crate::symbols::SymbolPalette;
use crate::timing::{ReelTiming, TimingProfile};

/// Grid specification (reels × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: u8,
    /// Number of visible rows per reel
    pub rows: u8,
}

impl GridSpec {
    /// Classic 3×3 grid
    pub fn classic_3x3() -> Self {
        Self { reels: 3, rows: 3 }
    }

    /// Wide 5×3 grid
    pub fn wide_5x3() -> Self {
        Self { reels: 5, rows: 3 }
    }

    /// Total grid positions (also the maximum payout)
    pub fn total_positions(&self) -> usize {
        self.reels as usize * self.rows as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::classic_3x3()
    }
}

/// Complete slot machine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Grid dimensions
    pub grid: GridSpec,
    /// Symbols a reel can land on
    #[serde(default)]
    pub symbols: SymbolPalette,
    /// Credits debited per spin
    pub bet: u64,
    /// Balance a new session starts with
    pub initial_balance: u64,
    /// Reel motion timing
    #[serde(default)]
    pub timing: ReelTiming,
}

impl SlotConfig {
    /// The reference browser game: 3×3, four symbols, bet 2, balance 1000
    pub fn classic() -> Self {
        Self {
            grid: GridSpec::classic_3x3(),
            symbols: SymbolPalette::classic(),
            bet: 2,
            initial_balance: 1000,
            timing: ReelTiming::normal(),
        }
    }

    /// Classic rules on a 5×3 grid
    pub fn wide() -> Self {
        Self {
            grid: GridSpec::wide_5x3(),
            ..Self::classic()
        }
    }

    /// Switch timing profile
    pub fn with_timing_profile(mut self, profile: TimingProfile) -> Self {
        self.timing = ReelTiming::from_profile(profile);
        self
    }

    /// Check invariants the core relies on
    pub fn validate(&self) -> SgResult<()> {
        if self.grid.reels == 0 || self.grid.rows == 0 {
            return Err(SgError::InvalidConfig(format!(
                "grid must be at least 1×1, got {}×{}",
                self.grid.reels, self.grid.rows
            )));
        }
        if self.symbols.is_empty() {
            return Err(SgError::InvalidConfig("symbol palette is empty".into()));
        }
        if self.symbols.len() > u8::MAX as usize + 1 {
            return Err(SgError::InvalidConfig(format!(
                "symbol palette too large: {}",
                self.symbols.len()
            )));
        }
        if self.bet == 0 {
            return Err(SgError::InvalidConfig("bet must be positive".into()));
        }
        if self.timing.cell_spacing <= 0.0 {
            return Err(SgError::InvalidConfig("cell spacing must be positive".into()));
        }
        let timing = &self.timing;
        let durations = [
            timing.spin_duration_ms,
            timing.reel_stop_interval_ms,
            timing.stop_jitter_ms,
            timing.bounce_out_ms,
            timing.bounce_back_ms,
        ];
        if durations.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(SgError::InvalidConfig(
                "durations must be finite and not negative".into(),
            ));
        }
        if timing.base_speed_factor <= 0.0 || !timing.base_speed_factor.is_finite() {
            return Err(SgError::InvalidConfig(format!(
                "base speed factor must be positive, got {}",
                timing.base_speed_factor
            )));
        }
        // Slowest roll is base * (1 - jitter / 2)
        if !(0.0..2.0).contains(&timing.speed_jitter) {
            return Err(SgError::InvalidConfig(format!(
                "speed jitter must be in [0, 2), got {}",
                timing.speed_jitter
            )));
        }
        for easing in [timing.bounce_out_easing, timing.bounce_back_easing] {
            if let Easing::EaseOut { power } = easing {
                if power <= 0.0 || !power.is_finite() {
                    return Err(SgError::InvalidConfig(format!(
                        "ease-out power must be positive, got {}",
                        power
                    )));
                }
            }
        }
        Ok(())
    }

    /// Export config as JSON
    pub fn to_json(&self) -> SgResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SgError::Serialization(e.to_string()))
    }

    /// Import and validate config from JSON
    pub fn from_json(json: &str) -> SgResult<Self> {
        let config: SlotConfig =
            serde_json::from_str(json).map_err(|e| SgError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::classic()
    }
}
