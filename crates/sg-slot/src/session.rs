//! Player session: balance, bet and running statistics

use serde::{Deserialize, Serialize};

use sg_core::{SgError, SgResult};

use crate::config::SlotConfig;
use crate::spin::SpinOutcome;

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_bet: u64,
    pub total_win: u64,
    pub wins: u64,
    pub losses: u64,
    /// Largest single payout
    pub max_payout: u64,
}

impl SessionStats {
    /// Calculate RTP
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            (self.total_win as f64 / self.total_bet as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }

    fn record(&mut self, outcome: &SpinOutcome) {
        self.total_win += outcome.payout;
        if outcome.is_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.max_payout = self.max_payout.max(outcome.payout);
    }
}

/// Balance owned by the player, debited per spin and credited on wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    balance: u64,
    bet: u64,
    stats: SessionStats,
}

impl Session {
    pub fn new(balance: u64, bet: u64) -> Self {
        Self {
            balance,
            bet,
            stats: SessionStats::default(),
        }
    }

    /// Start a session with the configured balance and bet
    pub fn from_config(config: &SlotConfig) -> Self {
        Self::new(config.initial_balance, config.bet)
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Check if the balance covers one bet
    pub fn can_afford(&self) -> bool {
        self.balance >= self.bet
    }

    /// Change the bet for subsequent spins
    pub fn set_bet(&mut self, bet: u64) -> SgResult<()> {
        if bet == 0 {
            return Err(SgError::InvalidConfig("bet must be positive".into()));
        }
        self.bet = bet;
        Ok(())
    }

    /// Take one bet from the balance
    ///
    /// Leaves the session untouched when the balance is short.
    pub fn debit_bet(&mut self) -> SgResult<u64> {
        if !self.can_afford() {
            return Err(SgError::InsufficientBalance {
                balance: self.balance,
                bet: self.bet,
            });
        }
        self.balance -= self.bet;
        self.stats.total_spins += 1;
        self.stats.total_bet += self.bet;
        Ok(self.balance)
    }

    /// Credit a finished spin's payout
    pub fn settle(&mut self, outcome: &SpinOutcome) -> u64 {
        self.balance = self.balance.saturating_add(outcome.payout);
        self.stats.record(outcome);
        self.balance
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&SlotConfig::classic())
    }
}
