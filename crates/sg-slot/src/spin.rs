//! Spin outcome

use serde::{Deserialize, Serialize};

use crate::evaluator::{Evaluation, Run};
use crate::grid::{Grid, WinningPosition};

/// Final result of one spin, reported once every reel is at rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Spin ID ("spin-000001", ...)
    pub spin_id: String,
    /// Final grid (reels × rows)
    pub grid: Grid,
    /// Bet debited for this spin
    pub bet: u64,
    /// Winning runs
    pub runs: Vec<Run>,
    /// Winning cells, highlighted by the presenter
    pub winning_positions: Vec<WinningPosition>,
    /// Credits won
    pub payout: u64,
    /// Payout-to-bet ratio
    pub win_ratio: f64,
}

impl SpinOutcome {
    /// Create an outcome with no wins
    pub fn new(spin_id: String, grid: Grid, bet: u64) -> Self {
        Self {
            spin_id,
            grid,
            bet,
            runs: Vec::new(),
            winning_positions: Vec::new(),
            payout: 0,
            win_ratio: 0.0,
        }
    }

    /// Apply evaluation result
    pub fn with_evaluation(mut self, eval: Evaluation) -> Self {
        self.runs = eval.runs;
        self.winning_positions = eval.winning_positions;
        self.payout = eval.payout;
        self.win_ratio = if self.bet > 0 {
            self.payout as f64 / self.bet as f64
        } else {
            0.0
        };
        self
    }

    /// Check if this is a win
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }

    /// Export as JSON (for the presenter boundary)
    pub fn to_json(&self) -> sg_core::SgResult<String> {
        serde_json::to_string(self).map_err(|e| sg_core::SgError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn test_outcome_from_evaluation() {
        let grid = Grid::from_rows(&[&[0, 0, 1], &[2, 2, 2], &[3, 1, 0]]).unwrap();
        let eval = evaluate(&grid);
        let outcome = SpinOutcome::new("spin-000001".into(), grid, 2).with_evaluation(eval);

        assert!(outcome.is_win());
        assert_eq!(outcome.payout, 5);
        assert_eq!(outcome.runs.len(), 2);
        assert_eq!(outcome.winning_positions.len(), 5);
        assert!((outcome.win_ratio - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_losing_outcome() {
        let grid = Grid::from_rows(&[&[0, 1, 0], &[1, 0, 1], &[2, 3, 2]]).unwrap();
        let outcome = SpinOutcome::new("spin-000002".into(), grid.clone(), 2)
            .with_evaluation(evaluate(&grid));

        assert!(!outcome.is_win());
        assert_eq!(outcome.win_ratio, 0.0);
        assert!(outcome.winning_positions.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let grid = Grid::from_rows(&[&[1, 1, 3]]).unwrap();
        let outcome = SpinOutcome::new("spin-000003".into(), grid.clone(), 2)
            .with_evaluation(evaluate(&grid));
        let json = outcome.to_json().unwrap();

        assert!(json.contains("\"spin_id\":\"spin-000003\""));
        assert!(json.contains("\"payout\":2"));
        assert!(json.contains(
            "\"winning_positions\":[{\"col\":0,\"row\":0},{\"col\":1,\"row\":0}]"
        ));
    }
}
