//! Win evaluation
//!
//! Wins are horizontal runs: within each row, two or more adjacent cells
//! holding the same symbol. Runs never overlap inside a row, so every cell
//! wins at most once and the payout is simply the number of winning cells
//! ("1 credit per unique winning symbol", at most reels × rows).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sg_core::SgResult;

use crate::config::GridSpec;
use crate::grid::{Grid, WinningPosition};

/// Minimum run length that pays
pub const MIN_RUN: usize = 2;

/// A maximal run of equal symbols in one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub row: u8,
    /// First column of the run
    pub start_col: u8,
    pub len: u8,
}

impl Run {
    /// Cells covered by this run, left to right
    pub fn positions(&self) -> impl Iterator<Item = WinningPosition> + '_ {
        (0..self.len).map(move |i| WinningPosition::new(self.start_col + i, self.row))
    }
}

/// Result of evaluating a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Winning runs, row by row, left to right
    pub runs: Vec<Run>,
    /// Winning cells in scan order, without duplicates
    pub winning_positions: Vec<WinningPosition>,
    /// Credits won
    pub payout: u64,
}

impl Evaluation {
    /// Check if this is a winning spin
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Find every winning run, scanning each row left to right
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    let cols = grid.column_count();
    let mut runs = Vec::new();

    for row in 0..grid.row_count() {
        let mut col = 0;
        while col < cols {
            let symbol = grid.get(col, row);
            let len = 1 + (col + 1..cols)
                .take_while(|&next| grid.get(next, row) == symbol)
                .count();

            if len >= MIN_RUN {
                runs.push(Run {
                    row: row as u8,
                    start_col: col as u8,
                    len: len as u8,
                });
                col += len;
            } else {
                col += 1;
            }
        }
    }

    runs
}

/// Cells covered by winning runs
pub fn winning_positions(grid: &Grid) -> Vec<WinningPosition> {
    find_runs(grid).iter().flat_map(|run| run.positions()).collect()
}

/// Payout for a set of winning cells: one credit per distinct cell
pub fn payout(positions: &[WinningPosition]) -> u64 {
    positions.iter().collect::<BTreeSet<_>>().len() as u64
}

/// Evaluate a well-formed grid
pub fn evaluate(grid: &Grid) -> Evaluation {
    let runs = find_runs(grid);
    let winning_positions: Vec<WinningPosition> =
        runs.iter().flat_map(|run| run.positions()).collect();
    let payout = payout(&winning_positions);

    Evaluation {
        runs,
        winning_positions,
        payout,
    }
}

/// Evaluate after checking dimensions and symbol range
pub fn evaluate_checked(
    grid: &Grid,
    shape: GridSpec,
    symbol_count: usize,
) -> SgResult<Evaluation> {
    grid.validate(shape, symbol_count)?;
    Ok(evaluate(grid))
}
