//! Symbol grid and winning positions

use serde::{Deserialize, Serialize};

use sg_core::{SgError, SgResult};

use crate::config::GridSpec;
use crate::symbols::SymbolIndex;

/// A single grid cell that participates in a payout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WinningPosition {
    /// Column (reel), 0 = leftmost
    pub col: u8,
    /// Row, 0 = top
    pub row: u8,
}

impl WinningPosition {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// Largest column or row count a grid may have (positions are `u8`)
pub const MAX_GRID_SIDE: usize = u8::MAX as usize;

/// Finalized reel contents, stored column-major (reels × rows)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: Vec<Vec<SymbolIndex>>,
}

impl Grid {
    /// Build from columns (each column top to bottom)
    ///
    /// Fails if there are no columns, the columns differ in length, or
    /// either side exceeds [`MAX_GRID_SIDE`].
    pub fn from_columns(columns: Vec<Vec<SymbolIndex>>) -> SgResult<Self> {
        let rows = columns.first().map(Vec::len).unwrap_or(0);
        if rows == 0 {
            return Err(SgError::InvalidGrid("grid has no cells".into()));
        }
        if columns.len() > MAX_GRID_SIDE || rows > MAX_GRID_SIDE {
            return Err(SgError::InvalidGrid(format!(
                "{}×{} exceeds {} per side",
                columns.len(),
                rows,
                MAX_GRID_SIDE
            )));
        }
        if let Some((col, bad)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(SgError::InvalidGrid(format!(
                "column {} has {} rows, expected {}",
                col,
                bad.len(),
                rows
            )));
        }
        Ok(Self { columns })
    }

    /// Build from rows (each row left to right)
    pub fn from_rows(rows: &[&[SymbolIndex]]) -> SgResult<Self> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return Err(SgError::InvalidGrid("rows differ in length".into()));
        }
        let columns = (0..width)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect();
        Self::from_columns(columns)
    }

    /// Number of columns (reels)
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows per column
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Symbol at (col, row)
    pub fn get(&self, col: usize, row: usize) -> Option<SymbolIndex> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    /// One reel, top to bottom
    pub fn column(&self, col: usize) -> Option<&[SymbolIndex]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    /// All reels
    pub fn columns(&self) -> &[Vec<SymbolIndex>] {
        &self.columns
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> Vec<SymbolIndex> {
        self.columns.iter().filter_map(|c| c.get(row).copied()).collect()
    }

    /// Check dimensions against a grid shape and indices against a palette size
    pub fn validate(&self, shape: GridSpec, symbol_count: usize) -> SgResult<()> {
        if self.column_count() != shape.reels as usize || self.row_count() != shape.rows as usize {
            return Err(SgError::InvalidGrid(format!(
                "expected {}×{}, got {}×{}",
                shape.reels,
                shape.rows,
                self.column_count(),
                self.row_count()
            )));
        }
        for (col, column) in self.columns.iter().enumerate() {
            for (row, &symbol) in column.iter().enumerate() {
                if symbol as usize >= symbol_count {
                    return Err(SgError::InvalidGrid(format!(
                        "symbol {} at ({}, {}) outside palette of {}",
                        symbol, col, row, symbol_count
                    )));
                }
            }
        }
        Ok(())
    }
}
