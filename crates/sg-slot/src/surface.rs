//! Rendering and presentation seams
//!
//! The core never touches sprites or text. It tells a [`ReelSurface`] what
//! each cell shows and where each column sits, and hands finished spins to a
//! [`SpinPresenter`].

use crate::session::Session;
use crate::spin::SpinOutcome;
use crate::symbols::SymbolIndex;

/// Visual reel grid driven by the core
///
/// Offsets are in design units relative to the column's resting position
/// (positive = below rest). Scale 1.0 is a cell's normal size.
pub trait ReelSurface {
    /// Replace the symbol shown in one visible cell
    fn set_cell(&mut self, col: usize, row: usize, symbol: SymbolIndex);

    /// Move a column container vertically
    fn set_column_offset(&mut self, col: usize, offset: f32);

    /// Show a scrolling strip while the column spins
    ///
    /// `strip[0]` sits one cell above the first visible row and the last
    /// entry one cell below the last visible row.
    fn show_spin_strip(&mut self, col: usize, strip: &[SymbolIndex]);

    /// Scale one cell (win pulse)
    fn set_cell_scale(&mut self, col: usize, row: usize, scale: f32);
}

/// Receiver of spin lifecycle notifications (balance text, win text,
/// highlight effects)
pub trait SpinPresenter {
    /// A spin was accepted and the bet debited
    fn spin_started(&mut self, _spin_id: &str, _session: &Session) {}

    /// A column settled on its final symbols
    fn reel_settled(&mut self, _col: usize, _symbols: &[SymbolIndex]) {}

    /// All columns are at rest and the outcome is final
    fn spin_completed(&mut self, outcome: &SpinOutcome, session: &Session);
}

/// Surface that draws nothing (headless simulation)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl ReelSurface for NullSurface {
    fn set_cell(&mut self, _col: usize, _row: usize, _symbol: SymbolIndex) {}

    fn set_column_offset(&mut self, _col: usize, _offset: f32) {}

    fn show_spin_strip(&mut self, _col: usize, _strip: &[SymbolIndex]) {}

    fn set_cell_scale(&mut self, _col: usize, _row: usize, _scale: f32) {}
}

/// Presenter that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl SpinPresenter for NullPresenter {
    fn spin_completed(&mut self, _outcome: &SpinOutcome, _session: &Session) {}
}
