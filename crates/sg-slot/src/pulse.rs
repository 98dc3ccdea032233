//! Win highlight pulse
//!
//! Winning cells breathe with `scale = 1 + amplitude * sin(2π * phase)` until
//! the next spin starts.

use std::f64::consts::TAU;

use crate::grid::WinningPosition;
use crate::surface::ReelSurface;
use crate::timing::ReelTiming;

#[derive(Debug, Clone, Default)]
pub struct WinPulse {
    positions: Vec<WinningPosition>,
    phase: f64,
}

impl WinPulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn positions(&self) -> &[WinningPosition] {
        &self.positions
    }

    /// Start pulsing a set of cells from phase zero
    pub fn start(&mut self, positions: &[WinningPosition]) {
        self.positions = positions.to_vec();
        self.phase = 0.0;
    }

    /// Current scale for the pulsing cells
    pub fn scale(&self, timing: &ReelTiming) -> f32 {
        1.0 + timing.pulse_amplitude * (TAU * self.phase).sin() as f32
    }

    /// Advance and redraw the pulsing cells
    pub fn update(&mut self, delta_ms: f64, timing: &ReelTiming, surface: &mut dyn ReelSurface) {
        if !self.is_active() {
            return;
        }
        self.phase = (self.phase + delta_ms * timing.pulse_rate_per_ms).fract();
        let scale = self.scale(timing);
        for pos in &self.positions {
            surface.set_cell_scale(pos.col as usize, pos.row as usize, scale);
        }
    }

    /// Stop pulsing and restore the cells to normal size
    pub fn clear(&mut self, surface: &mut dyn ReelSurface) {
        for pos in self.positions.drain(..) {
            surface.set_cell_scale(pos.col as usize, pos.row as usize, 1.0);
        }
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolIndex;
    use approx::assert_abs_diff_eq;

    #[derive(Default)]
    struct Scales(Vec<(usize, usize, f32)>);

    impl ReelSurface for Scales {
        fn set_cell(&mut self, _col: usize, _row: usize, _symbol: SymbolIndex) {}
        fn set_column_offset(&mut self, _col: usize, _offset: f32) {}
        fn show_spin_strip(&mut self, _col: usize, _strip: &[SymbolIndex]) {}
        fn set_cell_scale(&mut self, col: usize, row: usize, scale: f32) {
            self.0.push((col, row, scale));
        }
    }

    #[test]
    fn test_inactive_pulse_draws_nothing() {
        let timing = ReelTiming::normal();
        let mut pulse = WinPulse::new();
        let mut surface = Scales::default();

        pulse.update(16.0, &timing, &mut surface);
        assert!(surface.0.is_empty());
    }

    #[test]
    fn test_quarter_period_peaks() {
        let timing = ReelTiming::normal();
        let mut pulse = WinPulse::new();
        let mut surface = Scales::default();

        pulse.start(&[WinningPosition::new(0, 1), WinningPosition::new(1, 1)]);
        // 0.25 of a cycle at 0.003 per ms
        pulse.update(250.0 / 3.0, &timing, &mut surface);

        assert_eq!(surface.0.len(), 2);
        assert_abs_diff_eq!(surface.0[0].2, 1.1, epsilon = 1e-4);
        assert_eq!((surface.0[1].0, surface.0[1].1), (1, 1));
    }

    #[test]
    fn test_scale_stays_in_band() {
        let timing = ReelTiming::normal();
        let mut pulse = WinPulse::new();
        let mut surface = Scales::default();

        pulse.start(&[WinningPosition::new(2, 0)]);
        for _ in 0..500 {
            pulse.update(16.7, &timing, &mut surface);
        }
        assert!(surface.0.iter().all(|&(_, _, s)| (0.9 - 1e-4..=1.1 + 1e-4).contains(&s)));
    }

    #[test]
    fn test_clear_restores_scale() {
        let timing = ReelTiming::normal();
        let mut pulse = WinPulse::new();
        let mut surface = Scales::default();

        pulse.start(&[WinningPosition::new(0, 0), WinningPosition::new(1, 0)]);
        pulse.update(40.0, &timing, &mut surface);
        surface.0.clear();

        pulse.clear(&mut surface);
        assert!(!pulse.is_active());
        assert_eq!(surface.0, vec![(0, 0, 1.0), (1, 0, 1.0)]);
    }
}
