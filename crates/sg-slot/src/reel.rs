//! Per-column reel animation state machine
//!
//! ```text
//!  Spinning ──(elapsed ≥ duration | fast-forward)──► BouncingOut
//!     ▲                                                  │ t = 1
//!     │ next spin                                        ▼
//!   Done ◄──────────────(t = 1)──────────────────── BouncingBack
//! ```
//!
//! While spinning the column scrolls a random strip, wrapping every cell
//! spacing. On settle the final symbols are written and the column snaps
//! below rest, eases out to just above rest, then returns linearly to rest.

use serde::{Deserialize, Serialize};

use sg_core::segment_progress;

use crate::surface::ReelSurface;
use crate::symbols::SymbolIndex;
use crate::timing::ReelTiming;

/// Animation phase of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReelPhase {
    Spinning,
    BouncingOut,
    BouncingBack,
    Done,
}

/// Transition reported by [`ReelAnimation::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelTransition {
    /// Final symbols are now shown (Spinning → BouncingOut)
    Settled,
    /// Bounce-out finished (BouncingOut → BouncingBack)
    BounceReturned,
    /// Column is at rest (BouncingBack → Done)
    Finished,
}

/// Mutable animation state of one column for the duration of a spin
#[derive(Debug, Clone)]
pub struct ReelAnimation {
    col: usize,
    phase: ReelPhase,
    /// Spin start (ms on the machine clock)
    started_ms: f64,
    /// Start of the current bounce segment
    phase_started_ms: f64,
    /// How long this column spins before settling
    duration_ms: f64,
    /// Scroll speed, design units per ms
    speed: f32,
    /// Final symbols, top to bottom
    result: Vec<SymbolIndex>,
    offset: f32,
    bounce_from: f32,
    bounce_to: f32,
}

impl ReelAnimation {
    /// Start a column spinning at `now_ms`
    pub fn start(
        col: usize,
        result: Vec<SymbolIndex>,
        speed: f32,
        duration_ms: f64,
        now_ms: f64,
    ) -> Self {
        Self {
            col,
            phase: ReelPhase::Spinning,
            started_ms: now_ms,
            phase_started_ms: now_ms,
            duration_ms,
            speed,
            result,
            offset: 0.0,
            bounce_from: 0.0,
            bounce_to: 0.0,
        }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn phase(&self) -> ReelPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == ReelPhase::Spinning
    }

    pub fn is_done(&self) -> bool {
        self.phase == ReelPhase::Done
    }

    /// Current vertical offset relative to rest
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Final symbols this column lands on
    pub fn result(&self) -> &[SymbolIndex] {
        &self.result
    }

    /// Advance one tick
    ///
    /// `now_ms` is the machine clock after this tick and `delta_ms` the time
    /// since the previous tick. A raised `fast_forward` flag counts as an
    /// expired spin duration.
    pub fn update(
        &mut self,
        now_ms: f64,
        delta_ms: f64,
        fast_forward: bool,
        timing: &ReelTiming,
        surface: &mut dyn ReelSurface,
    ) -> Option<ReelTransition> {
        match self.phase {
            ReelPhase::Spinning => {
                if fast_forward || now_ms - self.started_ms >= self.duration_ms {
                    self.settle(now_ms, timing, surface);
                    return Some(ReelTransition::Settled);
                }

                self.offset += self.speed * delta_ms as f32;
                if !(0.0..=timing.cell_spacing).contains(&self.offset) {
                    self.offset = self.offset.rem_euclid(timing.cell_spacing);
                }
                surface.set_column_offset(self.col, self.offset);
                None
            }
            ReelPhase::BouncingOut => {
                let t = segment_progress(now_ms, self.phase_started_ms, timing.bounce_out_ms);
                self.offset = timing
                    .bounce_out_easing
                    .interpolate(self.bounce_from, self.bounce_to, t);
                surface.set_column_offset(self.col, self.offset);

                if t >= 1.0 {
                    self.phase = ReelPhase::BouncingBack;
                    self.phase_started_ms = now_ms;
                    self.bounce_from = self.bounce_to;
                    self.bounce_to = 0.0;
                    return Some(ReelTransition::BounceReturned);
                }
                None
            }
            ReelPhase::BouncingBack => {
                let t = segment_progress(now_ms, self.phase_started_ms, timing.bounce_back_ms);
                self.offset = timing
                    .bounce_back_easing
                    .interpolate(self.bounce_from, self.bounce_to, t);

                if t >= 1.0 {
                    self.offset = self.bounce_to;
                    surface.set_column_offset(self.col, self.offset);
                    self.phase = ReelPhase::Done;
                    return Some(ReelTransition::Finished);
                }
                surface.set_column_offset(self.col, self.offset);
                None
            }
            ReelPhase::Done => None,
        }
    }

    fn settle(&mut self, now_ms: f64, timing: &ReelTiming, surface: &mut dyn ReelSurface) {
        for (row, &symbol) in self.result.iter().enumerate() {
            surface.set_cell(self.col, row, symbol);
        }

        self.offset = timing.bounce_overshoot;
        surface.set_column_offset(self.col, self.offset);

        self.phase = ReelPhase::BouncingOut;
        self.phase_started_ms = now_ms;
        self.bounce_from = timing.bounce_overshoot;
        self.bounce_to = -timing.bounce_back;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(usize, usize, SymbolIndex)>,
        offsets: Vec<(usize, f32)>,
    }

    impl ReelSurface for Recorder {
        fn set_cell(&mut self, col: usize, row: usize, symbol: SymbolIndex) {
            self.cells.push((col, row, symbol));
        }

        fn set_column_offset(&mut self, col: usize, offset: f32) {
            self.offsets.push((col, offset));
        }

        fn show_spin_strip(&mut self, _col: usize, _strip: &[SymbolIndex]) {}

        fn set_cell_scale(&mut self, _col: usize, _row: usize, _scale: f32) {}
    }

    fn run_to_done(reel: &mut ReelAnimation, timing: &ReelTiming, step: f64) -> (u32, Recorder) {
        let mut surface = Recorder::default();
        let mut now = 0.0;
        let mut ticks = 0;
        while !reel.is_done() {
            now += step;
            ticks += 1;
            reel.update(now, step, false, timing, &mut surface);
            assert!(ticks < 100_000, "reel never finished");
        }
        (ticks, surface)
    }

    #[test]
    fn test_spin_scrolls_and_wraps() {
        let timing = ReelTiming::normal();
        let mut reel = ReelAnimation::start(0, vec![1, 2, 3], 3.0, 1000.0, 0.0);
        let mut surface = Recorder::default();

        let mut now = 0.0;
        for _ in 0..200 {
            now += 16.0;
            reel.update(now, 16.0, false, &timing, &mut surface);
            if !reel.is_spinning() {
                break;
            }
            assert!(reel.offset() >= 0.0 && reel.offset() <= timing.cell_spacing);
        }
        // 48 units per tick over ~62 ticks covers several cells
        assert!(surface.offsets.len() > 50);
        assert!(surface.cells.iter().all(|&(_, row, _)| row < 3));
    }

    #[test]
    fn test_wrap_stays_in_one_cell_for_any_speed() {
        let timing = ReelTiming::normal();
        for speed in [-2.9, 0.0, 2.9, 500.0] {
            let mut reel = ReelAnimation::start(0, vec![0, 1, 2], speed, 5000.0, 0.0);
            let mut surface = Recorder::default();
            let mut now = 0.0;
            for _ in 0..60 {
                now += 16.0;
                reel.update(now, 16.0, false, &timing, &mut surface);
                let offset = reel.offset();
                assert!(
                    (0.0..=timing.cell_spacing).contains(&offset),
                    "speed {}: offset {} left the cell",
                    speed,
                    offset
                );
            }
        }
    }

    #[test]
    fn test_settle_writes_result_and_overshoots() {
        let timing = ReelTiming::normal();
        let mut reel = ReelAnimation::start(2, vec![3, 0, 1], 2.9, 100.0, 0.0);
        let mut surface = Recorder::default();

        assert_eq!(reel.update(50.0, 50.0, false, &timing, &mut surface), None);
        let transition = reel.update(100.0, 50.0, false, &timing, &mut surface);

        assert_eq!(transition, Some(ReelTransition::Settled));
        assert_eq!(reel.phase(), ReelPhase::BouncingOut);
        assert_eq!(surface.cells, vec![(2, 0, 3), (2, 1, 0), (2, 2, 1)]);
        assert_abs_diff_eq!(reel.offset(), timing.bounce_overshoot);
    }

    #[test]
    fn test_bounce_segments() {
        let timing = ReelTiming::normal();
        let mut reel = ReelAnimation::start(0, vec![0, 0, 0], 2.9, 0.0, 0.0);
        let mut surface = Recorder::default();

        reel.update(0.0, 0.0, false, &timing, &mut surface);
        assert_eq!(reel.phase(), ReelPhase::BouncingOut);

        // Halfway through bounce-out: ease-out is past the linear midpoint
        reel.update(60.0, 60.0, false, &timing, &mut surface);
        let linear_mid = (timing.bounce_overshoot - timing.bounce_back) / 2.0;
        assert!(reel.offset() < linear_mid);

        let transition = reel.update(120.0, 60.0, false, &timing, &mut surface);
        assert_eq!(transition, Some(ReelTransition::BounceReturned));
        assert_abs_diff_eq!(reel.offset(), -timing.bounce_back, epsilon = 1e-4);

        reel.update(175.0, 55.0, false, &timing, &mut surface);
        assert_abs_diff_eq!(reel.offset(), -timing.bounce_back / 2.0, epsilon = 1e-3);

        let transition = reel.update(230.0, 55.0, false, &timing, &mut surface);
        assert_eq!(transition, Some(ReelTransition::Finished));
        assert!(reel.is_done());
        assert_eq!(reel.offset(), 0.0);
        assert_eq!(surface.offsets.last(), Some(&(0, 0.0)));
    }

    #[test]
    fn test_fast_forward_settles_immediately() {
        let timing = ReelTiming::normal();
        let mut reel = ReelAnimation::start(1, vec![1, 1, 1], 2.9, 5000.0, 0.0);
        let mut surface = Recorder::default();

        let transition = reel.update(16.0, 16.0, true, &timing, &mut surface);
        assert_eq!(transition, Some(ReelTransition::Settled));
    }

    #[test]
    fn test_fast_forward_ignored_while_bouncing() {
        let timing = ReelTiming::normal();
        let mut plain = ReelAnimation::start(0, vec![1, 2, 3], 2.9, 0.0, 0.0);
        let mut forwarded = plain.clone();
        let mut surface = Recorder::default();

        let mut now = 0.0;
        while !plain.is_done() {
            plain.update(now, 10.0, false, &timing, &mut surface);
            forwarded.update(now, 10.0, true, &timing, &mut surface);
            assert_eq!(plain.phase(), forwarded.phase());
            assert_eq!(plain.offset(), forwarded.offset());
            now += 10.0;
        }
        assert!(forwarded.is_done());
    }

    #[test]
    fn test_done_within_duration_plus_bounce() {
        let timing = ReelTiming::normal();
        for duration in [0.0, 1.0, 1100.0, 1543.7, 1980.0] {
            let mut reel = ReelAnimation::start(0, vec![0, 1, 2], 2.9, duration, 0.0);
            let (ticks, _) = run_to_done(&mut reel, &timing, 1.0);
            // One extra tick: a zero-length spin still settles on the first tick
            let bound = (duration + timing.settle_duration()).ceil() as u32 + 1;
            assert!(ticks <= bound, "duration {}: {} ticks > {}", duration, ticks, bound);
        }
    }

    #[test]
    fn test_done_is_terminal() {
        let timing = ReelTiming::normal();
        let mut reel = ReelAnimation::start(0, vec![0, 1, 2], 2.9, 10.0, 0.0);
        let (_, mut surface) = run_to_done(&mut reel, &timing, 16.0);
        let writes = surface.offsets.len();

        assert_eq!(reel.update(10_000.0, 16.0, true, &timing, &mut surface), None);
        assert_eq!(surface.offsets.len(), writes);
    }
}
