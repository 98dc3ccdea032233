//! Easing Curves
//!
//! Interpolation shapes for reel settle motion.

use serde::{Deserialize, Serialize};

/// Easing curve for a single motion segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// Constant rate: y = t
    Linear,
    /// Fast start, slow end: y = 1 - (1 - t)^power
    EaseOut { power: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::Linear
    }
}

impl Easing {
    /// Evaluate curve at position t (0.0 - 1.0)
    ///
    /// Returns value in range 0.0 - 1.0
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseOut { power } => 1.0 - (1.0 - t).powf(*power),
        }
    }

    /// Interpolate between `from` and `to` at position t
    #[inline]
    pub fn interpolate(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.evaluate(t)
    }
}

/// Normalized progress of a segment that started at `start_ms` and lasts
/// `duration_ms`, clamped to 0.0 - 1.0
///
/// A zero-length segment is always complete.
#[inline]
pub fn segment_progress(now_ms: f64, start_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0) as f32
}
