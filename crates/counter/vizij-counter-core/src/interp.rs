//! Interpolation: elapsed time → normalized progress → eased value.

use crate::easing::Easing;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Timeline of one counter run.
#[derive(Clone, Debug)]
pub struct AnimationSpec {
    pub start: f64,
    pub end: f64,
    /// Run length in milliseconds. Non-positive means "jump straight to end".
    pub duration_ms: f64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn new(start: f64, end: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_ms,
            easing,
        }
    }

    #[inline]
    pub fn is_instant(&self) -> bool {
        self.duration_ms.is_nan() || self.duration_ms <= 0.0
    }

    /// Normalized time fraction in [0, 1] for `elapsed_ms`.
    #[inline]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.is_instant() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value at `elapsed_ms`. The endpoints are returned exactly so that
    /// curves with rounding noise still start at `start` and land on `end`.
    pub fn interpolate(&self, elapsed_ms: f64) -> f64 {
        let t = self.progress(elapsed_ms);
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        lerp(self.start, self.end, self.easing.apply(t))
    }

    #[inline]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.is_instant() || elapsed_ms >= self.duration_ms
    }
}
