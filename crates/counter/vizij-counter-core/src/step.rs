//! Stepped display: quantize the in-flight value to a fixed increment,
//! optionally scaled by a per-frame random jitter factor.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Jitter factor range, sampled uniformly per frame.
pub const JITTER_MIN: f64 = 0.75;
pub const JITTER_MAX: f64 = 1.25;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepSpec {
    /// Quantization granularity (> 0).
    pub step: f64,
    #[serde(default)]
    pub random_jitter: bool,
}

impl StepSpec {
    pub fn new(step: f64, random_jitter: bool) -> Self {
        Self {
            step,
            random_jitter,
        }
    }

    /// Nearest multiple of `step`, without jitter.
    #[inline]
    pub fn snap(&self, value: f64) -> f64 {
        (value / self.step).round() * self.step
    }

    /// Quantized display value for one frame. Jittered output does not
    /// converge on the end value; callers show the exact end once finished.
    pub fn quantize<R: Rng>(&self, value: f64, rng: &mut R) -> f64 {
        let snapped = self.snap(value);
        if self.random_jitter {
            snapped * rng.gen_range(JITTER_MIN..JITTER_MAX)
        } else {
            snapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snaps_to_nearest_multiple() {
        let mut rng = StdRng::seed_from_u64(1);
        let step = StepSpec::new(10.0, false);
        assert_eq!(step.quantize(47.0, &mut rng), 50.0);
        assert_eq!(step.quantize(44.9, &mut rng), 40.0);
        assert_eq!(step.quantize(-47.0, &mut rng), -50.0);
    }

    #[test]
    fn jitter_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let step = StepSpec::new(5.0, true);
        for _ in 0..1000 {
            let q = step.quantize(100.0, &mut rng);
            assert!((75.0..125.0).contains(&q), "jittered value {q} out of band");
        }
    }
}
