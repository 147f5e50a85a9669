//! Baking API: sample a counter's full run at a fixed frame rate.

use serde::{Deserialize, Serialize};

use crate::config::CounterConfig;
use crate::counter::Counter;
use crate::error::{CounterError, Result};

/// Upper bound on frames produced by one bake.
pub const MAX_BAKED_FRAMES: usize = 1_000_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f64,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self { frame_rate: 60.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedFrame {
    pub time_ms: f64,
    pub value: f64,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakedCounter {
    pub frame_rate: f64,
    pub duration_ms: f64,
    pub frames: Vec<BakedFrame>,
}

/// Bake one run of `cfg` from `start` to `end`, regardless of its trigger.
/// The first frame is at t=0 and the last one is the finished end value.
pub fn bake_counter(cfg: &CounterConfig, baking: &BakingConfig) -> Result<BakedCounter> {
    if !baking.frame_rate.is_finite() || baking.frame_rate <= 0.0 {
        return Err(CounterError::invalid(
            "frame_rate",
            format!("must be a positive number, got {}", baking.frame_rate),
        ));
    }
    cfg.validate()?;
    let mut run_cfg = cfg.clone();
    run_cfg.trigger = false;
    let mut counter = Counter::new(&run_cfg)?;

    let duration_ms = cfg.duration_ms.max(0.0);
    let dt_ms = 1000.0 / baking.frame_rate;
    let frame_count = (duration_ms / dt_ms).ceil() + 1.0;
    if frame_count > MAX_BAKED_FRAMES as f64 {
        return Err(CounterError::invalid(
            "frame_rate",
            format!(
                "{duration_ms} ms at {} Hz needs {frame_count} frames, over the limit of {MAX_BAKED_FRAMES}",
                baking.frame_rate
            ),
        ));
    }
    let mut frames = Vec::with_capacity(frame_count as usize);

    frames.push(BakedFrame {
        time_ms: 0.0,
        value: counter.value(),
        text: counter.text().to_string(),
    });
    counter.set_trigger(true);

    let mut i = 0usize;
    while !counter.state().is_finished() {
        i += 1;
        // clamp the last frame onto the exact end instead of overshooting
        let time_ms = (i as f64 * dt_ms).min(duration_ms);
        counter.seek(time_ms);
        frames.push(BakedFrame {
            time_ms,
            value: counter.value(),
            text: counter.text().to_string(),
        });
    }
    if duration_ms == 0.0 {
        frames.push(BakedFrame {
            time_ms: 0.0,
            value: counter.value(),
            text: counter.text().to_string(),
        });
    }

    Ok(BakedCounter {
        frame_rate: baking.frame_rate,
        duration_ms,
        frames,
    })
}
