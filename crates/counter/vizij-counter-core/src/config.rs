//! Engine and per-counter configuration.
//!
//! `CounterConfig` mirrors the counter widget's prop surface; JSON keys are
//! camelCase (`randomJitter`, `jitterSeed`) and every optional prop has a default.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::easing::EasingSpec;
use crate::error::{CounterError, Result};
use crate::format::{DisplaySpec, MAX_DECIMALS};
use crate::interp::AnimationSpec;
use crate::step::StepSpec;

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Engine sizing knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity hint for the counter table.
    pub counters_capacity: usize,
    /// Maximum frames emitted per tick; excess frames are dropped.
    pub max_frames_per_tick: usize,
    /// Maximum events retained per tick.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counters_capacity: 16,
            max_frames_per_tick: 1024,
            max_events_per_tick: 1024,
        }
    }
}

/// Visual scale class. Passed through to hosts, no effect on values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    pub fn class_name(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }
}

/// Visual color class. Passed through to hosts, no effect on values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Red,
    Orange,
    Gray,
}

impl Color {
    pub fn class_name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Gray => "gray",
        }
    }
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_MS
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_trigger() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    pub start: f64,
    pub end: f64,
    /// Animation length in milliseconds.
    #[serde(rename = "duration", default = "default_duration")]
    pub duration_ms: f64,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub easing: EasingSpec,
    /// Start/reset control. `true` auto-starts on creation.
    #[serde(default = "default_trigger")]
    pub trigger: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default)]
    pub random_jitter: bool,
    /// Seed for the jitter RNG; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter_seed: Option<u64>,
}

impl CounterConfig {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration_ms: DEFAULT_DURATION_MS,
            size: Size::default(),
            color: Color::default(),
            locale: default_locale(),
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            easing: EasingSpec::default(),
            trigger: true,
            step: None,
            random_jitter: false,
            jitter_seed: None,
        }
    }

    /// Reject values the engine cannot run with. Zero or negative durations
    /// are accepted (instant jump to `end`).
    pub fn validate(&self) -> Result<()> {
        self.validate_values()?;
        self.easing.resolve()?;
        Ok(())
    }

    /// Everything [`validate`](Self::validate) checks except the easing, for
    /// counters whose easing is supplied in code.
    pub fn validate_values(&self) -> Result<()> {
        if !self.start.is_finite() {
            return Err(CounterError::invalid("start", "must be a finite number"));
        }
        if !self.end.is_finite() {
            return Err(CounterError::invalid("end", "must be a finite number"));
        }
        if !self.duration_ms.is_finite() {
            return Err(CounterError::invalid(
                "duration",
                format!("must be a finite number, got {}", self.duration_ms),
            ));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(CounterError::invalid(
                "decimals",
                format!("must be at most {MAX_DECIMALS}, got {}", self.decimals),
            ));
        }
        if let Some(step) = self.step {
            if !step.is_finite() || step <= 0.0 {
                return Err(CounterError::invalid(
                    "step",
                    format!("must be a positive number, got {step}"),
                ));
            }
        }
        Ok(())
    }

    /// Timeline for this counter using the configured (serializable) easing.
    pub fn animation_spec(&self) -> Result<AnimationSpec> {
        Ok(AnimationSpec::new(
            self.start,
            self.end,
            self.duration_ms,
            self.easing.resolve()?,
        ))
    }

    pub fn display_spec(&self) -> DisplaySpec {
        DisplaySpec {
            locale: self.locale.clone(),
            decimals: self.decimals,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }

    /// Stepping only exists with a `step`; jitter alone has nothing to scale.
    pub fn step_spec(&self) -> Option<StepSpec> {
        match self.step {
            Some(step) => Some(StepSpec::new(step, self.random_jitter)),
            None => {
                if self.random_jitter {
                    debug!("randomJitter set without step; jitter ignored");
                }
                None
            }
        }
    }
}

/// Parse a counter config from JSON (camelCase prop names) and validate it.
pub fn parse_counter_config_json(json: &str) -> Result<CounterConfig> {
    let cfg: CounterConfig = serde_json::from_str(json).map_err(|e| CounterError::Parse {
        reason: e.to_string(),
    })?;
    cfg.validate()?;
    Ok(cfg)
}
