//! Easing selection: named quadratic curves, CSS cubic-bezier, or a
//! caller-supplied function.

pub mod functions;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CounterError;

/// Capability interface for custom easing. No range contract is enforced;
/// outputs outside [0, 1] simply overshoot or undershoot.
pub trait EasingFn {
    fn ease(&self, t: f64) -> f64;
}

impl<F> EasingFn for F
where
    F: Fn(f64) -> f64,
{
    fn ease(&self, t: f64) -> f64 {
        self(t)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingName {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingName {
    pub const ALL: [EasingName; 4] = [
        EasingName::Linear,
        EasingName::EaseIn,
        EasingName::EaseOut,
        EasingName::EaseInOut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EasingName::Linear => "linear",
            EasingName::EaseIn => "easeIn",
            EasingName::EaseOut => "easeOut",
            EasingName::EaseInOut => "easeInOut",
        }
    }

    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            EasingName::Linear => functions::linear(t),
            EasingName::EaseIn => functions::ease_in(t),
            EasingName::EaseOut => functions::ease_out(t),
            EasingName::EaseInOut => functions::ease_in_out(t),
        }
    }
}

impl FromStr for EasingName {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| {
                CounterError::invalid(
                    "easing",
                    format!("unknown easing '{s}' (expected linear, easeIn, easeOut or easeInOut)"),
                )
            })
    }
}

impl fmt::Display for EasingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved easing for one counter.
#[derive(Clone)]
pub enum Easing {
    Named(EasingName),
    /// CSS-style control points (x1, y1, x2, y2).
    CubicBezier([f64; 4]),
    Custom(Rc<dyn EasingFn>),
}

impl Easing {
    pub fn custom(f: impl EasingFn + 'static) -> Self {
        Easing::Custom(Rc::new(f))
    }

    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Named(name) => name.apply(t),
            Easing::CubicBezier(ctrl) => functions::bezier_ease(t, *ctrl),
            Easing::Custom(f) => f.ease(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Named(EasingName::Linear)
    }
}

impl From<EasingName> for Easing {
    fn from(name: EasingName) -> Self {
        Easing::Named(name)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Easing::CubicBezier(ctrl) => f.debug_tuple("CubicBezier").field(ctrl).finish(),
            Easing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Serialized easing as it appears in counter configs: a curve name or
/// four bezier control points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingSpec {
    Named(String),
    CubicBezier([f64; 4]),
}

impl Default for EasingSpec {
    fn default() -> Self {
        EasingSpec::Named(EasingName::Linear.as_str().to_string())
    }
}

impl EasingSpec {
    /// Resolve into a runnable [`Easing`], failing fast on unknown names.
    pub fn resolve(&self) -> Result<Easing, CounterError> {
        match self {
            EasingSpec::Named(name) => name.parse::<EasingName>().map(Easing::Named),
            EasingSpec::CubicBezier(ctrl) => {
                if ctrl.iter().any(|c| !c.is_finite()) {
                    return Err(CounterError::invalid(
                        "easing",
                        "cubic-bezier control points must be finite",
                    ));
                }
                if !(0.0..=1.0).contains(&ctrl[0]) || !(0.0..=1.0).contains(&ctrl[2]) {
                    return Err(CounterError::invalid(
                        "easing",
                        "cubic-bezier x control points must lie in [0, 1]",
                    ));
                }
                Ok(Easing::CubicBezier(*ctrl))
            }
        }
    }
}

impl From<EasingName> for EasingSpec {
    fn from(name: EasingName) -> Self {
        EasingSpec::Named(name.as_str().to_string())
    }
}
