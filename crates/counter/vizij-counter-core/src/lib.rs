//! Vizij Counter Core (engine-agnostic)
//!
//! Animated numeric counters: a start → end run over a duration, shaped by an
//! easing curve, optionally stepped with jitter, formatted per locale, and
//! presented through an Idle/Running/Finished state machine. The engine owns
//! no clock; hosts drive it with elapsed-time ticks.

pub mod baking;
pub mod config;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod error;
pub mod format;
pub mod ids;
pub mod inputs;
pub mod interp;
pub mod outputs;
pub mod state;
pub mod step;
pub mod view;

// Re-exports for consumers (adapters)
pub use baking::{bake_counter, BakedCounter, BakedFrame, BakingConfig};
pub use config::{parse_counter_config_json, Color, Config, CounterConfig, Size};
pub use counter::Counter;
pub use easing::{Easing, EasingFn, EasingName, EasingSpec};
pub use engine::Engine;
pub use error::CounterError;
pub use format::{DisplaySpec, Formatter};
pub use ids::CounterId;
pub use inputs::{CounterCommand, Inputs};
pub use interp::AnimationSpec;
pub use outputs::{CounterEvent, CounterFrame, Outputs};
pub use state::{AnimationState, Transition};
pub use step::StepSpec;
pub use view::{CounterView, Surface, SurfaceRole};
