//! Input contracts for the engine.
//!
//! Hosts collect commands between frames and pass them into
//! `Engine::update()`. Commands apply in order before time advances, so the
//! last trigger value for a counter within one tick wins.

use serde::{Deserialize, Serialize};

use crate::ids::CounterId;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub commands: Vec<CounterCommand>,
}

impl Inputs {
    pub fn with(commands: Vec<CounterCommand>) -> Self {
        Self { commands }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CounterCommand {
    SetTrigger { counter: CounterId, trigger: bool },
    /// Reset then start again, regardless of the current trigger.
    Restart { counter: CounterId },
    SetTarget { counter: CounterId, end: f64 },
}

impl CounterCommand {
    pub fn counter(&self) -> CounterId {
        match self {
            CounterCommand::SetTrigger { counter, .. }
            | CounterCommand::Restart { counter }
            | CounterCommand::SetTarget { counter, .. } => *counter,
        }
    }
}
