//! Output contracts from the engine.
//!
//! Frames carry the display state of counters that changed this tick; events
//! carry state-machine edges. Adapters apply frames to the host and forward
//! events.

use serde::{Deserialize, Serialize};

use crate::ids::CounterId;
use crate::state::{AnimationState, Transition};

/// Display state of one counter after this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterFrame {
    pub counter: CounterId,
    pub state: AnimationState,
    pub value: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CounterEvent {
    Started { counter: CounterId },
    Finished { counter: CounterId, value: f64 },
    Reset { counter: CounterId },
    /// A command referenced a counter that does not exist.
    Error { message: String },
}

impl CounterEvent {
    pub(crate) fn from_transition(counter: CounterId, t: Transition, value: f64) -> Self {
        match t {
            Transition::Started => CounterEvent::Started { counter },
            Transition::Finished => CounterEvent::Finished { counter, value },
            Transition::Reset => CounterEvent::Reset { counter },
        }
    }
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub frames: Vec<CounterFrame>,
    #[serde(default)]
    pub events: Vec<CounterEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_frame(&mut self, frame: CounterFrame) {
        self.frames.push(frame);
    }

    #[inline]
    pub fn push_event(&mut self, event: CounterEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.events.is_empty()
    }

    pub fn frame(&self, counter: CounterId) -> Option<&CounterFrame> {
        self.frames.iter().find(|f| f.counter == counter)
    }
}
