//! Presentation state machine: Idle → Running → Finished, reset by the trigger.
//!
//! Total over {trigger, completion}: every input yields a state, repeated
//! inputs are no-ops.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Finished,
}

impl AnimationState {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, AnimationState::Running)
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, AnimationState::Finished)
    }
}

/// Edge produced by a state change; the counter reacts to these (rewind
/// timeline, snap to end) and the engine reports them as events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Idle → Running; timeline restarts from `start`.
    Started,
    /// Running → Finished; value pinned to `end`.
    Finished,
    /// Running/Finished → Idle; value back to `start`.
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine {
    state: AnimationState,
    trigger: bool,
}

impl StateMachine {
    /// `trigger = true` auto-starts.
    pub fn new(trigger: bool) -> Self {
        Self {
            state: if trigger {
                AnimationState::Running
            } else {
                AnimationState::Idle
            },
            trigger,
        }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn trigger(&self) -> bool {
        self.trigger
    }

    /// Apply a trigger value. Only edges (false→true, true→false) transition.
    pub fn set_trigger(&mut self, trigger: bool) -> Option<Transition> {
        if trigger == self.trigger {
            return None;
        }
        self.trigger = trigger;
        if trigger {
            self.state = AnimationState::Running;
            Some(Transition::Started)
        } else {
            let was = self.state;
            self.state = AnimationState::Idle;
            (was != AnimationState::Idle).then_some(Transition::Reset)
        }
    }

    /// Completion signal from the timeline. Ignored unless running.
    pub fn complete(&mut self) -> Option<Transition> {
        if self.state.is_running() {
            self.state = AnimationState::Finished;
            Some(Transition::Finished)
        } else {
            None
        }
    }
}
