//! One counter widget: timeline, stepping, formatting and presentation state.
//!
//! The counter owns no clock. Hosts call [`Counter::tick`] with elapsed
//! milliseconds and read back value, text and view.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Color, CounterConfig, Size};
use crate::easing::Easing;
use crate::error::Result;
use crate::format::Formatter;
use crate::interp::AnimationSpec;
use crate::state::{AnimationState, StateMachine, Transition};
use crate::step::StepSpec;
use crate::view::{build_view, CounterView};

#[derive(Debug)]
pub struct Counter {
    spec: AnimationSpec,
    formatter: Formatter,
    step: Option<StepSpec>,
    size: Size,
    color: Color,
    machine: StateMachine,
    elapsed_ms: f64,
    value: f64,
    text: String,
    rng: StdRng,
    transitions: Vec<Transition>,
    dirty: bool,
}

impl Counter {
    /// Build a counter from config, resolving its named/bezier easing.
    pub fn new(cfg: &CounterConfig) -> Result<Self> {
        cfg.validate()?;
        let easing = cfg.easing.resolve()?;
        Ok(Self::build(cfg, easing))
    }

    /// Build a counter with a caller-supplied easing, overriding `cfg.easing`.
    pub fn with_easing(cfg: &CounterConfig, easing: Easing) -> Result<Self> {
        cfg.validate_values()?;
        Ok(Self::build(cfg, easing))
    }

    fn build(cfg: &CounterConfig, easing: Easing) -> Self {
        let formatter = Formatter::new(&cfg.display_spec());
        let text = formatter.format(cfg.start);
        let rng = match cfg.jitter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut counter = Self {
            spec: AnimationSpec::new(cfg.start, cfg.end, cfg.duration_ms, easing),
            formatter,
            step: cfg.step_spec(),
            size: cfg.size,
            color: cfg.color,
            machine: StateMachine::new(false),
            elapsed_ms: 0.0,
            value: cfg.start,
            text,
            rng,
            transitions: Vec::new(),
            dirty: true,
        };
        if cfg.trigger {
            counter.set_trigger(true);
        }
        counter
    }

    pub fn state(&self) -> AnimationState {
        self.machine.state()
    }

    pub fn trigger(&self) -> bool {
        self.machine.trigger()
    }

    /// Currently displayed numeric value (stepped/jittered while running).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Currently displayed text, prefix and suffix included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn step(&self) -> Option<StepSpec> {
        self.step
    }

    /// Apply the trigger input. A false→true edge restarts from `start`, a
    /// true→false edge halts and shows `start` again.
    pub fn set_trigger(&mut self, trigger: bool) {
        match self.machine.set_trigger(trigger) {
            Some(Transition::Started) => {
                self.transitions.push(Transition::Started);
                self.rewind();
                if self.spec.is_instant() {
                    self.finish();
                }
            }
            Some(Transition::Reset) => {
                self.transitions.push(Transition::Reset);
                self.rewind();
            }
            Some(Transition::Finished) | None => {}
        }
    }

    /// Reset and start again in one step.
    pub fn restart(&mut self) {
        self.set_trigger(false);
        self.set_trigger(true);
    }

    /// Retarget the end value. A running counter rewinds to `start`; a
    /// finished one runs again towards the new end.
    pub fn set_end(&mut self, end: f64) {
        if !end.is_finite() || end == self.spec.end {
            return;
        }
        self.spec.end = end;
        match self.state() {
            AnimationState::Idle => {}
            AnimationState::Running => {
                self.rewind();
                if self.spec.is_instant() {
                    self.finish();
                }
            }
            AnimationState::Finished => self.restart(),
        }
    }

    /// Advance the timeline by `dt_ms`. No-op unless running.
    pub fn tick(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.seek(self.elapsed_ms + dt_ms);
        } else {
            self.seek(self.elapsed_ms);
        }
    }

    /// Jump the running timeline to `elapsed_ms`, finishing when it reaches
    /// the duration. No-op unless running.
    pub fn seek(&mut self, elapsed_ms: f64) {
        if !self.state().is_running() {
            return;
        }
        if elapsed_ms.is_finite() {
            self.elapsed_ms = elapsed_ms.max(0.0);
        }
        if self.spec.is_complete(self.elapsed_ms) {
            self.finish();
            return;
        }
        let raw = self.spec.interpolate(self.elapsed_ms);
        let shown = match self.step {
            Some(step) => step.quantize(raw, &mut self.rng),
            None => raw,
        };
        self.show(shown);
    }

    /// Render surfaces for the current state.
    pub fn view(&self) -> CounterView {
        build_view(self.state(), self.text.clone(), self.size, self.color)
    }

    /// Transitions recorded since the last drain, oldest first.
    pub fn drain_transitions(&mut self) -> std::vec::Drain<'_, Transition> {
        self.transitions.drain(..)
    }

    /// True once after any change to the displayed text or state.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn rewind(&mut self) {
        self.elapsed_ms = 0.0;
        self.dirty = true;
        self.show(self.spec.start);
    }

    fn finish(&mut self) {
        self.elapsed_ms = self.spec.duration_ms.max(0.0);
        if let Some(t) = self.machine.complete() {
            self.transitions.push(t);
            self.dirty = true;
        }
        self.show(self.spec.end);
    }

    fn show(&mut self, value: f64) {
        self.value = value;
        let text = self.formatter.format(value);
        if text != self.text {
            self.text = text;
            self.dirty = true;
        }
    }
}
