//! Engine: owns a set of isolated counters and steps them on host ticks.
//!
//! Methods:
//! - new, create_counter, create_counter_with_easing, remove_counter
//! - update (commands → advance → frames/events), view

use log::{debug, warn};

use crate::config::{Config, CounterConfig};
use crate::counter::Counter;
use crate::easing::Easing;
use crate::error::{CounterError, Result};
use crate::ids::{CounterId, IdAllocator};
use crate::inputs::{CounterCommand, Inputs};
use crate::outputs::{CounterEvent, CounterFrame, Outputs};
use crate::view::CounterView;

#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    counters: Vec<(CounterId, Counter)>,
    outputs: Outputs,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        Self {
            counters: Vec::with_capacity(cfg.counters_capacity),
            cfg,
            ids: IdAllocator::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Create a counter. With `trigger` (the default) it starts running
    /// immediately; its first frame and `Started` event arrive on the next update.
    pub fn create_counter(&mut self, cfg: &CounterConfig) -> Result<CounterId> {
        let counter = Counter::new(cfg)?;
        Ok(self.insert(counter))
    }

    /// Create a counter driven by a custom easing function.
    pub fn create_counter_with_easing(
        &mut self,
        cfg: &CounterConfig,
        easing: Easing,
    ) -> Result<CounterId> {
        let counter = Counter::with_easing(cfg, easing)?;
        Ok(self.insert(counter))
    }

    fn insert(&mut self, counter: Counter) -> CounterId {
        let id = self.ids.alloc_counter();
        debug!("counter {id} created in state {:?}", counter.state());
        self.counters.push((id, counter));
        id
    }

    pub fn remove_counter(&mut self, id: CounterId) -> Result<()> {
        let idx = self
            .counters
            .iter()
            .position(|(cid, _)| *cid == id)
            .ok_or(CounterError::UnknownCounter { id: id.0 })?;
        self.counters.remove(idx);
        debug!("counter {id} removed");
        Ok(())
    }

    pub fn counter(&self, id: CounterId) -> Option<&Counter> {
        self.counters
            .iter()
            .find_map(|(cid, c)| if *cid == id { Some(c) } else { None })
    }

    pub fn counter_mut(&mut self, id: CounterId) -> Option<&mut Counter> {
        self.counters
            .iter_mut()
            .find_map(|(cid, c)| if *cid == id { Some(c) } else { None })
    }

    pub fn counter_ids(&self) -> impl Iterator<Item = CounterId> + '_ {
        self.counters.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn view(&self, id: CounterId) -> Result<CounterView> {
        self.counter(id)
            .map(Counter::view)
            .ok_or(CounterError::UnknownCounter { id: id.0 })
    }

    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            let id = cmd.counter();
            let Some(counter) = self.counter_mut(id) else {
                warn!("command for unknown counter {id} ignored");
                self.outputs.push_event(CounterEvent::Error {
                    message: format!("unknown counter id {id}"),
                });
                continue;
            };
            match cmd {
                CounterCommand::SetTrigger { trigger, .. } => counter.set_trigger(trigger),
                CounterCommand::Restart { .. } => counter.restart(),
                CounterCommand::SetTarget { end, .. } => counter.set_end(end),
            }
        }
    }

    /// Step every counter by `dt_ms` milliseconds after applying `inputs`.
    pub fn update(&mut self, dt_ms: f64, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Commands, in order (last trigger wins)
        self.apply_inputs(inputs);

        // 2) Advance running timelines and collect frames/events
        for (id, counter) in &mut self.counters {
            counter.tick(dt_ms);
            let end = counter.spec().end;
            for t in counter.drain_transitions() {
                debug!("counter {id}: {t:?}");
                self.outputs
                    .push_event(CounterEvent::from_transition(*id, t, end));
            }
            if counter.take_dirty() {
                self.outputs.push_frame(CounterFrame {
                    counter: *id,
                    state: counter.state(),
                    value: counter.value(),
                    text: counter.text().to_string(),
                });
            }
        }

        // 3) Bound per-tick output
        if self.outputs.frames.len() > self.cfg.max_frames_per_tick {
            warn!(
                "dropping {} frames over max_frames_per_tick={}",
                self.outputs.frames.len() - self.cfg.max_frames_per_tick,
                self.cfg.max_frames_per_tick
            );
            self.outputs.frames.truncate(self.cfg.max_frames_per_tick);
        }
        if self.outputs.events.len() > self.cfg.max_events_per_tick {
            warn!(
                "dropping {} events over max_events_per_tick={}",
                self.outputs.events.len() - self.cfg.max_events_per_tick,
                self.cfg.max_events_per_tick
            );
            self.outputs.events.truncate(self.cfg.max_events_per_tick);
        }

        &self.outputs
    }
}
