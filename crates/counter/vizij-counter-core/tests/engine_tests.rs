use vizij_counter_core::{
    AnimationState, Config, CounterCommand, CounterConfig, CounterError, CounterEvent, CounterId,
    Easing, Engine, Inputs,
};

fn cfg(start: f64, end: f64, duration_ms: f64) -> CounterConfig {
    let mut c = CounterConfig::new(start, end);
    c.duration_ms = duration_ms;
    c
}

#[test]
fn auto_started_counter_reports_started_then_finished() {
    let mut eng = Engine::new(Config::default());
    let id = eng.create_counter(&cfg(0.0, 99.0, 1000.0)).unwrap();

    let out = eng.update(0.0, Inputs::default());
    assert_eq!(out.events, vec![CounterEvent::Started { counter: id }]);
    assert_eq!(out.frame(id).unwrap().text, "0");

    let out = eng.update(500.0, Inputs::default());
    assert!(out.events.is_empty());
    assert_eq!(out.frame(id).unwrap().state, AnimationState::Running);

    let out = eng.update(600.0, Inputs::default());
    assert_eq!(
        out.events,
        vec![CounterEvent::Finished {
            counter: id,
            value: 99.0
        }]
    );
    let frame = out.frame(id).unwrap();
    assert_eq!(frame.state, AnimationState::Finished);
    assert_eq!(frame.text, "99");

    // nothing changes once finished
    let out = eng.update(16.0, Inputs::default());
    assert!(out.is_empty());
}

#[test]
fn counters_are_isolated() {
    let mut eng = Engine::default();
    let fast = eng.create_counter(&cfg(0.0, 10.0, 100.0)).unwrap();
    let slow = eng.create_counter(&cfg(0.0, 10.0, 1000.0)).unwrap();
    eng.update(100.0, Inputs::default());
    assert_eq!(eng.counter(fast).unwrap().state(), AnimationState::Finished);
    assert_eq!(eng.counter(slow).unwrap().state(), AnimationState::Running);

    eng.update(
        0.0,
        Inputs::with(vec![CounterCommand::SetTrigger {
            counter: fast,
            trigger: false,
        }]),
    );
    assert_eq!(eng.counter(fast).unwrap().state(), AnimationState::Idle);
    assert!((eng.counter(slow).unwrap().value() - 1.0).abs() < 1e-9);
}

#[test]
fn zero_duration_jumps_straight_to_end() {
    let mut eng = Engine::default();
    let id = eng.create_counter(&cfg(0.0, 1234.0, 0.0)).unwrap();
    let out = eng.update(0.0, Inputs::default());
    assert_eq!(out.events.len(), 2);
    assert_eq!(out.frame(id).unwrap().text, "1,234");
    assert_eq!(out.frame(id).unwrap().state, AnimationState::Finished);
}

#[test]
fn restart_command_runs_again_from_start() {
    let mut eng = Engine::default();
    let id = eng.create_counter(&cfg(10.0, 20.0, 100.0)).unwrap();
    eng.update(200.0, Inputs::default());
    let out = eng.update(
        0.0,
        Inputs::with(vec![CounterCommand::Restart { counter: id }]),
    );
    assert_eq!(
        out.events,
        vec![
            CounterEvent::Reset { counter: id },
            CounterEvent::Started { counter: id }
        ]
    );
    assert_eq!(out.frame(id).unwrap().value, 10.0);
}

#[test]
fn set_target_reruns_a_finished_counter() {
    let mut eng = Engine::default();
    let id = eng.create_counter(&cfg(0.0, 100.0, 100.0)).unwrap();
    eng.update(100.0, Inputs::default());
    eng.update(
        50.0,
        Inputs::with(vec![CounterCommand::SetTarget {
            counter: id,
            end: 200.0,
        }]),
    );
    let c = eng.counter(id).unwrap();
    assert_eq!(c.state(), AnimationState::Running);
    assert!((c.value() - 100.0).abs() < 1e-9);
    eng.update(50.0, Inputs::default());
    assert_eq!(eng.counter(id).unwrap().value(), 200.0);
}

#[test]
fn unknown_counter_commands_surface_as_error_events() {
    let mut eng = Engine::default();
    let out = eng.update(
        16.0,
        Inputs::with(vec![CounterCommand::Restart {
            counter: CounterId(42),
        }]),
    );
    assert!(matches!(out.events[0], CounterEvent::Error { .. }));
    assert_eq!(
        eng.view(CounterId(42)).unwrap_err(),
        CounterError::UnknownCounter { id: 42 }
    );
}

#[test]
fn removed_counters_stop_emitting() {
    let mut eng = Engine::default();
    let a = eng.create_counter(&cfg(0.0, 10.0, 1000.0)).unwrap();
    let b = eng.create_counter(&cfg(0.0, 10.0, 1000.0)).unwrap();
    eng.remove_counter(a).unwrap();
    assert!(eng.remove_counter(a).is_err());
    let out = eng.update(16.0, Inputs::default());
    assert!(out.frame(a).is_none());
    assert!(out.frame(b).is_some());
    assert_eq!(eng.len(), 1);
    // ids are not reused
    let c = eng.create_counter(&cfg(0.0, 1.0, 1.0)).unwrap();
    assert_ne!(c, a);
}

#[test]
fn custom_easing_through_engine() {
    let mut eng = Engine::default();
    let id = eng
        .create_counter_with_easing(
            &cfg(0.0, 100.0, 1000.0),
            Easing::custom(|t: f64| if t < 0.5 { 0.0 } else { 1.0 }),
        )
        .unwrap();
    eng.update(400.0, Inputs::default());
    assert_eq!(eng.counter(id).unwrap().value(), 0.0);
    eng.update(200.0, Inputs::default());
    assert_eq!(eng.counter(id).unwrap().value(), 100.0);
    assert_eq!(eng.counter(id).unwrap().state(), AnimationState::Running);
}

#[test]
fn frames_are_capped_per_tick() {
    let mut eng = Engine::new(Config {
        max_frames_per_tick: 2,
        ..Config::default()
    });
    for i in 0..5 {
        eng.create_counter(&cfg(0.0, 100.0 + i as f64, 1000.0))
            .unwrap();
    }
    let out = eng.update(16.0, Inputs::default());
    assert_eq!(out.frames.len(), 2);
}

#[test]
fn invalid_config_is_rejected_at_creation() {
    let mut eng = Engine::default();
    let mut bad = cfg(0.0, 1.0, 1000.0);
    bad.step = Some(-5.0);
    assert!(matches!(
        eng.create_counter(&bad),
        Err(CounterError::InvalidConfig { field: "step", .. })
    ));
    assert!(eng.is_empty());
}
