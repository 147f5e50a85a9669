use vizij_counter_core::{
    easing::functions, AnimationSpec, AnimationState, Counter, CounterConfig, Easing, EasingName,
};

fn every_named() -> impl Iterator<Item = Easing> {
    EasingName::ALL.into_iter().map(Easing::Named)
}

#[test]
fn predefined_easings_map_zero_and_one_to_themselves() {
    for name in EasingName::ALL {
        assert_eq!(name.apply(0.0), 0.0, "{name}(0)");
        assert_eq!(name.apply(1.0), 1.0, "{name}(1)");
    }
}

#[test]
fn predefined_easings_are_monotonic_on_unit_interval() {
    for name in EasingName::ALL {
        let mut prev = name.apply(0.0);
        for i in 1..=100 {
            let v = name.apply(i as f64 / 100.0);
            assert!(v >= prev - 1e-12, "{name} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn quadratic_curves_match_closed_forms() {
    assert!((functions::ease_in(0.5) - 0.25).abs() < 1e-12);
    assert!((functions::ease_out(0.5) - 0.75).abs() < 1e-12);
    assert!((functions::ease_in_out(0.25) - 0.125).abs() < 1e-12);
    assert!((functions::ease_in_out(0.75) - 0.875).abs() < 1e-12);
}

#[test]
fn interpolate_hits_start_and_end_for_every_easing() {
    let easings = every_named().chain([
        Easing::CubicBezier([0.25, 0.1, 0.25, 1.0]),
        Easing::custom(|t: f64| t * t * t),
    ]);
    for easing in easings {
        let spec = AnimationSpec::new(-12.5, 340.0, 1500.0, easing.clone());
        assert_eq!(spec.interpolate(0.0), -12.5, "{easing:?} at 0");
        assert_eq!(spec.interpolate(1500.0), 340.0, "{easing:?} at duration");
    }
}

#[test]
fn linear_half_way_is_fifty() {
    let spec = AnimationSpec::new(0.0, 100.0, 1000.0, EasingName::Linear.into());
    assert_eq!(spec.interpolate(500.0), 50.0);
}

#[test]
fn descending_ranges_interpolate_downwards() {
    let spec = AnimationSpec::new(100.0, 0.0, 1000.0, EasingName::EaseIn.into());
    // ease-in at t=0.5 covers a quarter of the distance
    assert!((spec.interpolate(500.0) - 75.0).abs() < 1e-9);
}

#[test]
fn custom_easing_may_overshoot() {
    let cfg = CounterConfig::new(0.0, 100.0);
    let back = Easing::custom(|t: f64| t * t * (2.7 * t - 1.7));
    let mut c = Counter::with_easing(&cfg, back).unwrap();
    c.tick(200.0);
    assert!(c.value() < 0.0, "back-ease should undershoot early, got {}", c.value());
    c.tick(10_000.0);
    assert_eq!(c.state(), AnimationState::Finished);
    assert_eq!(c.value(), 100.0);
}

#[test]
fn counter_follows_timeline_in_ticks() {
    let mut cfg = CounterConfig::new(0.0, 100.0);
    cfg.duration_ms = 1000.0;
    let mut c = Counter::new(&cfg).unwrap();
    for _ in 0..5 {
        c.tick(100.0);
    }
    assert_eq!(c.elapsed_ms(), 500.0);
    assert_eq!(c.value(), 50.0);
    assert_eq!(c.text(), "50");
    assert_eq!(c.state(), AnimationState::Running);
}
