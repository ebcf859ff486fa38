// Host-side tests for the click ripple state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod ripple {
    include!("../src/core/ripple.rs");
}

use glam::Vec2;
use ripple::*;

#[test]
fn new_ripple_starts_at_zero_radius() {
    let ripple = Ripple::new(Vec2::new(120.0, 80.0));
    assert_eq!(ripple.radius, 0.0);
    assert_eq!(ripple.origin, Vec2::new(120.0, 80.0));
    assert_eq!(ripple.phase(), RipplePhase::Growing);
}

#[test]
fn ripple_finishes_in_exactly_twenty_steps() {
    let mut ripple = Ripple::new(Vec2::ZERO);
    let mut steps = 0;
    while ripple.step() == RipplePhase::Growing {
        steps += 1;
        assert!(steps < 1000, "ripple never finished");
    }
    steps += 1; // the finishing step
    assert_eq!(steps, (RIPPLE_MAX_RADIUS / RIPPLE_STEP) as usize);
    assert_eq!(ripple.radius, RIPPLE_MAX_RADIUS);
}

#[test]
fn ripple_radius_climbs_in_fixed_increments() {
    let mut ripple = Ripple::new(Vec2::ZERO);
    let mut seen = vec![ripple.radius];
    while ripple.phase() == RipplePhase::Growing {
        ripple.step();
        seen.push(ripple.radius);
    }
    let expected: Vec<f32> = (0..=20).map(|i| i as f32 * RIPPLE_STEP).collect();
    assert_eq!(seen, expected);
}

#[test]
fn ripple_never_exceeds_final_radius() {
    let mut ripple = Ripple::new(Vec2::ZERO);
    for _ in 0..20 {
        ripple.step();
        assert!(ripple.radius <= RIPPLE_MAX_RADIUS);
    }
    assert_eq!(ripple.phase(), RipplePhase::Done);
}

#[test]
fn ripples_advance_independently() {
    let mut first = Ripple::new(Vec2::new(10.0, 10.0));
    let mut second = Ripple::new(Vec2::new(500.0, 400.0));
    for _ in 0..7 {
        first.step();
    }
    for _ in 0..3 {
        second.step();
    }
    assert_eq!(first.radius, 35.0);
    assert_eq!(second.radius, 15.0);
    assert_eq!(first.phase(), RipplePhase::Growing);
    assert_eq!(second.phase(), RipplePhase::Growing);
}
