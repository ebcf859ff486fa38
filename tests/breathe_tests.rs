// Host-side tests for the idle breathing oscillator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod breathe {
    include!("../src/core/breathe.rs");
}

use breathe::*;

#[test]
fn breathing_starts_at_unit_scale() {
    let breathing = Breathing::default();
    assert_eq!(breathing.scale, 1.0);
}

#[test]
fn breathing_stays_near_its_band_forever() {
    // The scale may land one step past a band edge before the direction
    // flips, so the hard bound is the band widened by a single step.
    let mut breathing = Breathing::default();
    let low = BREATHE_MIN_SCALE - BREATHE_STEP - 1e-4;
    let high = BREATHE_MAX_SCALE + BREATHE_STEP + 1e-4;
    for tick in 0..10_000 {
        let scale = breathing.step();
        assert!(
            scale > low && scale < high,
            "scale {scale} escaped the band at tick {tick}"
        );
    }
}

#[test]
fn breathing_reaches_both_band_edges() {
    let mut breathing = Breathing::default();
    let mut lowest = f32::MAX;
    let mut highest = f32::MIN;
    for _ in 0..1000 {
        let scale = breathing.step();
        lowest = lowest.min(scale);
        highest = highest.max(scale);
    }
    assert!(lowest <= BREATHE_MIN_SCALE + 1e-3, "never shrank: {lowest}");
    assert!(highest >= BREATHE_MAX_SCALE - 1e-3, "never grew: {highest}");
}

#[test]
fn breathing_oscillates_rather_than_drifting() {
    // A full swing is at most 20 steps, so 1000 ticks must contain many
    // reversals of direction.
    let mut breathing = Breathing::default();
    let mut previous = breathing.scale;
    let mut rising = true;
    let mut reversals = 0;
    for _ in 0..1000 {
        let scale = breathing.step();
        let now_rising = scale > previous;
        if now_rising != rising {
            reversals += 1;
            rising = now_rising;
        }
        previous = scale;
    }
    assert!(reversals >= 40, "only {reversals} reversals in 1000 ticks");
}

#[test]
fn breathing_first_steps_grow_from_rest() {
    let mut breathing = Breathing::default();
    let first = breathing.step();
    let second = breathing.step();
    assert!(first > 1.0);
    assert!(second > first);
}
