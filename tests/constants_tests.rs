// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod breathe {
    include!("../src/core/breathe.rs");
}
mod ripple {
    include!("../src/core/ripple.rs");
}

use breathe::*;
use constants::*;
use ripple::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_thresholds_are_fractions_of_visibility() {
    assert!(SECTION_REVEAL_THRESHOLD > 0.0 && SECTION_REVEAL_THRESHOLD <= 1.0);
    assert!(HERO_VISIBLE_THRESHOLD > 0.0 && HERO_VISIBLE_THRESHOLD <= 1.0);
    assert!(STAT_VISIBLE_THRESHOLD > 0.0 && STAT_VISIBLE_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(NAVBAR_SOLID_SCROLL_PX > 0.0);
    assert!(HERO_INTRO_DELAY_MS > 0);
    assert!(FORM_SEND_DELAY_MS > 0);
    assert!(NOTIFY_SLIDE_IN_DELAY_MS > 0);
    assert!(NOTIFY_LINGER_MS > 0);
    assert!(NOTIFY_SLIDE_OUT_MS > 0);
    assert!(BREATHE_TICK_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn notification_lingers_longer_than_it_slides() {
    // The toast must settle on screen before the removal timeline starts.
    assert!(NOTIFY_LINGER_MS > NOTIFY_SLIDE_IN_DELAY_MS + NOTIFY_SLIDE_OUT_MS);
}

#[test]
fn navbar_backdrops_share_a_base_color() {
    // Scrolling only deepens the alpha; the color itself never changes.
    assert!(NAVBAR_SOLID_BG.starts_with("rgba(10, 10, 10"));
    assert!(NAVBAR_TOP_BG.starts_with("rgba(10, 10, 10"));
    assert_ne!(NAVBAR_SOLID_BG, NAVBAR_TOP_BG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_drifts_against_the_scroll() {
    assert!(PARALLAX_RATE < 0.0);
}

#[test]
fn hover_transforms_return_to_identity() {
    assert_ne!(PROJECT_CARD_LIFT, PROJECT_CARD_REST);
    assert_ne!(SKILL_ITEM_LIFT, SKILL_ITEM_REST);
    assert!(PROJECT_CARD_REST.contains("scale(1)"));
    assert!(SKILL_ITEM_REST.contains("scale(1)"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_growth_divides_its_final_radius_evenly() {
    assert!(RIPPLE_STEP > 0.0);
    assert!(RIPPLE_MAX_RADIUS > RIPPLE_STEP);
    assert_eq!((RIPPLE_MAX_RADIUS / RIPPLE_STEP).fract(), 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breathing_band_brackets_the_resting_scale() {
    assert!(BREATHE_MIN_SCALE < 1.0 && 1.0 < BREATHE_MAX_SCALE);
    assert!(BREATHE_STEP > 0.0);
    assert!(BREATHE_STEP < BREATHE_MAX_SCALE - BREATHE_MIN_SCALE);
    // Symmetric swing around rest.
    let below = 1.0 - BREATHE_MIN_SCALE;
    let above = BREATHE_MAX_SCALE - 1.0;
    assert!((below - above).abs() < 1e-6);
}
