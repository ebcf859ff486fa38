// Host-side tests for the background particle field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn scattered_particles_stay_in_their_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for spec in scatter(500, &mut rng) {
        assert!(spec.size_px >= 1.0 && spec.size_px < 5.0, "size {}", spec.size_px);
        assert!(spec.left_pct >= 0.0 && spec.left_pct < 100.0);
        assert!(spec.top_pct >= 0.0 && spec.top_pct < 100.0);
        assert!(spec.opacity >= 0.2 && spec.opacity < 0.8);
        assert!(spec.drift_secs >= 15.0 && spec.drift_secs < 35.0);
        assert!(spec.delay_secs <= 0.0 && spec.delay_secs > -20.0);
        assert!(PARTICLE_PALETTE.contains(&spec.color));
    }
}

#[test]
fn palette_weighting_splits_at_the_documented_rolls() {
    assert_eq!(pick_color(0.0), PARTICLE_PALETTE[0]);
    assert_eq!(pick_color(0.399), PARTICLE_PALETTE[0]);
    assert_eq!(pick_color(0.4), PARTICLE_PALETTE[1]);
    assert_eq!(pick_color(0.799), PARTICLE_PALETTE[1]);
    assert_eq!(pick_color(0.8), PARTICLE_PALETTE[2]);
    assert_eq!(pick_color(0.999), PARTICLE_PALETTE[2]);
}

#[test]
fn scatter_is_deterministic_per_seed() {
    let mut first = StdRng::seed_from_u64(7);
    let mut second = StdRng::seed_from_u64(7);
    let mut other = StdRng::seed_from_u64(8);
    assert_eq!(scatter(40, &mut first), scatter(40, &mut second));
    assert_ne!(scatter(40, &mut StdRng::seed_from_u64(7)), scatter(40, &mut other));
}

#[test]
fn inline_style_carries_every_rolled_channel() {
    let spec = ParticleSpec {
        size_px: 2.0,
        color: "#667eea",
        left_pct: 10.0,
        top_pct: 20.0,
        opacity: 0.5,
        drift_secs: 25.0,
        delay_secs: -5.0,
    };
    let style = spec.inline_style();
    assert!(style.contains("width: 2px"));
    assert!(style.contains("height: 2px"));
    assert!(style.contains("radial-gradient(circle, #667eeaCC 0%, #667eea66 100%)"));
    assert!(style.contains("left: 10%"));
    assert!(style.contains("top: 20%"));
    assert!(style.contains("opacity: 0.5"));
    assert!(style.contains("animation: float 25s linear infinite"));
    assert!(style.contains("animation-delay: -5s"));
    assert!(style.contains("box-shadow: 0 0 4px #667eea44"));
}

#[test]
fn float_keyframes_rise_through_the_viewport() {
    let css = float_keyframes(42.0);
    assert!(css.contains("@keyframes float"));
    assert!(css.contains("translateY(100vh)"));
    assert!(css.contains("translateY(-100px)"));
    assert!(css.contains("translateX(42px)"));
    assert!(css.contains("opacity: 0"));
    assert!(css.contains("opacity: 1"));
}
