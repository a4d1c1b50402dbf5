// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}
mod web_constants {
    include!("../src/constants.rs");
}

use core_constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_constants_are_within_reasonable_bounds() {
    assert!(FRAME_NORMALIZATION_MS > 0.0);
    assert!(FRICTION_PER_FRAME > 0.0 && FRICTION_PER_FRAME < 1.0);
    assert!(MIN_SETTLE_VELOCITY > 0.0);

    // The snap decision threshold sits strictly inside the commit boundary.
    assert!(SNAP_THRESHOLD_FRAC > 0.0);
    assert!(SNAP_THRESHOLD_FRAC < COMMIT_THRESHOLD_FRAC);
    assert!(COMMIT_THRESHOLD_FRAC <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn release_gain_and_settle_damping_cancel_out() {
    // Tuned as a pair applied at different points; their product is 1 but
    // they must stay separate constants.
    assert!((RELEASE_VELOCITY_GAIN * SETTLE_VELOCITY_DAMPING - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn long_press_timing_is_ordered() {
    assert!(LONG_PRESS_THRESHOLD_MS > 0.0);
    assert!(LONG_PRESS_REPEAT_MS > LONG_PRESS_THRESHOLD_MS);
}

#[test]
fn palette_has_seven_distinct_entries() {
    assert_eq!(CARD_PALETTE.len(), 7);
    for (i, a) in CARD_PALETTE.iter().enumerate() {
        for b in CARD_PALETTE.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn voice_mappings_are_audible() {
    for (pitch, rate) in [
        (VOICE_PITCH_NEUTRAL, VOICE_RATE_NEUTRAL),
        (VOICE_PITCH_BOY, VOICE_RATE_BOY),
        (VOICE_PITCH_GIRL, VOICE_RATE_GIRL),
    ] {
        assert!(pitch > 0.0 && pitch <= 2.0);
        assert!(rate > 0.0 && rate <= 2.0);
    }
    assert!(!YES_TEXT.is_empty());
    assert!(!NO_TEXT.is_empty());
}
