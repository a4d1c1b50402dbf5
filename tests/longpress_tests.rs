// Host-side tests for the long-press repeat state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod longpress {
        include!("../src/core/longpress.rs");
    }
}

use crate::core::longpress::*;

/// Poll once per millisecond over [from, to] and count fired repeats.
fn poll_range(m: &mut LongPressRepeat, from: u64, to: u64) -> usize {
    (from..=to).filter(|t| m.poll(*t as f64)).count()
}

#[test]
fn release_just_before_threshold_yields_no_repeats() {
    let mut m = LongPressRepeat::new();
    m.on_press(0.0);
    assert_eq!(poll_range(&mut m, 1, 799), 0);
    m.on_release();
    assert_eq!(m.phase(), PressPhase::Idle);
    // nothing fires after release either
    assert_eq!(poll_range(&mut m, 800, 5000), 0);
}

#[test]
fn holding_to_the_threshold_begins_the_repeat_cycle() {
    let mut m = LongPressRepeat::new();
    m.on_press(0.0);
    assert!(!m.poll(799.0));
    assert_eq!(m.phase(), PressPhase::Pressed);
    assert!(!m.poll(800.0), "entering the cycle does not itself speak");
    assert_eq!(m.phase(), PressPhase::Repeating);
}

#[test]
fn release_shortly_after_first_repeat_yields_exactly_one() {
    // Threshold (800) + one interval (2000) + buffer: exactly one repeat
    // beyond the utterance spoken on press.
    let mut m = LongPressRepeat::new();
    m.on_press(0.0);
    assert_eq!(poll_range(&mut m, 1, 2801), 1);
    m.on_release();
    assert_eq!(poll_range(&mut m, 2802, 10_000), 0);
}

#[test]
fn repeats_continue_at_the_interval_until_release() {
    let mut m = LongPressRepeat::new();
    m.on_press(0.0);
    // repeats at 2800, 4800, 6800
    assert_eq!(poll_range(&mut m, 1, 7000), 3);
}

#[test]
fn repeat_fires_even_with_coarse_polling() {
    // Frame-loop cadence: ~16 ms between polls.
    let mut m = LongPressRepeat::new();
    m.on_press(0.0);
    let fired = (0..=300).filter(|i| m.poll(*i as f64 * 16.0)).count();
    // 300 frames = 4800 ms: repeats due at 2800 and 4800
    assert_eq!(fired, 2);
}

#[test]
fn new_press_after_release_starts_fresh() {
    let mut m = LongPressRepeat::new();
    m.on_press(0.0);
    assert_eq!(poll_range(&mut m, 1, 2801), 1);
    m.on_release();
    m.on_press(10_000.0);
    // old schedule is gone; next repeat is relative to the new press
    assert_eq!(poll_range(&mut m, 10_001, 12_799), 0);
    assert_eq!(poll_range(&mut m, 12_800, 12_801), 1);
}
