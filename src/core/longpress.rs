// Long-press repeat state machine.
//
// Holding a speakable element past the threshold starts repeating its
// phrase at a fixed interval until release. The machine is polled from the
// frame loop instead of owning timer handles, so release and teardown
// cannot leak a recurring callback.

use super::constants::{LONG_PRESS_REPEAT_MS, LONG_PRESS_THRESHOLD_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressPhase {
    Idle,
    Pressed,
    Repeating,
}

#[derive(Clone, Copy, Debug)]
pub struct LongPressRepeat {
    phase: PressPhase,
    pressed_at_ms: f64,
    next_repeat_ms: f64,
}

impl Default for LongPressRepeat {
    fn default() -> Self {
        Self::new()
    }
}

impl LongPressRepeat {
    pub fn new() -> Self {
        Self {
            phase: PressPhase::Idle,
            pressed_at_ms: 0.0,
            next_repeat_ms: 0.0,
        }
    }

    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    /// Record the press. The caller speaks the phrase immediately; the
    /// machine only governs the repeats.
    pub fn on_press(&mut self, now_ms: f64) {
        self.phase = PressPhase::Pressed;
        self.pressed_at_ms = now_ms;
    }

    /// Releasing in any state stops the cycle; releasing before the
    /// threshold means the press-time utterance was the only one.
    pub fn on_release(&mut self) {
        self.phase = PressPhase::Idle;
    }

    /// Poll from the frame loop. Returns true exactly when one repeat
    /// utterance is due. Holding for exactly the threshold begins the
    /// cycle; the first repeat lands one interval after the threshold.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.phase {
            PressPhase::Idle => false,
            PressPhase::Pressed => {
                if now_ms - self.pressed_at_ms >= LONG_PRESS_THRESHOLD_MS {
                    self.phase = PressPhase::Repeating;
                    self.next_repeat_ms =
                        self.pressed_at_ms + LONG_PRESS_THRESHOLD_MS + LONG_PRESS_REPEAT_MS;
                }
                false
            }
            PressPhase::Repeating => {
                if now_ms >= self.next_repeat_ms {
                    self.next_repeat_ms += LONG_PRESS_REPEAT_MS;
                    true
                } else {
                    false
                }
            }
        }
    }
}
