// Gesture-driven carousel controller.
//
// Presents one card at a time from a cyclic deck and converts pointer
// drags, wheel ticks, and momentum decay into index transitions. The
// controller is pure: the web layer feeds it pointer samples and calls
// `settle_frame` once per animation frame, rendering whatever offset it
// publishes. At most one transition is in flight at any time; the phase
// enum makes dragging-while-animating unrepresentable.

use super::constants::*;

/// Last observed pointer sample, kept only to derive instantaneous velocity.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureSample {
    pub y: f32,
    pub timestamp_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Animating,
}

/// Outcome of one settle-frame evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettleStep {
    /// Momentum still decaying; render the stack at this offset.
    Tracking { offset: f32 },
    /// Transition committed or snapped back; offset is zero and the
    /// controller is idle again. `changed` is false on a snap back.
    Settled { index: usize, changed: bool },
    /// No animation in flight (also returned while a drag is active).
    Idle,
}

pub struct CarouselController {
    card_count: usize,
    current_index: usize,
    drag_offset: f32,
    velocity: f32,
    phase: Phase,
    start_y: f32,
    last_sample: GestureSample,
}

impl CarouselController {
    /// `card_count` must be at least 1; the deck constructor guarantees it.
    pub fn new(card_count: usize) -> Self {
        debug_assert!(card_count >= 1);
        Self {
            card_count,
            current_index: 0,
            drag_offset: 0.0,
            velocity: 0.0,
            phase: Phase::Idle,
            start_y: 0.0,
            last_sample: GestureSample::default(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Begin a drag. Cancels any in-flight settle animation; the frame loop
    /// sees the phase change and stops stepping it.
    pub fn on_drag_start(&mut self, y: f32, timestamp_ms: f64) {
        self.phase = Phase::Dragging;
        self.velocity = 0.0;
        self.start_y = y;
        self.last_sample = GestureSample { y, timestamp_ms };
    }

    /// Track the finger 1:1 and sample instantaneous velocity, normalized to
    /// px per 60 Hz frame. No-op unless a drag is active.
    pub fn on_drag_move(&mut self, y: f32, timestamp_ms: f64) {
        if self.phase != Phase::Dragging {
            return;
        }
        let dt = timestamp_ms - self.last_sample.timestamp_ms;
        if dt > 0.0 {
            self.velocity =
                (y - self.last_sample.y) / dt as f32 * FRAME_NORMALIZATION_MS;
        }
        self.drag_offset = y - self.start_y;
        self.last_sample = GestureSample { y, timestamp_ms };
    }

    /// Release the drag and hand off to the settle routine. Always enters
    /// the animating phase, even at zero velocity, so the settle step runs
    /// at least one evaluation. No-op unless a drag is active.
    pub fn on_drag_end(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.phase = Phase::Animating;
        self.velocity *= RELEASE_VELOCITY_GAIN;
        self.begin_settle();
    }

    fn begin_settle(&mut self) {
        self.velocity *= SETTLE_VELOCITY_DAMPING;
    }

    /// Run one frame of the momentum settle. `viewport_h` is the current
    /// viewport height in pixels, re-read by the caller each frame so the
    /// thresholds track resizes.
    ///
    /// Exit tests run in priority order: the commit boundary (half the
    /// viewport) guarantees a transition completes under high residual
    /// velocity, and the decay cutoff distinguishes an intended flip from a
    /// twitch once motion has died down.
    pub fn settle_frame(&mut self, viewport_h: f32) -> SettleStep {
        if self.phase != Phase::Animating {
            return SettleStep::Idle;
        }

        self.velocity *= FRICTION_PER_FRAME;
        self.drag_offset += self.velocity;

        let commit = viewport_h * COMMIT_THRESHOLD_FRAC;
        if self.drag_offset.abs() > commit {
            // Positive offset means the card was dragged downward, revealing
            // the previous card; negative reveals the next.
            if self.drag_offset > 0.0 {
                self.retreat();
            } else {
                self.advance();
            }
            return self.finish(true);
        }

        if self.velocity.abs() < MIN_SETTLE_VELOCITY {
            let snap = viewport_h * SNAP_THRESHOLD_FRAC;
            let changed = if self.drag_offset > snap {
                self.retreat();
                true
            } else if self.drag_offset < -snap {
                self.advance();
                true
            } else {
                false
            };
            return self.finish(changed);
        }

        SettleStep::Tracking {
            offset: self.drag_offset,
        }
    }

    /// Discrete index step from a wheel tick. Ignored while a drag or settle
    /// animation is in progress. Returns true when the index changed so the
    /// caller can play the settle-bounce visual.
    pub fn on_wheel_tick(&mut self, delta_y: f32) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if delta_y > 0.0 {
            self.advance();
        } else if delta_y < 0.0 {
            self.retreat();
        } else {
            return false;
        }
        true
    }

    fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.card_count;
    }

    fn retreat(&mut self) {
        self.current_index =
            (self.current_index + self.card_count - 1) % self.card_count;
    }

    fn finish(&mut self, changed: bool) -> SettleStep {
        self.drag_offset = 0.0;
        self.velocity = 0.0;
        self.phase = Phase::Idle;
        SettleStep::Settled {
            index: self.current_index,
            changed,
        }
    }
}
