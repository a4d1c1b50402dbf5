// Gesture and timing tuning constants shared by the core state machines.

// Velocity is expressed in pixels per reference frame (60 Hz, 16 ms).
pub const FRAME_NORMALIZATION_MS: f32 = 16.0;

// Empirical gain applied to the sampled velocity at drag release, and the
// damping applied once on entry to the settle routine. Net x1, but they act
// at different points relative to the per-frame friction; keep them separate.
pub const RELEASE_VELOCITY_GAIN: f32 = 2.0;
pub const SETTLE_VELOCITY_DAMPING: f32 = 0.5;

// Per-frame velocity decay while settling.
pub const FRICTION_PER_FRAME: f32 = 0.96;

// Below this speed (px/frame) the throw is considered decayed.
pub const MIN_SETTLE_VELOCITY: f32 = 0.3;

// Offset thresholds as fractions of the viewport height. Crossing the commit
// threshold flips the card regardless of remaining velocity; once velocity
// has decayed, the snap threshold decides flip vs. spring back.
pub const COMMIT_THRESHOLD_FRAC: f32 = 0.5;
pub const SNAP_THRESHOLD_FRAC: f32 = 0.3;

// Long-press repeat: hold past the threshold to start repeating the phrase
// at the repeat interval until release.
pub const LONG_PRESS_THRESHOLD_MS: f64 = 800.0;
pub const LONG_PRESS_REPEAT_MS: f64 = 2000.0;

// Card backgrounds cycle through this palette by deck position.
pub const CARD_PALETTE: [&str; 7] = [
    "#f94144", // red
    "#f3722c", // orange
    "#f8961e", // amber
    "#f9c74f", // yellow
    "#90be6d", // green
    "#43aa8b", // teal
    "#577590", // slate blue
];
