// Web-side tuning constants.
//
// Speech and interaction values that only matter to the browser layer;
// the gesture physics live in `core::constants`.

// Pitch/rate mapping for the three voice preferences.
pub const VOICE_PITCH_NEUTRAL: f32 = 1.0;
pub const VOICE_RATE_NEUTRAL: f32 = 1.0;
pub const VOICE_PITCH_BOY: f32 = 0.7;
pub const VOICE_RATE_BOY: f32 = 0.95;
pub const VOICE_PITCH_GIRL: f32 = 1.3;
pub const VOICE_RATE_GIRL: f32 = 1.0;

// Fixed phrases for the side buttons.
pub const YES_TEXT: &str = "Yes";
pub const NO_TEXT: &str = "No";

// CSS class replayed on the current card when a transition commits.
pub const BOUNCE_CLASS: &str = "settle-bounce";
