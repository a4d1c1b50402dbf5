//! Speech output over the browser's SpeechSynthesis API.
//!
//! Process-wide service: init once from the page, `speak` many times.
//! Each utterance cancels whatever is still speaking, so long-press repeats
//! never overlap audibly.

use crate::constants::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoicePreference {
    Neutral,
    Boy,
    Girl,
}

impl VoicePreference {
    /// Parse the `data-voice` attribute written by the settings dashboard.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("boy") => Self::Boy,
            Some("girl") => Self::Girl,
            _ => Self::Neutral,
        }
    }

    fn pitch_rate(self) -> (f32, f32) {
        match self {
            Self::Neutral => (VOICE_PITCH_NEUTRAL, VOICE_RATE_NEUTRAL),
            Self::Boy => (VOICE_PITCH_BOY, VOICE_RATE_BOY),
            Self::Girl => (VOICE_PITCH_GIRL, VOICE_RATE_GIRL),
        }
    }
}

pub struct SpeechService {
    synth: web::SpeechSynthesis,
    preference: VoicePreference,
}

impl SpeechService {
    pub fn init(preference: VoicePreference) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let synth = window
            .speech_synthesis()
            .map_err(|e| anyhow::anyhow!("speech synthesis unavailable: {:?}", e))?;
        log::info!("[speech] ready, preference {:?}", preference);
        Ok(Self { synth, preference })
    }

    /// Fire-and-forget. Cancels any in-flight utterance first.
    pub fn speak(&self, text: &str) {
        self.synth.cancel();
        let utterance = match web::SpeechSynthesisUtterance::new_with_text(text) {
            Ok(u) => u,
            Err(e) => {
                log::error!("[speech] utterance error: {:?}", e);
                return;
            }
        };
        let (pitch, rate) = self.preference.pitch_rate();
        utterance.set_pitch(pitch);
        utterance.set_rate(rate);
        if let Some(voice) = self.pick_voice() {
            utterance.set_voice(Some(&voice));
        }
        self.synth.speak(&utterance);
    }

    /// Speak an empty utterance from a user gesture so the engine is
    /// unlocked for later, programmatic utterances.
    pub fn unlock(&self) {
        if let Ok(u) = web::SpeechSynthesisUtterance::new_with_text("") {
            self.synth.speak(&u);
        }
    }

    fn pick_voice(&self) -> Option<web::SpeechSynthesisVoice> {
        let voices = self.synth.get_voices();
        for v in voices.iter() {
            let voice: web::SpeechSynthesisVoice = v.unchecked_into();
            if voice.lang().starts_with("en") {
                return Some(voice);
            }
        }
        None
    }
}
