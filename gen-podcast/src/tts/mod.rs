//! Speech synthesis backend trait and types.

pub mod elevenlabs;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("TTS API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("TTS request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Voice style parameters sent with every synthesis request.
///
/// Serializes to the provider's `voice_settings` JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSettings {
    /// Delivery consistency (0.0-1.0); lower is more expressive
    pub stability: f32,
    /// How closely the output tracks the voice sample (0.0-1.0)
    pub similarity_boost: f32,
    /// Style exaggeration (0.0-1.0)
    pub style: f32,
    /// Boost speaker clarity at some latency cost
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.6,
            similarity_boost: 0.85,
            style: 0.2,
            use_speaker_boost: true,
        }
    }
}

impl VoiceSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stability(mut self, stability: f32) -> Self {
        self.stability = stability.clamp(0.0, 1.0);
        self
    }

    pub fn with_similarity_boost(mut self, similarity_boost: f32) -> Self {
        self.similarity_boost = similarity_boost.clamp(0.0, 1.0);
        self
    }

    pub fn with_style(mut self, style: f32) -> Self {
        self.style = style.clamp(0.0, 1.0);
        self
    }

    pub fn with_speaker_boost(mut self, use_speaker_boost: bool) -> Self {
        self.use_speaker_boost = use_speaker_boost;
        self
    }
}

/// Which voice and model to synthesize with.
#[derive(Debug, Clone)]
pub struct VoiceProfile {
    pub voice_id: String,
    pub model_id: String,
    pub settings: VoiceSettings,
}

/// Speech synthesis backend - one synchronous call per chapter.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Synthesize text to raw audio bytes, blocking until the full payload
    /// or an error is returned.
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, TtsError>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_settings_default() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.stability, 0.6);
        assert_eq!(settings.similarity_boost, 0.85);
        assert_eq!(settings.style, 0.2);
        assert!(settings.use_speaker_boost);
    }

    #[test]
    fn test_voice_settings_clamping() {
        let settings = VoiceSettings::new()
            .with_stability(2.0)
            .with_similarity_boost(-0.5)
            .with_style(1.5);

        assert_eq!(settings.stability, 1.0);
        assert_eq!(settings.similarity_boost, 0.0);
        assert_eq!(settings.style, 1.0);
    }

    #[test]
    fn test_voice_settings_serialization() {
        let settings = VoiceSettings::default();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["stability"].as_f64().unwrap() as f32, 0.6);
        assert_eq!(json["similarity_boost"].as_f64().unwrap() as f32, 0.85);
        assert_eq!(json["use_speaker_boost"], true);
    }
}
