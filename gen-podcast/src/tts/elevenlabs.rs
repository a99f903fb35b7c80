//! ElevenLabs text-to-speech backend.
//!
//! Direct HTTP implementation over the `text-to-speech` endpoint. One
//! blocking request per chapter; retry and rate-limit handling are the
//! caller's problem (and this tool's policy is to abort instead).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{SpeechBackend, TtsError, VoiceProfile, VoiceSettings};

const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

pub struct ElevenLabsClient {
    api_key: String,
    client: Client,
}

impl ElevenLabsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    fn synthesis_url(&self, voice_id: &str) -> String {
        format!("{ELEVENLABS_API_URL}/{voice_id}")
    }
}

// ElevenLabs API request/response types

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl SpeechBackend for ElevenLabsClient {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, TtsError> {
        let request = SynthesisRequest {
            text,
            model_id: &voice.model_id,
            voice_settings: &voice.settings,
        };

        let response = self
            .client
            .post(self.synthesis_url(&voice.voice_id))
            .header("xi-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The API wraps errors in {"detail": {"message": ...}}; fall back
            // to the raw body when it doesn't.
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.detail.message)
                .unwrap_or(body);
            return Err(TtsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response.bytes().await?;
        Ok(audio.to_vec())
    }

    fn name(&self) -> &'static str {
        "ElevenLabs"
    }
}
