//! Mock speech backend for testing the synthesis loop.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{SpeechBackend, TtsError, VoiceProfile};

/// A backend that returns a fixed payload, optionally failing on the Nth
/// call (1-based) to exercise the fail-fast path.
pub struct MockSpeech {
    payload: Vec<u8>,
    fail_on_call: Option<usize>,
    call_count: AtomicUsize,
}

impl MockSpeech {
    /// Always succeed, returning `payload` for every chapter.
    pub fn always_succeeds(payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            fail_on_call: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Succeed until call number `n` (1-based), which fails.
    pub fn fails_on_call(n: usize, payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            fail_on_call: Some(n),
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times synthesize() was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechBackend for MockSpeech {
    async fn synthesize(&self, _text: &str, _voice: &VoiceProfile) -> Result<Vec<u8>, TtsError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_on_call == Some(call) {
            return Err(TtsError::Api {
                status: 429,
                message: "mock quota exceeded".to_string(),
            });
        }

        Ok(self.payload.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
