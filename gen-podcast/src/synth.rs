//! Sequential chapter synthesis.

use crate::audio::AudioChunk;
use crate::script::Chapter;
use crate::tts::{SpeechBackend, VoiceProfile};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Drives one synthesis call per chapter, in document order.
pub struct Synthesizer<'a> {
    backend: &'a dyn SpeechBackend,
    voice: VoiceProfile,
}

impl<'a> Synthesizer<'a> {
    pub fn new(backend: &'a dyn SpeechBackend, voice: VoiceProfile) -> Self {
        Self { backend, voice }
    }

    /// Synthesize every chapter and persist each payload as
    /// `<index>_<name>.mp3` under `output_dir`.
    ///
    /// Calls run strictly one at a time, in order, so the chunk list order
    /// equals the chapter order. The first failure aborts the run; chunks
    /// already written stay on disk.
    pub async fn synthesize_all(
        &self,
        chapters: &[Chapter],
        output_dir: &Path,
    ) -> Result<Vec<AudioChunk>> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let pb = ProgressBar::new(chapters.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut chunks = Vec::with_capacity(chapters.len());

        for (index, chapter) in chapters.iter().enumerate() {
            pb.set_message(format!(
                "{} ({} chars, ~{} words)",
                chapter.name,
                chapter.char_count(),
                chapter.word_count()
            ));

            let audio = self
                .backend
                .synthesize(&chapter.text, &self.voice)
                .await
                .with_context(|| format!("Synthesis failed for chapter '{}'", chapter.name))?;

            let chunk_path = output_dir.join(format!("{index:02}_{}.mp3", chapter.name));
            std::fs::write(&chunk_path, &audio)
                .with_context(|| format!("Failed to write {}", chunk_path.display()))?;

            chunks.push(AudioChunk {
                name: chapter.name.clone(),
                path: chunk_path,
                bytes: audio.len() as u64,
            });
            pb.inc(1);
        }

        pb.finish_with_message(format!("{} chunks generated", chunks.len()));

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::mock::MockSpeech;
    use crate::tts::VoiceSettings;
    use tempfile::TempDir;

    fn voice() -> VoiceProfile {
        VoiceProfile {
            voice_id: "test-voice".to_string(),
            model_id: "test-model".to_string(),
            settings: VoiceSettings::default(),
        }
    }

    fn chapters(n: usize) -> Vec<Chapter> {
        (0..n)
            .map(|i| Chapter {
                name: format!("ch{i}"),
                text: format!("chapter {i} text"),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_chunks_written_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let backend = MockSpeech::always_succeeds(b"mp3-bytes");
        let synth = Synthesizer::new(&backend, voice());

        let chunks = synth
            .synthesize_all(&chapters(3), temp_dir.path())
            .await
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(backend.call_count(), 3);
        let names: Vec<String> = chunks
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["00_ch0.mp3", "01_ch1.mp3", "02_ch2.mp3"]);
        assert_eq!(chunks[2].name, "ch2");
        for chunk in &chunks {
            assert_eq!(chunk.bytes, 9);
            assert!(chunk.path.exists());
        }
    }

    #[tokio::test]
    async fn test_failure_aborts_run_and_preserves_chunks() {
        let temp_dir = TempDir::new().unwrap();
        // Third of ten calls fails: exactly two chunk files must exist
        let backend = MockSpeech::fails_on_call(3, b"mp3-bytes");
        let synth = Synthesizer::new(&backend, voice());

        let result = synth.synthesize_all(&chapters(10), temp_dir.path()).await;

        assert!(result.is_err());
        assert_eq!(backend.call_count(), 3);

        let written: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(written.len(), 2);

        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("ch2"));
        assert!(err.contains("429"));
    }

    #[tokio::test]
    async fn test_empty_chapter_list() {
        let temp_dir = TempDir::new().unwrap();
        let backend = MockSpeech::always_succeeds(b"x");
        let synth = Synthesizer::new(&backend, voice());

        let chunks = synth
            .synthesize_all(&[], temp_dir.path())
            .await
            .unwrap();
        assert!(chunks.is_empty());
        assert_eq!(backend.call_count(), 0);
    }
}
