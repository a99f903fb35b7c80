//! gen-podcast configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// Defaults tuned for the Hebrew narration voice
const DEFAULT_VOICE_ID: &str = "nGHEi2LLCNB42mOBggON";
const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
const DEFAULT_SCRIPT_MARKER: &str = "## סקריפט";
const DEFAULT_STABILITY: f32 = 0.6;
const DEFAULT_SIMILARITY_BOOST: f32 = 0.85;
const DEFAULT_STYLE: f32 = 0.2;

/// Name of the environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastConfig {
    /// ElevenLabs API key; the ELEVENLABS_API_KEY env var takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Voice to synthesize with
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Synthesis model
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Heading that separates document preamble from the script body
    #[serde(default = "default_script_marker")]
    pub script_marker: String,

    /// Delivery consistency (0.0-1.0)
    #[serde(default = "default_stability")]
    pub stability: f32,

    /// Voice similarity (0.0-1.0)
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,

    /// Style exaggeration (0.0-1.0)
    #[serde(default = "default_style")]
    pub style: f32,

    /// Boost speaker clarity
    #[serde(default = "default_speaker_boost")]
    pub use_speaker_boost: bool,
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_script_marker() -> String {
    DEFAULT_SCRIPT_MARKER.to_string()
}

fn default_stability() -> f32 {
    DEFAULT_STABILITY
}

fn default_similarity_boost() -> f32 {
    DEFAULT_SIMILARITY_BOOST
}

fn default_style() -> f32 {
    DEFAULT_STYLE
}

fn default_speaker_boost() -> bool {
    true
}

impl Default for PodcastConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            script_marker: default_script_marker(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            style: default_style(),
            use_speaker_boost: default_speaker_boost(),
        }
    }
}

impl PodcastConfig {
    /// Get the config file path: ~/.config/cli-programs/gen-podcast.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("gen-podcast.toml"))
    }

    /// Load config from file, returning defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: PodcastConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the API key: environment variable first, then config file.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        self.api_key.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "API key not found. Set {} or add api_key to {}",
                API_KEY_ENV,
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".to_string())
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PodcastConfig::default();
        assert_eq!(config.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(config.model_id, "eleven_multilingual_v2");
        assert_eq!(config.stability, 0.6);
        assert_eq!(config.similarity_boost, 0.85);
        assert_eq!(config.style, 0.2);
        assert!(config.use_speaker_boost);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_path() {
        let path = PodcastConfig::config_path();
        assert!(path.is_ok());
        assert!(path.unwrap().ends_with("cli-programs/gen-podcast.toml"));
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
api_key = "sk_test"
voice_id = "custom-voice"
stability = 0.4
use_speaker_boost = false
"#;
        let config: PodcastConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk_test"));
        assert_eq!(config.voice_id, "custom-voice");
        assert_eq!(config.stability, 0.4);
        assert!(!config.use_speaker_boost);
        // Unspecified fields keep their defaults
        assert_eq!(config.model_id, "eleven_multilingual_v2");
        assert_eq!(config.similarity_boost, 0.85);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: PodcastConfig = toml::from_str("").unwrap();
        assert_eq!(config.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(config.script_marker, "## סקריפט");
    }
}
