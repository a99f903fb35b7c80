//! gen-podcast - Generate a narrated podcast from a markdown script using ElevenLabs TTS

mod audio;
mod config;
mod script;
mod synth;
mod tts;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::PodcastConfig;
use std::path::PathBuf;
use synth::Synthesizer;
use tts::elevenlabs::ElevenLabsClient;
use tts::{VoiceProfile, VoiceSettings};

#[derive(Parser, Debug)]
#[command(name = "gen-podcast")]
#[command(about = "Split a markdown script into chapters and narrate them with TTS", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the markdown script
    script_file: Option<PathBuf>,

    /// Directory for per-chapter chunks (default: <script-dir>/audio_chunks)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Merged output file path (default: <script-name>-full.mp3)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chapter boundary table (TOML with a [[chapters]] array); defaults to
    /// the built-in table
    #[arg(long)]
    chapters: Option<PathBuf>,

    /// Voice to synthesize with (overrides config)
    #[arg(long)]
    voice: Option<String>,

    /// Synthesis model (overrides config)
    #[arg(long)]
    model: Option<String>,

    /// Delivery consistency 0.0-1.0 (overrides config)
    #[arg(long)]
    stability: Option<f32>,

    /// Voice similarity 0.0-1.0 (overrides config)
    #[arg(long)]
    similarity: Option<f32>,

    /// Style exaggeration 0.0-1.0 (overrides config)
    #[arg(long)]
    style: Option<f32>,

    /// Write chunks and manifest only, skip the ffmpeg merge
    #[arg(long)]
    no_merge: bool,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default voice
    SetVoice {
        /// ElevenLabs voice identifier
        voice_id: String,
    },
    /// Set the default synthesis model
    SetModel {
        /// ElevenLabs model identifier
        model_id: String,
    },
    /// Set default stability
    SetStability {
        /// Value (0.0-1.0)
        value: f32,
    },
    /// Set default similarity boost
    SetSimilarity {
        /// Value (0.0-1.0)
        value: f32,
    },
    /// Set default style exaggeration
    SetStyle {
        /// Value (0.0-1.0)
        value: f32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    let script_path = args.script_file.clone().ok_or_else(|| {
        anyhow::anyhow!("Script file path is required. Run 'gen-podcast --help' for usage.")
    })?;

    if !script_path.exists() {
        anyhow::bail!("Script file not found: {}", script_path.display());
    }

    let config = PodcastConfig::load().context("Failed to load configuration")?;

    let boundaries = match &args.chapters {
        Some(path) => script::load_boundary_table(path)?,
        None => script::default_boundaries(),
    };

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        script_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("audio_chunks")
    });

    let voice = VoiceProfile {
        voice_id: args.voice.clone().unwrap_or(config.voice_id.clone()),
        model_id: args.model.clone().unwrap_or(config.model_id.clone()),
        settings: VoiceSettings::new()
            .with_stability(args.stability.unwrap_or(config.stability))
            .with_similarity_boost(args.similarity.unwrap_or(config.similarity_boost))
            .with_style(args.style.unwrap_or(config.style))
            .with_speaker_boost(config.use_speaker_boost),
    };

    if args.debug {
        eprintln!("Script: {}", script_path.display());
        eprintln!("Output dir: {}", output_dir.display());
        eprintln!("Voice: {}", voice.voice_id);
        eprintln!("Model: {}", voice.model_id);
        eprintln!("Chapters configured: {}", boundaries.len());
    }

    // Split the script into chapters
    let document = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {}", script_path.display()))?;
    let body = script::script_body(&document, &config.script_marker)?;
    let chapters = script::split_chapters(body, &boundaries);

    if chapters.is_empty() {
        anyhow::bail!("No chapters found in script");
    }

    let total_words: usize = chapters.iter().map(|c| c.word_count()).sum();
    eprintln!(
        "Script split into {} chapters (~{} words)",
        chapters.len(),
        total_words
    );

    // Check the merge tool up front rather than after burning API credits
    if !args.no_merge && !audio::assembler::is_ffmpeg_available() {
        anyhow::bail!("ffmpeg not found on PATH. Install it, or re-run with --no-merge.");
    }

    // Synthesize one chunk per chapter, in order
    let api_key = config.resolve_api_key()?;
    let backend = ElevenLabsClient::new(api_key);
    let synthesizer = Synthesizer::new(&backend, voice);
    let chunks = synthesizer.synthesize_all(&chapters, &output_dir).await?;

    let total_bytes: u64 = chunks.iter().map(|c| c.bytes).sum();
    eprintln!(
        "Generated {} chunks ({:.2} MB) in {}",
        chunks.len(),
        total_bytes as f64 / (1024.0 * 1024.0),
        output_dir.display()
    );

    // Manifest drives the merge and stays on disk as a run artifact
    let manifest_path = output_dir.join("concat_list.txt");
    audio::assembler::write_manifest(&chunks, &manifest_path)?;

    if args.no_merge {
        eprintln!("Manifest: {}", manifest_path.display());
        eprintln!(
            "To merge manually: ffmpeg -f concat -safe 0 -i {} -c copy podcast-full.mp3",
            manifest_path.display()
        );
        return Ok(());
    }

    let merged_path = args.output.clone().unwrap_or_else(|| {
        let stem = script_path.file_stem().unwrap_or_default();
        script_path.with_file_name(format!("{}-full.mp3", stem.to_string_lossy()))
    });

    eprintln!("Concatenating {} chunks...", chunks.len());
    audio::assembler::concatenate_chunks(&manifest_path, &merged_path)?;

    let metadata = std::fs::metadata(&merged_path)?;
    let duration_ms = audio::assembler::audio_duration_ms(&merged_path)?;
    eprintln!(
        "Merged podcast: {} ({:.2} MB)",
        merged_path.display(),
        metadata.len() as f64 / (1024.0 * 1024.0)
    );
    eprintln!(
        "Duration: {}",
        audio::assembler::format_duration(duration_ms)
    );

    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PodcastConfig::load()?;
            println!("Configuration file: {:?}", PodcastConfig::config_path()?);
            println!();
            if config.api_key.is_some() {
                println!("api_key = (set)");
            } else {
                println!("api_key = (none, uses {})", config::API_KEY_ENV);
            }
            println!("voice_id = \"{}\"", config.voice_id);
            println!("model_id = \"{}\"", config.model_id);
            println!("script_marker = \"{}\"", config.script_marker);
            println!("stability = {}", config.stability);
            println!("similarity_boost = {}", config.similarity_boost);
            println!("style = {}", config.style);
            println!("use_speaker_boost = {}", config.use_speaker_boost);
        }
        ConfigAction::SetVoice { voice_id } => {
            let mut config = PodcastConfig::load()?;
            config.voice_id = voice_id.clone();
            config.save()?;
            println!("Default voice set to: {}", config.voice_id);
        }
        ConfigAction::SetModel { model_id } => {
            let mut config = PodcastConfig::load()?;
            config.model_id = model_id.clone();
            config.save()?;
            println!("Default model set to: {}", config.model_id);
        }
        ConfigAction::SetStability { value } => {
            let mut config = PodcastConfig::load()?;
            config.stability = value.clamp(0.0, 1.0);
            config.save()?;
            println!("Default stability set to: {}", config.stability);
        }
        ConfigAction::SetSimilarity { value } => {
            let mut config = PodcastConfig::load()?;
            config.similarity_boost = value.clamp(0.0, 1.0);
            config.save()?;
            println!("Default similarity boost set to: {}", config.similarity_boost);
        }
        ConfigAction::SetStyle { value } => {
            let mut config = PodcastConfig::load()?;
            config.style = value.clamp(0.0, 1.0);
            config.save()?;
            println!("Default style set to: {}", config.style);
        }
    }
    Ok(())
}
