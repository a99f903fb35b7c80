//! Chunk concatenation using FFmpeg, plus the duration report.

use super::AudioChunk;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Write the concat manifest: one `file '<path>'` line per chunk, in chapter
/// order. The file doubles as the input list for FFmpeg's concat demuxer and
/// is left on disk as a run artifact.
pub fn write_manifest(chunks: &[AudioChunk], manifest_path: &Path) -> Result<()> {
    let mut content = String::new();
    for chunk in chunks {
        // Escape single quotes in paths for the concat demuxer
        let path = chunk.path.to_string_lossy().replace('\'', "'\\''");
        content.push_str(&format!("file '{}'\n", path));
    }
    std::fs::write(manifest_path, &content)
        .with_context(|| format!("Failed to write manifest {}", manifest_path.display()))?;
    Ok(())
}

/// Losslessly join the manifest's chunks into one file.
///
/// Uses the concat demuxer with stream copy, so chunks are never re-encoded.
/// A failure surfaces FFmpeg's stderr; already-written chunk files are left
/// on disk for manual recovery.
pub fn concatenate_chunks(manifest_path: &Path, output_path: &Path) -> Result<()> {
    let output = Command::new("ffmpeg")
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(manifest_path)
        .args(["-c", "copy"])
        .arg(output_path)
        .output()
        .context("Failed to run ffmpeg concat")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg concat failed: {}", stderr);
    }

    Ok(())
}

/// Get the duration of an audio file in milliseconds using ffprobe.
pub fn audio_duration_ms(audio_path: &Path) -> Result<u64> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(audio_path)
        .output()
        .context("Failed to run ffprobe")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffprobe failed: {}", stderr);
    }

    let duration_str = String::from_utf8_lossy(&output.stdout);
    let duration_secs: f64 = duration_str
        .trim()
        .parse()
        .context("Failed to parse duration")?;

    Ok((duration_secs * 1000.0) as u64)
}

/// Format a millisecond duration as minutes:seconds (e.g. `12:05`).
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Check if FFmpeg is available on the system.
pub fn is_ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
