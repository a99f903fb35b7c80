//! Audio artifacts: per-chapter chunks, concat manifest, merged output.

pub mod assembler;

use std::path::PathBuf;

/// The audio artifact produced from one chapter.
///
/// Written once by the synthesis loop, never mutated; the concat step reads
/// chunks in this list's order.
#[derive(Debug, Clone)]
pub struct AudioChunk {
    /// Chapter name the chunk was synthesized from
    pub name: String,
    /// Path of the chunk file on disk
    pub path: PathBuf,
    /// Payload size in bytes
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_chunk() {
        let chunk = AudioChunk {
            name: "00_intro".to_string(),
            path: PathBuf::from("/tmp/00_intro.mp3"),
            bytes: 1024,
        };
        assert_eq!(chunk.name, "00_intro");
        assert_eq!(chunk.bytes, 1024);
    }
}
