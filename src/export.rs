// src/export.rs
// Plain-text artifact rendering and saving

use crate::session::{ResultSet, Segment};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const TRANSCRIPT_FILENAME: &str = "transcription.txt";
pub const SUMMARY_FILENAME: &str = "summary.txt";
pub const TRANSLATION_FILENAME: &str = "translation.txt";

/// Flatten segments as `[timestamp] text` blocks separated by blank lines.
pub fn render_transcript(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| format!("[{}] {}", segment.timestamp, segment.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Write the transcript, summary and translation to their fixed-name files
/// under `dir`, creating it if needed. Returns the written paths.
pub fn save_artifacts(results: &ResultSet, dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let transcript_path = dir.join(TRANSCRIPT_FILENAME);
    fs::write(&transcript_path, render_transcript(&results.transcription))?;

    let summary_path = dir.join(SUMMARY_FILENAME);
    fs::write(&summary_path, &results.summary)?;

    let translation_path = dir.join(TRANSLATION_FILENAME);
    fs::write(&translation_path, &results.translation)?;

    Ok(vec![transcript_path, summary_path, translation_path])
}
