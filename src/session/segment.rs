use serde::Serialize;

/// Spacing between synthetic segment timestamps, in seconds.
const SEGMENT_INTERVAL_SECS: usize = 15;

/// One timestamped sentence-level unit of a transcript.
///
/// Segments are built once per pipeline run and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub timestamp: String,
    pub text: String,
}

/// Split a raw transcript into timestamped segments.
///
/// Sentences are delimited by `". "`; fragments that are blank after trimming
/// are dropped, surviving fragments keep their original spacing. Every segment
/// text ends with a period. Timestamps are display labels spaced 15s apart by
/// ordinal position, not a real time axis, and the seconds component is not
/// wrapped at 60.
pub fn segment_transcript(raw: &str) -> Vec<Segment> {
    raw.split(". ")
        .filter(|fragment| !fragment.trim().is_empty())
        .enumerate()
        .map(|(index, fragment)| Segment {
            timestamp: timestamp_for(index),
            text: if fragment.ends_with('.') {
                fragment.to_string()
            } else {
                format!("{}.", fragment)
            },
        })
        .collect()
}

fn timestamp_for(index: usize) -> String {
    format!("00:{:02}", index * SEGMENT_INTERVAL_SECS)
}
