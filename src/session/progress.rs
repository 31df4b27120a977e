use serde::Serialize;

/// Pipeline execution status, observed by the UI layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingState {
    pub is_processing: bool,
    pub current_step: String,
    pub progress: u8,
}

impl ProcessingState {
    pub fn idle() -> Self {
        Self {
            is_processing: false,
            current_step: String::new(),
            progress: 0,
        }
    }
}

impl Default for ProcessingState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Stages of a pipeline run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transcribing,
    Segmenting,
    Summarizing,
    Assembling,
}

impl Stage {
    /// Human-readable label shown while the stage is active.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Transcribing => "Sending video URL to server...",
            Stage::Segmenting => "Formatting transcript...",
            Stage::Summarizing => "Generating summary...",
            Stage::Assembling => "Finishing up...",
        }
    }

    /// Progress percentage emitted when the stage is entered.
    pub fn checkpoint(self) -> u8 {
        match self {
            Stage::Transcribing => 10,
            Stage::Segmenting => 40,
            Stage::Summarizing => 70,
            Stage::Assembling => 90,
        }
    }
}
