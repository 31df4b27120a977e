// src/pipeline/mod.rs
// Multi-stage transcription pipeline

use crate::services::{Backend, ServiceError};
use crate::session::{segment_transcript, ResultSet, SessionState, Stage};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub mod validate;

pub use validate::is_valid_video_url;

const FALLBACK_TITLE: &str = "Transcribed Video";
const UNKNOWN_DURATION: &str = "Unknown";
const SUMMARY_PLACEHOLDER: &str = "No summary generated.";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("A pipeline run is already in progress")]
    RunInProgress,

    #[error("Transcription failed: {0}")]
    Transcription(ServiceError),

    #[error("Summarization failed: {0}")]
    Summarization(ServiceError),
}

/// Drives the transcribe → segment → summarize → assemble sequence against
/// the shared session state. At most one run is active at a time.
pub struct PipelineOrchestrator {
    backend: Arc<dyn Backend>,
    session: Arc<Mutex<SessionState>>,
}

impl PipelineOrchestrator {
    pub fn new(backend: Arc<dyn Backend>, session: Arc<Mutex<SessionState>>) -> Self {
        Self { backend, session }
    }

    /// Run the full pipeline for `url`. On failure the session's progress is
    /// reset to idle; on success the assembled result set is committed and
    /// also returned.
    pub async fn run(&self, url: &str) -> Result<ResultSet, PipelineError> {
        if !is_valid_video_url(url) {
            return Err(PipelineError::InvalidUrl(url.to_string()));
        }

        let run_id = Uuid::new_v4();
        {
            let mut session = self.session.lock().await;
            if session.is_processing() {
                return Err(PipelineError::RunInProgress);
            }
            session.begin_run(url);
        }
        tracing::info!("Run {} started: {}", run_id, url);

        let transcribed = match self.backend.transcribe(url).await {
            Ok(response) => response,
            Err(e) => return Err(self.abort(run_id, PipelineError::Transcription(e)).await),
        };
        let raw_transcript = transcribed.transcript.clone().unwrap_or_default();

        self.session.lock().await.enter_stage(Stage::Segmenting);
        let segments = segment_transcript(&raw_transcript);
        tracing::info!(
            "Run {}: {} segments from {} chars",
            run_id,
            segments.len(),
            raw_transcript.len()
        );

        self.session.lock().await.enter_stage(Stage::Summarizing);
        let summarized = match self.backend.summarize(&raw_transcript).await {
            Ok(response) => response,
            Err(e) => return Err(self.abort(run_id, PipelineError::Summarization(e)).await),
        };
        let summary = summarized
            .summary
            .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string());

        self.session.lock().await.enter_stage(Stage::Assembling);
        let results = ResultSet {
            video_title: transcribed
                .title
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            video_duration: transcribed
                .duration
                .map(format_duration)
                .unwrap_or_else(|| UNKNOWN_DURATION.to_string()),
            transcription: segments,
            summary,
            // The translation view shows the untranslated transcript until a
            // translation is requested.
            translation: raw_transcript,
        };

        self.session.lock().await.commit_results(results.clone());
        tracing::info!(
            "Run {} completed: \"{}\", {} segments",
            run_id,
            results.video_title,
            results.transcription.len()
        );

        Ok(results)
    }

    async fn abort(&self, run_id: Uuid, error: PipelineError) -> PipelineError {
        tracing::error!("Run {} aborted: {}", run_id, error);
        self.session.lock().await.fail_run();
        error
    }
}

/// Render a seconds count as a `minutes:seconds` display string.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
