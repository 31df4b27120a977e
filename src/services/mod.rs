// src/services/mod.rs
// Remote endpoint adapters

mod http;
mod types;

pub use http::HttpBackend;
pub use types::{ServiceError, SummarizeResponse, TranscribeResponse, TranslateResponse};

use crate::languages::Language;
use async_trait::async_trait;

/// The three remote endpoints the pipeline depends on, as one opaque
/// collaborator.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the transcript and video metadata for a video URL.
    async fn transcribe(&self, video_url: &str) -> Result<TranscribeResponse, ServiceError>;

    /// Produce an abstractive summary of the full transcript text.
    async fn summarize(&self, text: &str) -> Result<SummarizeResponse, ServiceError>;

    /// Translate source text into the target language.
    async fn translate(&self, text: &str, dest: Language) -> Result<TranslateResponse, ServiceError>;
}
