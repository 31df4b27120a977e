// src/services/types.rs
// Wire payloads and error definitions for the remote endpoints

use serde::Deserialize;
use thiserror::Error;

/// Payload returned by the transcription endpoint.
///
/// Every field is optional on the wire; the pipeline substitutes fallbacks
/// for whatever is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeResponse {
    pub transcript: Option<String>,
    pub title: Option<String>,
    /// Video length as a seconds count.
    pub duration: Option<f64>,
}

/// Payload returned by the summarization endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    pub summary: Option<String>,
}

/// Payload returned by the translation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

/// Errors surfaced by backend calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    TimeoutError,

    #[error("Service error: {0}")]
    ProviderError(String),

    #[error("Malformed response: {0}")]
    InvalidResponse(String),
}
