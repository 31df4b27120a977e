pub mod config;
pub mod export;
pub mod languages;
pub mod pipeline;
pub mod services;
pub mod session;
pub mod translate;

pub use config::AppConfig;
pub use languages::Language;
pub use pipeline::{format_duration, is_valid_video_url, PipelineError, PipelineOrchestrator};
pub use services::{Backend, HttpBackend, ServiceError};
pub use session::{
    segment_transcript, ProcessingState, ResultSet, Segment, SessionState, Stage, View,
};
pub use translate::{TranslationError, TranslationFlow};
