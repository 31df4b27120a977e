// src/translate.rs
// On-demand translation of the current transcript

use crate::languages::Language;
use crate::services::{Backend, ServiceError};
use crate::session::SessionState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("No transcript available to translate")]
    NoTranscript,

    #[error("Translation failed: {0}")]
    Service(ServiceError),
}

/// Side flow that fetches a translation of the current transcript into a
/// selected language. Independent of the main pipeline: it never touches
/// `ProcessingState`, and on failure the existing translation is left as-is.
pub struct TranslationFlow {
    backend: Arc<dyn Backend>,
    session: Arc<Mutex<SessionState>>,
    generation: AtomicU64,
}

impl TranslationFlow {
    pub fn new(backend: Arc<dyn Backend>, session: Arc<Mutex<SessionState>>) -> Self {
        Self {
            backend,
            session,
            generation: AtomicU64::new(0),
        }
    }

    /// Translate the segmented-then-rejoined transcript into `language` and
    /// commit the result to the session.
    ///
    /// Overlapping requests are not cancelled; each carries a generation
    /// number and a settled response older than the last committed one is
    /// discarded, so the newest settled response wins.
    pub async fn translate(&self, language: Language) -> Result<String, TranslationError> {
        let source = {
            let mut session = self.session.lock().await;
            session.select_language(language);
            match session.results() {
                Some(results) => results.joined_transcript(),
                None => return Err(TranslationError::NoTranscript),
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(
            "Translation request {} -> {} ({} chars)",
            generation,
            language.code(),
            source.len()
        );

        match self.backend.translate(&source, language).await {
            Ok(response) => {
                let mut session = self.session.lock().await;
                if session.commit_translation(response.translation.clone(), generation) {
                    tracing::info!("Translation {} committed", generation);
                } else {
                    tracing::warn!("Translation {} superseded, discarding", generation);
                }
                Ok(response.translation)
            }
            Err(e) => {
                tracing::error!("Translation request {} failed: {}", generation, e);
                Err(TranslationError::Service(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{SummarizeResponse, TranscribeResponse, TranslateResponse};
    use crate::session::{segment_transcript, ResultSet};
    use async_trait::async_trait;

    struct StubTranslator {
        fail: bool,
    }

    #[async_trait]
    impl Backend for StubTranslator {
        async fn transcribe(&self, _url: &str) -> Result<TranscribeResponse, ServiceError> {
            unreachable!("translation flow never transcribes")
        }

        async fn summarize(&self, _text: &str) -> Result<SummarizeResponse, ServiceError> {
            unreachable!("translation flow never summarizes")
        }

        async fn translate(
            &self,
            text: &str,
            dest: Language,
        ) -> Result<TranslateResponse, ServiceError> {
            if self.fail {
                return Err(ServiceError::NetworkError("unreachable host".to_string()));
            }
            Ok(TranslateResponse {
                translation: format!("[{}] {}", dest.code(), text),
            })
        }
    }

    fn seeded_session() -> Arc<Mutex<SessionState>> {
        let mut session = SessionState::new();
        session.commit_results(ResultSet {
            video_title: "Demo".to_string(),
            video_duration: "2:05".to_string(),
            transcription: segment_transcript("Hello world. This is a test. Final sentence"),
            summary: "A short demo.".to_string(),
            translation: "Hello world. This is a test. Final sentence".to_string(),
        });
        Arc::new(Mutex::new(session))
    }

    fn flow(session: Arc<Mutex<SessionState>>, fail: bool) -> TranslationFlow {
        TranslationFlow::new(Arc::new(StubTranslator { fail }), session)
    }

    #[tokio::test]
    async fn translates_the_rejoined_segments() {
        let session = seeded_session();
        let flow = flow(session.clone(), false);

        let translation = flow.translate(Language::French).await.unwrap();

        // Source is the segmented transcript, period normalization included.
        assert_eq!(
            translation,
            "[fr] Hello world. This is a test. Final sentence."
        );
        let session = session.lock().await;
        assert_eq!(session.results().unwrap().translation, translation);
        assert_eq!(session.selected_language(), Language::French);
    }

    #[tokio::test]
    async fn updates_only_the_translation_field() {
        let session = seeded_session();
        let before = session.lock().await.results().unwrap().clone();
        let flow = flow(session.clone(), false);

        flow.translate(Language::French).await.unwrap();

        let session = session.lock().await;
        let after = session.results().unwrap();
        assert_eq!(after.video_title, before.video_title);
        assert_eq!(after.video_duration, before.video_duration);
        assert_eq!(after.transcription, before.transcription);
        assert_eq!(after.summary, before.summary);
        assert_ne!(after.translation, before.translation);
    }

    #[tokio::test]
    async fn without_results_it_is_a_guarded_no_op() {
        let session = Arc::new(Mutex::new(SessionState::new()));
        let flow = flow(session.clone(), false);

        let err = flow.translate(Language::French).await.unwrap_err();

        assert!(matches!(err, TranslationError::NoTranscript));
        assert!(session.lock().await.results().is_none());
    }

    #[tokio::test]
    async fn failure_leaves_existing_translation_untouched() {
        let session = seeded_session();
        let before = session.lock().await.results().unwrap().translation.clone();
        let flow = flow(session.clone(), true);

        let err = flow.translate(Language::German).await.unwrap_err();

        assert!(matches!(err, TranslationError::Service(_)));
        assert_eq!(
            session.lock().await.results().unwrap().translation,
            before
        );
    }

    #[tokio::test]
    async fn does_not_touch_processing_state() {
        let session = seeded_session();
        let flow = flow(session.clone(), false);

        flow.translate(Language::Italian).await.unwrap();

        let session = session.lock().await;
        assert!(!session.is_processing());
        assert_eq!(session.processing().progress, 100);
    }

    #[tokio::test]
    async fn sequential_requests_each_commit() {
        let session = seeded_session();
        let flow = flow(session.clone(), false);

        flow.translate(Language::French).await.unwrap();
        flow.translate(Language::German).await.unwrap();

        let session = session.lock().await;
        assert!(session
            .results()
            .unwrap()
            .translation
            .starts_with("[de]"));
    }
}
