use crate::languages::Language;
use serde::Serialize;

pub mod progress;
pub mod segment;

pub use progress::{ProcessingState, Stage};
pub use segment::{segment_transcript, Segment};

/// Which result pane the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Transcription,
    Summary,
    Translation,
}

/// Committed output of one successful pipeline run.
///
/// Only `translation` is mutated after creation, and only by the translation
/// sub-flow. A new successful run replaces the whole set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub video_title: String,
    pub video_duration: String,
    pub transcription: Vec<Segment>,
    pub summary: String,
    pub translation: String,
}

impl ResultSet {
    /// Space-joined segment texts, the source text for translation requests.
    pub fn joined_transcript(&self) -> String {
        self.transcription
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Single source of truth shared by the orchestrator and the translation
/// sub-flow. All mutation goes through the methods below.
pub struct SessionState {
    url: String,
    active_view: View,
    selected_language: Language,
    processing: ProcessingState,
    results: Option<ResultSet>,
    translation_generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            url: String::new(),
            active_view: View::default(),
            selected_language: language,
            processing: ProcessingState::idle(),
            results: None,
            translation_generation: 0,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn select_view(&mut self, view: View) {
        self.active_view = view;
    }

    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    pub fn select_language(&mut self, language: Language) {
        self.selected_language = language;
    }

    pub fn processing(&self) -> &ProcessingState {
        &self.processing
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_processing
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Start a new run: record the URL, reset progress and enter the first
    /// stage.
    pub fn begin_run(&mut self, url: &str) {
        self.url = url.to_string();
        self.processing = ProcessingState::idle();
        self.enter_stage(Stage::Transcribing);
    }

    /// Advance to `stage`, updating the step label and checkpoint. Progress
    /// never moves backwards within a run.
    pub fn enter_stage(&mut self, stage: Stage) {
        self.processing.is_processing = true;
        self.processing.current_step = stage.label().to_string();
        self.processing.progress = self.processing.progress.max(stage.checkpoint());
    }

    /// Abort the current run, returning progress to idle/zero.
    pub fn fail_run(&mut self) {
        self.processing = ProcessingState::idle();
    }

    /// Replace the result set wholesale and mark the run complete.
    pub fn commit_results(&mut self, results: ResultSet) {
        self.results = Some(results);
        self.processing.is_processing = false;
        self.processing.current_step.clear();
        self.processing.progress = 100;
    }

    /// Commit a settled translation response. Responses carry the generation
    /// assigned when their request was issued; anything older than the last
    /// committed generation is discarded so a slow early request cannot
    /// overwrite a newer result.
    pub fn commit_translation(&mut self, translation: String, generation: u64) -> bool {
        if generation < self.translation_generation {
            return false;
        }
        match self.results.as_mut() {
            Some(results) => {
                results.translation = translation;
                self.translation_generation = generation;
                true
            }
            None => false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
