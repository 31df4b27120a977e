// src/languages.rs
// Supported translation target languages

/// Closed catalogue of translation target languages.
///
/// The translation endpoint only accepts these codes, so the set is a fixed
/// enum rather than a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Japanese,
    Korean,
    Chinese,
    Arabic,
    Hindi,
    Turkish,
    Dutch,
    Swedish,
    Norwegian,
    Finnish,
    Danish,
    Polish,
    Ukrainian,
    Greek,
    Hebrew,
    Indonesian,
    Thai,
    Vietnamese,
}

impl Language {
    pub const ALL: [Language; 24] = [
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
        Language::Arabic,
        Language::Hindi,
        Language::Turkish,
        Language::Dutch,
        Language::Swedish,
        Language::Norwegian,
        Language::Finnish,
        Language::Danish,
        Language::Polish,
        Language::Ukrainian,
        Language::Greek,
        Language::Hebrew,
        Language::Indonesian,
        Language::Thai,
        Language::Vietnamese,
    ];

    /// ISO-style code sent to the translation endpoint as `dest`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Chinese => "zh",
            Language::Arabic => "ar",
            Language::Hindi => "hi",
            Language::Turkish => "tr",
            Language::Dutch => "nl",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
            Language::Finnish => "fi",
            Language::Danish => "da",
            Language::Polish => "pl",
            Language::Ukrainian => "uk",
            Language::Greek => "el",
            Language::Hebrew => "he",
            Language::Indonesian => "id",
            Language::Thai => "th",
            Language::Vietnamese => "vi",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
            Language::Turkish => "Turkish",
            Language::Dutch => "Dutch",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Danish => "Danish",
            Language::Polish => "Polish",
            Language::Ukrainian => "Ukrainian",
            Language::Greek => "Greek",
            Language::Hebrew => "Hebrew",
            Language::Indonesian => "Indonesian",
            Language::Thai => "Thai",
            Language::Vietnamese => "Vietnamese",
        }
    }

    /// Look up a language by code. Trims and lowercases the input.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
