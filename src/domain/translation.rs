/// Sentinel recorded instead of a back-translation when the target language
/// already is Korean and the cross-check is not applicable.
pub const BACK_TRANSLATION_SKIPPED: &str = "대상 언어가 한국어입니다.";

/// Forward translation outcome. `Degraded` carries the untranslated source
/// text: the provider failed and the pipeline continued with the input
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Degraded(String),
}

impl TranslationOutcome {
    pub fn text(&self) -> &str {
        match self {
            TranslationOutcome::Translated(text) | TranslationOutcome::Degraded(text) => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, TranslationOutcome::Degraded(_))
    }
}

/// Result of the back-translation cross-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackTranslation {
    Verified(String),
    Skipped,
}

impl BackTranslation {
    pub fn text(&self) -> &str {
        match self {
            BackTranslation::Verified(text) => text,
            BackTranslation::Skipped => BACK_TRANSLATION_SKIPPED,
        }
    }
}

/// Full translation artifact for one request, request-scoped.
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub source_text: String,
    pub translated: TranslationOutcome,
    pub back_translation: BackTranslation,
}
