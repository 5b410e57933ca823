/// Placeholder source text used when the STT provider fails. The pipeline
/// continues with this value instead of aborting.
pub const TRANSCRIPTION_FALLBACK: &str = "음성 인식에 실패했습니다.";

/// Outcome of speech-to-text. Degradation is a value, not an error, so
/// callers can tell a real transcript apart from the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Recognized(String),
    Degraded,
}

impl Transcript {
    pub fn text(&self) -> &str {
        match self {
            Transcript::Recognized(text) => text,
            Transcript::Degraded => TRANSCRIPTION_FALLBACK,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Transcript::Degraded)
    }
}
