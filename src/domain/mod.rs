mod generation;
mod language;
mod transcript;
mod translation;
mod user_id;
mod voice;

pub use generation::{AudioUpload, GenerationMode, OutputKind};
pub use language::TargetLanguage;
pub use transcript::{TRANSCRIPTION_FALLBACK, Transcript};
pub use translation::{
    BACK_TRANSLATION_SKIPPED, BackTranslation, TranslationOutcome, TranslationResult,
};
pub use user_id::UserId;
pub use voice::{VoiceId, VoiceIdentity, VoiceReference};
