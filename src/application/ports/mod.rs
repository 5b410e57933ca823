mod audio_transcoder;
mod glossary_store;
mod session_validator;
mod transcription_engine;
mod translation_client;
mod voice_provider;
mod voice_registry;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use glossary_store::{GlossaryStore, GlossaryStoreError};
pub use session_validator::{AuthError, SessionUser, SessionValidator};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_client::{TranslationClient, TranslationClientError};
pub use voice_provider::{AudioChunkStream, VoiceProvider, VoiceProviderError};
pub use voice_registry::{VoiceRegistry, VoiceRegistryError};
