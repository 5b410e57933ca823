mod generation_service;
mod synthesis_service;
mod translation_service;
mod voice_resolver;

pub use generation_service::{
    FileOutput, GenerationError, GenerationOutput, GenerationRequest, GenerationService,
    StorageLayout, StreamOutput,
};
pub use synthesis_service::{SynthesisError, SynthesisService};
pub use translation_service::TranslationService;
pub use voice_resolver::{VoiceResolveError, VoiceResolver};
