use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use voxlate::application::services::{
    GenerationService, StorageLayout, SynthesisService, TranslationService, VoiceResolver,
};
use voxlate::infrastructure::audio::{OpenAiWhisperEngine, SymphoniaTranscoder};
use voxlate::infrastructure::auth::RemoteSessionValidator;
use voxlate::infrastructure::knowledge::FileGlossaryStore;
use voxlate::infrastructure::llm::OpenAiTranslator;
use voxlate::infrastructure::observability::{TracingConfig, init_tracing};
use voxlate::infrastructure::persistence::JsonVoiceRegistry;
use voxlate::infrastructure::voice::ElevenLabsProvider;
use voxlate::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    std::fs::create_dir_all(&settings.storage.upload_dir)?;
    std::fs::create_dir_all(&settings.storage.knowledge_dir)?;

    let transcoder = Arc::new(SymphoniaTranscoder);
    let transcription = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.whisper_model.clone()),
        Some(settings.openai.language_hint.clone()),
        settings.openai.request_timeout,
    ));
    let translation_client = Arc::new(OpenAiTranslator::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.chat_model.clone()),
        settings.openai.request_timeout,
    ));
    let glossary = Arc::new(FileGlossaryStore::new(
        settings.storage.knowledge_dir.clone(),
    ));
    let provider = Arc::new(ElevenLabsProvider::new(
        settings.elevenlabs.api_key.clone(),
        settings.elevenlabs.base_url.clone(),
        settings.elevenlabs.request_timeout,
    ));
    let registry = Arc::new(JsonVoiceRegistry::new(
        settings.storage.voice_registry_path.clone(),
    ));

    let translator = Arc::new(TranslationService::new(translation_client, glossary));
    let resolver = Arc::new(VoiceResolver::new(provider.clone(), registry));
    let synthesis = Arc::new(SynthesisService::new(provider));

    let generation_service = Arc::new(GenerationService::new(
        transcoder,
        transcription,
        translator,
        resolver,
        synthesis,
        StorageLayout {
            upload_dir: settings.storage.upload_dir.clone(),
            default_sample: settings.storage.default_sample.clone(),
        },
    ));

    let session_validator = Arc::new(RemoteSessionValidator::new(
        settings.auth.base_url.clone(),
        settings.auth.request_timeout,
    ));

    let state = AppState {
        generation_service,
        session_validator,
    };

    let router = create_router(
        state,
        &settings.storage.upload_dir,
        &settings.server.allowed_origin,
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
