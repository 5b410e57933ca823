use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    AudioChunkStream, AudioTranscoder, SessionUser, TranscodeError, TranscriptionEngine,
};
use crate::application::services::{
    SynthesisError, SynthesisService, TranslationService, VoiceResolveError, VoiceResolver,
};
use crate::domain::{
    AudioUpload, GenerationMode, OutputKind, TargetLanguage, Transcript, TranslationResult,
    VoiceReference,
};

/// Filesystem layout the pipeline writes into. `upload_dir` holds request
/// artifacts and results; `default_sample` is the reference waveform used
/// for text-mode requests, where no caller audio exists.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub upload_dir: PathBuf,
    pub default_sample: PathBuf,
}

/// One client request, already parsed out of the multipart form.
#[derive(Debug)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub target_lang: TargetLanguage,
    pub domain_code: String,
    pub output: OutputKind,
    pub text: Option<String>,
    pub audio: Option<AudioUpload>,
}

pub struct FileOutput {
    pub source_text: String,
    pub translated_text: String,
    pub back_translated_text: String,
    pub target_lang: String,
    pub audio_url: String,
}

pub struct StreamOutput {
    pub source_text: String,
    pub translated_text: String,
    pub back_translated_text: String,
    pub chunks: AudioChunkStream,
}

pub enum GenerationOutput {
    File(FileOutput),
    Stream(StreamOutput),
}

/// The pipeline controller. Sequences, per request:
/// validate input → acquire source text and voice reference → translate
/// (→ back-translate) → resolve voice identity → synthesize → respond.
/// Terminal on the first unrecoverable fault; STT and translation failures
/// are soft and continue with degraded values.
pub struct GenerationService {
    transcoder: Arc<dyn AudioTranscoder>,
    transcription: Arc<dyn TranscriptionEngine>,
    translator: Arc<TranslationService>,
    resolver: Arc<VoiceResolver>,
    synthesis: Arc<SynthesisService>,
    storage: StorageLayout,
}

impl GenerationService {
    pub fn new(
        transcoder: Arc<dyn AudioTranscoder>,
        transcription: Arc<dyn TranscriptionEngine>,
        translator: Arc<TranslationService>,
        resolver: Arc<VoiceResolver>,
        synthesis: Arc<SynthesisService>,
        storage: StorageLayout,
    ) -> Self {
        Self {
            transcoder,
            transcription,
            translator,
            resolver,
            synthesis,
            storage,
        }
    }

    pub async fn generate(
        &self,
        user: &SessionUser,
        request: GenerationRequest,
    ) -> Result<GenerationOutput, GenerationError> {
        let request_id = Uuid::new_v4();

        let (source_text, reference) = self
            .acquire_source(user, &request, request_id)
            .await?;

        let translation = self
            .translator
            .translate(&source_text, &request.target_lang, &request.domain_code)
            .await;

        if translation.translated.is_degraded() {
            tracing::warn!(request_id = %request_id, "Continuing with untranslated text");
        }

        let voice_id = self
            .resolver
            .resolve_or_create(&user.user_id, &reference)
            .await?;

        match request.output {
            OutputKind::File => {
                let filename = format!("result_{}_{}.wav", user.user_id, request_id);
                let out_path = self.storage.upload_dir.join(&filename);
                self.synthesis
                    .synthesize_to_file(translation.translated.text(), &voice_id, &out_path)
                    .await?;
                Ok(GenerationOutput::File(self.file_output(
                    translation,
                    &request.target_lang,
                    &filename,
                )))
            }
            OutputKind::Stream => {
                let chunks = self
                    .synthesis
                    .synthesize_stream(translation.translated.text(), &voice_id)
                    .await?;
                Ok(GenerationOutput::Stream(StreamOutput {
                    source_text: translation.source_text,
                    translated_text: translation.translated.text().to_string(),
                    back_translated_text: translation.back_translation.text().to_string(),
                    chunks,
                }))
            }
        }
    }

    /// Mode-dependent input validation plus acquisition of the source text
    /// and the voice reference sample.
    async fn acquire_source(
        &self,
        user: &SessionUser,
        request: &GenerationRequest,
        request_id: Uuid,
    ) -> Result<(String, VoiceReference), GenerationError> {
        if request.mode.requires_audio() {
            let upload = request
                .audio
                .as_ref()
                .ok_or_else(|| GenerationError::BadRequest("audio file is required".into()))?;

            let ext = upload.extension().unwrap_or_else(|| "webm".to_string());
            let original_path = self
                .storage
                .upload_dir
                .join(format!("{}_{}.{}", user.user_id, request_id, ext));
            tokio::fs::write(&original_path, &upload.data).await?;

            let waveform = if ext == "wav" {
                original_path
            } else {
                let wav_path = self
                    .storage
                    .upload_dir
                    .join(format!("{}_{}.wav", user.user_id, request_id));
                self.transcoder
                    .transcode_to_wav(&upload.data, &wav_path)
                    .await?;
                wav_path
            };

            let transcript = match self.transcription.transcribe(&waveform).await {
                Ok(text) => Transcript::Recognized(text),
                Err(e) => {
                    tracing::warn!(request_id = %request_id, error = %e, "Transcription failed, using fallback text");
                    Transcript::Degraded
                }
            };

            Ok((transcript.text().to_string(), VoiceReference::new(waveform)))
        } else {
            let text = request
                .text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| GenerationError::BadRequest("text is required".into()))?;

            if !self.storage.default_sample.exists() {
                return Err(GenerationError::BadRequest(
                    "no default reference sample available".into(),
                ));
            }

            Ok((
                text.to_string(),
                VoiceReference::new(self.storage.default_sample.clone()),
            ))
        }
    }

    fn file_output(
        &self,
        translation: TranslationResult,
        target_lang: &TargetLanguage,
        filename: &str,
    ) -> FileOutput {
        FileOutput {
            source_text: translation.source_text,
            translated_text: translation.translated.text().to_string(),
            back_translated_text: translation.back_translation.text().to_string(),
            target_lang: target_lang.as_str().to_string(),
            audio_url: format!("/uploads/{}", filename),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    BadRequest(String),
    #[error("transcode: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("voice resolution: {0}")]
    VoiceResolve(#[from] VoiceResolveError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
