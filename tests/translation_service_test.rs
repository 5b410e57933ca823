use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use voxlate::application::ports::{GlossaryStore, TranslationClient, TranslationClientError};
use voxlate::application::services::TranslationService;
use voxlate::domain::{
    BACK_TRANSLATION_SKIPPED, BackTranslation, TargetLanguage, TranslationOutcome,
};
use voxlate::infrastructure::knowledge::FileGlossaryStore;

const BACK_PROMPT_MARKER: &str = "한국어로 번역해줘";

struct RecordingTranslationClient {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingTranslationClient {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn recorded(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationClient for RecordingTranslationClient {
    async fn complete(&self, prompt: &str) -> Result<String, TranslationClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(TranslationClientError::ApiRequestFailed(
                "provider down".to_string(),
            ));
        }
        if prompt.contains(BACK_PROMPT_MARKER) {
            Ok("역번역 결과".to_string())
        } else {
            Ok("Hello".to_string())
        }
    }
}

struct EmptyGlossary;

#[async_trait]
impl GlossaryStore for EmptyGlossary {
    async fn load(
        &self,
        _domain_code: &str,
    ) -> Result<Option<String>, voxlate::application::ports::GlossaryStoreError> {
        Ok(None)
    }
}

fn service_with_glossary_dir(
    client: Arc<RecordingTranslationClient>,
    dir: &std::path::Path,
) -> TranslationService {
    TranslationService::new(client, Arc::new(FileGlossaryStore::new(dir)))
}

#[tokio::test]
async fn given_same_text_and_domain_when_translating_twice_then_prompts_are_identical() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("medical.csv"),
        "term,definition\n고혈압,hypertension\n당뇨병,diabetes\n",
    )
    .unwrap();

    let client = Arc::new(RecordingTranslationClient::new());
    let service = service_with_glossary_dir(Arc::clone(&client), dir.path());
    let target = TargetLanguage::new("English");

    service.translate("혈압이 높습니다", &target, "medical").await;
    service.translate("혈압이 높습니다", &target, "medical").await;

    let prompts = client.recorded();
    // forward, back, forward, back
    assert_eq!(prompts.len(), 4);
    assert_eq!(prompts[0], prompts[2]);
}

#[tokio::test]
async fn given_glossary_domain_when_translating_then_prompt_carries_term_lines() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("legal.csv"),
        "term,definition\n계약,contract\n손해배상,damages\n",
    )
    .unwrap();

    let client = Arc::new(RecordingTranslationClient::new());
    let service = service_with_glossary_dir(Arc::clone(&client), dir.path());

    service
        .translate("계약을 검토해 주세요", &TargetLanguage::new("English"), "legal")
        .await;

    let prompts = client.recorded();
    assert!(prompts[0].contains("[전문 용어 사전]"));
    assert!(prompts[0].contains("계약: contract"));
    assert!(prompts[0].contains("손해배상: damages"));
}

#[tokio::test]
async fn given_none_domain_when_translating_then_prompt_has_no_glossary_block() {
    let client = Arc::new(RecordingTranslationClient::new());
    let service = TranslationService::new(
        Arc::clone(&client) as Arc<dyn TranslationClient>,
        Arc::new(EmptyGlossary),
    );

    service
        .translate("안녕하세요", &TargetLanguage::new("English"), "none")
        .await;

    let prompts = client.recorded();
    assert!(!prompts[0].contains("[전문 용어 사전]"));
    assert!(prompts[0].contains("English"));
    assert!(prompts[0].contains("안녕하세요"));
}

#[tokio::test]
async fn given_non_korean_target_when_translating_then_back_translation_runs() {
    let client = Arc::new(RecordingTranslationClient::new());
    let service = TranslationService::new(
        Arc::clone(&client) as Arc<dyn TranslationClient>,
        Arc::new(EmptyGlossary),
    );

    let result = service
        .translate("안녕하세요", &TargetLanguage::new("English"), "none")
        .await;

    assert_eq!(client.recorded().len(), 2);
    assert_eq!(
        result.back_translation,
        BackTranslation::Verified("역번역 결과".to_string())
    );
}

#[tokio::test]
async fn given_korean_target_by_english_label_when_translating_then_back_translation_is_skipped() {
    let client = Arc::new(RecordingTranslationClient::new());
    let service = TranslationService::new(
        Arc::clone(&client) as Arc<dyn TranslationClient>,
        Arc::new(EmptyGlossary),
    );

    let result = service
        .translate("안녕하세요", &TargetLanguage::new("Korean"), "none")
        .await;

    assert_eq!(client.recorded().len(), 1);
    assert_eq!(result.back_translation, BackTranslation::Skipped);
    assert_eq!(result.back_translation.text(), BACK_TRANSLATION_SKIPPED);
}

#[tokio::test]
async fn given_korean_target_by_native_label_when_translating_then_back_translation_is_skipped() {
    let client = Arc::new(RecordingTranslationClient::new());
    let service = TranslationService::new(
        Arc::clone(&client) as Arc<dyn TranslationClient>,
        Arc::new(EmptyGlossary),
    );

    let result = service
        .translate("안녕하세요", &TargetLanguage::new("한국어"), "none")
        .await;

    assert_eq!(client.recorded().len(), 1);
    assert_eq!(result.back_translation, BackTranslation::Skipped);
}

#[tokio::test]
async fn given_failing_provider_when_translating_then_degrades_to_source_text() {
    let client = Arc::new(RecordingTranslationClient::failing());
    let service = TranslationService::new(
        Arc::clone(&client) as Arc<dyn TranslationClient>,
        Arc::new(EmptyGlossary),
    );

    let result = service
        .translate("안녕하세요", &TargetLanguage::new("English"), "none")
        .await;

    assert!(result.translated.is_degraded());
    assert_eq!(
        result.translated,
        TranslationOutcome::Degraded("안녕하세요".to_string())
    );
    assert_eq!(result.translated.text(), "안녕하세요");
}

#[tokio::test]
async fn given_forward_success_and_back_failure_when_translating_then_back_echoes_translated() {
    struct BackFailingClient;

    #[async_trait]
    impl TranslationClient for BackFailingClient {
        async fn complete(&self, prompt: &str) -> Result<String, TranslationClientError> {
            if prompt.contains(BACK_PROMPT_MARKER) {
                Err(TranslationClientError::RateLimited)
            } else {
                Ok("Hello".to_string())
            }
        }
    }

    let service = TranslationService::new(Arc::new(BackFailingClient), Arc::new(EmptyGlossary));

    let result = service
        .translate("안녕하세요", &TargetLanguage::new("English"), "none")
        .await;

    assert_eq!(
        result.translated,
        TranslationOutcome::Translated("Hello".to_string())
    );
    assert_eq!(
        result.back_translation,
        BackTranslation::Verified("Hello".to_string())
    );
}
