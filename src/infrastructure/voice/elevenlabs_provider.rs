use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::{Client, multipart};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{AudioChunkStream, VoiceProvider, VoiceProviderError};
use crate::domain::VoiceId;

const XI_API_KEY_HEADER: &str = "xi-api-key";
const MODEL_ID: &str = "eleven_turbo_v2_5";

// Fixed tuning constants, not runtime-negotiated.
const STABILITY: f32 = 0.5;
const SIMILARITY_BOOST: f32 = 0.75;

/// Voice cloning and synthesis against the ElevenLabs API.
pub struct ElevenLabsProvider {
    client: Client,
    api_key: String,
    base_url: String,
    request_timeout: Duration,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'static str,
    voice_settings: serde_json::Value,
}

#[derive(Deserialize)]
struct AddVoiceResponse {
    voice_id: String,
}

impl ElevenLabsProvider {
    pub fn new(api_key: String, base_url: Option<String>, request_timeout: Duration) -> Self {
        // The streaming endpoint must not carry a total timeout; only the
        // connect phase is bounded. Bounded requests opt in per call.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.elevenlabs.io".to_string()),
            request_timeout,
        }
    }

    fn synthesis_body<'a>(&self, text: &'a str) -> SynthesisRequest<'a> {
        SynthesisRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: json!({
                "stability": STABILITY,
                "similarity_boost": SIMILARITY_BOOST,
            }),
        }
    }
}

#[async_trait]
impl VoiceProvider for ElevenLabsProvider {
    async fn register_voice(
        &self,
        name: &str,
        sample: &Path,
    ) -> Result<VoiceId, VoiceProviderError> {
        let url = format!("{}/v1/voices/add", self.base_url);

        let sample_data = tokio::fs::read(sample)
            .await
            .map_err(|e| VoiceProviderError::RegistrationFailed(format!("sample read: {}", e)))?;
        let sample_name = sample
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sample.wav")
            .to_string();

        let file_part = multipart::Part::bytes(sample_data)
            .file_name(sample_name)
            .mime_str("audio/wav")
            .map_err(|e| VoiceProviderError::RegistrationFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("name", name.to_string())
            .text("description", "voxlate auto clone".to_string())
            .part("files", file_part);

        let response = self
            .client
            .post(&url)
            .header(XI_API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| VoiceProviderError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceProviderError::RegistrationFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let added: AddVoiceResponse = response
            .json()
            .await
            .map_err(|e| VoiceProviderError::RegistrationFailed(format!("body: {}", e)))?;

        Ok(VoiceId::new(added.voice_id))
    }

    async fn synthesize(
        &self,
        text: &str,
        voice_id: &VoiceId,
    ) -> Result<Bytes, VoiceProviderError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);

        let response = self
            .client
            .post(&url)
            .header(XI_API_KEY_HEADER, &self.api_key)
            .json(&self.synthesis_body(text))
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| VoiceProviderError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceProviderError::SynthesisFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| VoiceProviderError::SynthesisFailed(format!("body: {}", e)))
    }

    async fn synthesize_stream(
        &self,
        text: &str,
        voice_id: &VoiceId,
    ) -> Result<AudioChunkStream, VoiceProviderError> {
        // optimize_streaming_latency=3 trades quality for time-to-first-chunk
        let url = format!(
            "{}/v1/text-to-speech/{}/stream?optimize_streaming_latency=3",
            self.base_url, voice_id
        );

        let response = self
            .client
            .post(&url)
            .header(XI_API_KEY_HEADER, &self.api_key)
            .json(&self.synthesis_body(text))
            .send()
            .await
            .map_err(|e| VoiceProviderError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceProviderError::SynthesisFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let chunks = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| VoiceProviderError::SynthesisFailed(e.to_string())));

        Ok(Box::pin(chunks))
    }

    async fn delete_voice(&self, voice_id: &VoiceId) -> Result<(), VoiceProviderError> {
        let url = format!("{}/v1/voices/{}", self.base_url, voice_id);

        let response = self
            .client
            .delete(&url)
            .header(XI_API_KEY_HEADER, &self.api_key)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| VoiceProviderError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceProviderError::DeletionFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
