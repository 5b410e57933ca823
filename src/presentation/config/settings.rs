use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub elevenlabs: ElevenLabsSettings,
    pub auth: AuthSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Origin of the frontend served by the auth server; the session cookie
    /// only travels cross-origin when this matches.
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub whisper_model: String,
    pub language_hint: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ElevenLabsSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub upload_dir: PathBuf,
    pub knowledge_dir: PathBuf,
    pub default_sample: PathBuf,
    pub voice_registry_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

impl Settings {
    /// Environment-driven configuration. API keys are required; everything
    /// else has local-development defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        let openai_api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| SettingsError::MissingVar("OPENAI_API_KEY"))?;
        let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY")
            .map_err(|_| SettingsError::MissingVar("ELEVENLABS_API_KEY"))?;

        let request_timeout = Duration::from_secs(
            env_parse("REQUEST_TIMEOUT_SECS").unwrap_or(60),
        );

        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT").unwrap_or(8008),
                allowed_origin: env_or("ALLOWED_ORIGIN", "http://localhost:8080"),
            },
            openai: OpenAiSettings {
                api_key: openai_api_key,
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                chat_model: env_or("OPENAI_CHAT_MODEL", "gpt-4o-mini"),
                whisper_model: env_or("OPENAI_WHISPER_MODEL", "whisper-1"),
                language_hint: env_or("STT_LANGUAGE_HINT", "ko"),
                request_timeout,
            },
            elevenlabs: ElevenLabsSettings {
                api_key: elevenlabs_api_key,
                base_url: std::env::var("ELEVENLABS_BASE_URL").ok(),
                request_timeout,
            },
            auth: AuthSettings {
                base_url: env_or("AUTH_SERVER_URL", "http://localhost:8080"),
                request_timeout: Duration::from_secs(10),
            },
            storage: StorageSettings {
                upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
                knowledge_dir: env_or("KNOWLEDGE_DIR", "assets/knowledge").into(),
                default_sample: env_or("DEFAULT_SAMPLE", "assets/default_sample.wav").into(),
                voice_registry_path: env_or("VOICE_REGISTRY_PATH", "user_voice_map.json").into(),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
