mod settings;

pub use settings::{
    AuthSettings, ElevenLabsSettings, OpenAiSettings, ServerSettings, Settings, SettingsError,
    StorageSettings,
};
