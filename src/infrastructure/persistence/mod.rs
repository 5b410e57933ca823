mod json_voice_registry;
mod memory_voice_registry;

pub use json_voice_registry::JsonVoiceRegistry;
pub use memory_voice_registry::InMemoryVoiceRegistry;
