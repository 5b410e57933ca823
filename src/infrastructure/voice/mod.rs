mod elevenlabs_provider;

pub use elevenlabs_provider::ElevenLabsProvider;
