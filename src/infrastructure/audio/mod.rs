mod wav_transcoder;
mod whisper_engine;

pub use wav_transcoder::SymphoniaTranscoder;
pub use whisper_engine::OpenAiWhisperEngine;
