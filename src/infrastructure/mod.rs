pub mod audio;
pub mod auth;
pub mod knowledge;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod voice;
