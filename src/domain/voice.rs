use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque voice identifier issued by the synthesis provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A provider-registered voice belonging to one user. At most one identity
/// exists per user at any time; the registry mapping is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceIdentity {
    pub voice_id: VoiceId,
    pub created_at: DateTime<Utc>,
}

impl VoiceIdentity {
    pub fn new(voice_id: VoiceId) -> Self {
        Self {
            voice_id,
            created_at: Utc::now(),
        }
    }
}

/// Filesystem handle to a mono waveform usable as a cloning sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceReference(PathBuf);

impl VoiceReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sample.wav")
    }
}
