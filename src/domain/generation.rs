use bytes::Bytes;

/// How the client supplied its content: a browser recording, an uploaded
/// audio file, or typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Record,
    Upload,
    Text,
}

impl GenerationMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "record" => Some(Self::Record),
            "upload" => Some(Self::Upload),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn requires_audio(&self) -> bool {
        matches!(self, Self::Record | Self::Upload)
    }
}

/// How the synthesized audio is delivered back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Write a WAV under the upload directory and return its URL.
    #[default]
    File,
    /// Forward provider audio chunks as the response body.
    Stream,
}

impl OutputKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "file" => Some(Self::File),
            "stream" => Some(Self::Stream),
            _ => None,
        }
    }
}

/// Raw audio payload as received from the multipart form.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub filename: String,
    pub data: Bytes,
}

impl AudioUpload {
    /// Lowercased filename extension, when present.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}
