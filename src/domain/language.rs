use std::fmt;

/// Target language for translation, as named by the client ("English",
/// "Japanese", "한국어", ...). The name is passed verbatim into the
/// translation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Korean is the source language of the pipeline; the back-translation
    /// cross-check is skipped when it is also the target. Both the English
    /// label and the native label count.
    pub fn is_korean(&self) -> bool {
        let name = self.0.trim();
        name == "Korean" || name == "한국어"
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_native_korean_labels_are_equivalent() {
        assert!(TargetLanguage::new("Korean").is_korean());
        assert!(TargetLanguage::new("한국어").is_korean());
        assert!(TargetLanguage::new(" Korean ").is_korean());
        assert!(!TargetLanguage::new("English").is_korean());
        assert!(!TargetLanguage::new("korean").is_korean());
    }
}
