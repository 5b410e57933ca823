use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{GlossaryStore, GlossaryStoreError};

/// Glossary resources on disk, one file per domain code. `<code>.txt` wins
/// over `<code>.csv` when both exist.
pub struct FileGlossaryStore {
    knowledge_dir: PathBuf,
}

impl FileGlossaryStore {
    pub fn new(knowledge_dir: impl Into<PathBuf>) -> Self {
        Self {
            knowledge_dir: knowledge_dir.into(),
        }
    }
}

#[async_trait]
impl GlossaryStore for FileGlossaryStore {
    async fn load(&self, domain_code: &str) -> Result<Option<String>, GlossaryStoreError> {
        let txt_path = self.knowledge_dir.join(format!("{}.txt", domain_code));
        if txt_path.exists() {
            let content = tokio::fs::read_to_string(&txt_path).await?;
            return Ok(Some(strip_bom(&content).trim().to_string()));
        }

        let csv_path = self.knowledge_dir.join(format!("{}.csv", domain_code));
        if csv_path.exists() {
            let content = tokio::fs::read_to_string(&csv_path).await?;
            return Ok(Some(parse_tabular(strip_bom(&content))?));
        }

        Ok(None)
    }
}

// Spreadsheet exports commonly carry a UTF-8 BOM.
fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Two-column tabular glossary: the header row is skipped, rows with at
/// least two columns become `"term: definition"` lines in file order, and
/// shorter rows are dropped.
fn parse_tabular(content: &str) -> Result<String, GlossaryStoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| GlossaryStoreError::Malformed(e.to_string()))?;
        if record.len() >= 2 {
            lines.push(format!("{}: {}", &record[0], &record[1]));
        }
    }

    Ok(lines.join("\n"))
}
