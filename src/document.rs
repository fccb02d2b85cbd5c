use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::PathBuf,
};

use crate::{error::Result, extract::ResumeExtractor, model::ResumeRecord};

/// The resume markdown source as stored on disk. The file is read-only input;
/// a fresh record is extracted on every load, with no caching.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// The location the document was loaded from.
    pub path: PathBuf,
    /// The contents of the document as stored on disk.
    pub content: String,
}

impl ResumeDocument {
    pub fn load(path: impl Into<PathBuf>) -> Result<ResumeDocument> {
        let path = path.into();
        let mut content = String::new();

        File::open(&path)
            .with_context(|| format!("Failed to open resume source: {}", path.display()))?
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read resume source: {}", path.display()))?;

        let document = ResumeDocument { path, content };

        Ok(document)
    }

    pub fn record(&self) -> ResumeRecord {
        ResumeExtractor::new(&self.content).extract()
    }
}

/// Loads and extracts the resume, masking read failures behind a record whose
/// summary is the configured fallback text. Single attempt, no retry; the
/// extractor never sees partial input.
pub fn load_or_fallback(path: impl Into<PathBuf>, fallback_summary: &str) -> ResumeRecord {
    let path = path.into();

    match ResumeDocument::load(&path) {
        Ok(document) => document.record(),
        Err(err) => {
            log::warn!(
                "Could not load {}, using fallback text: {err:#}",
                path.display()
            );

            ResumeRecord {
                summary: fallback_summary.to_string(),
                ..ResumeRecord::default()
            }
        }
    }
}
