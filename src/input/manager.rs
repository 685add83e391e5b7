//! Resume loading with a per-path text cache

use crate::error::{CareerToolsError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads resume text from disk, remembering what it has already read.
#[derive(Default)]
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    bypass_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.bypass_cache = !enable;
        self
    }

    /// Plain text of the resume at `path`.
    ///
    /// Missing files are `InvalidInput`; extensions other than pdf, txt and
    /// md/markdown are `UnsupportedFormat`.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let key = tokio::fs::canonicalize(path).await.map_err(|_| {
            CareerToolsError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        if !self.bypass_cache {
            if let Some(text) = self.cache.get(&key) {
                debug!("Cache hit for {}", key.display());
                return Ok(text.clone());
            }
        }

        let file_type = FileType::from_path(&key).ok_or_else(|| {
            CareerToolsError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        let text = extract_by_type(file_type, &key).await?;
        info!("Read {} characters from {}", text.len(), path.display());
        if text.trim().is_empty() {
            warn!("{} contains no extractable text", path.display());
        }

        if !self.bypass_cache {
            self.cache.insert(key, text.clone());
        }
        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

async fn extract_by_type(file_type: FileType, path: &Path) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Text => PlainTextExtractor.extract(path).await,
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Unknown => Err(CareerToolsError::UnsupportedFormat(format!(
            "{} (supported: {})",
            path.display(),
            FileType::SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}
