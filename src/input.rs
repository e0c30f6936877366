use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AnalysisError;

// @module: Reading text to analyze, typed or uploaded

/// File extensions accepted as uploads
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "csv", "md"];

/// Where the text to analyze comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Text typed directly
    Text(String),
    /// Uploaded plain text, CSV or markdown file
    File(PathBuf),
}

// @struct: Upload handling utility
pub struct FileManager;

impl FileManager {
    // @checks: Extension is one we read
    pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                SUPPORTED_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s))
            })
            .unwrap_or(false)
    }

    /// Read an uploaded file as strict UTF-8 text
    pub fn read_upload<P: AsRef<Path>>(path: P) -> Result<String, AnalysisError> {
        let path = path.as_ref();
        if !Self::is_supported(path) {
            return Err(AnalysisError::UnsupportedFile(path.display().to_string()));
        }
        let bytes = fs::read(path)?;
        Self::decode(bytes)
    }

    /// Decode uploaded bytes; invalid UTF-8 aborts the request
    pub fn decode(bytes: Vec<u8>) -> Result<String, AnalysisError> {
        Ok(String::from_utf8(bytes)?)
    }
}

impl InputSource {
    /// Load the text behind this source
    pub fn load(&self) -> Result<String, AnalysisError> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => FileManager::read_upload(path),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, InputSource::File(_))
    }
}

/// Reject blank or whitespace-only text before running an analysis
pub fn require_text(text: &str) -> Result<&str, AnalysisError> {
    if text.trim().is_empty() {
        Err(AnalysisError::EmptyInput)
    } else {
        Ok(text)
    }
}

/// First `max_chars` characters of `content`, with `...` appended when cut
pub fn preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &content[..byte_index]),
        None => content.to_string(),
    }
}
