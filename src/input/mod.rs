//! Document input sources
//!
//! Loaders that turn a document (plain-text file, PDF, EPUB, or the system
//! clipboard) into a tokenized [`LoadedDocument`]. Each loader is the
//! reading collaborator of the tokenizer core: read failures surface here
//! as [`LoadError`], never as partial token sequences.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A tokenized document together with a label for where it came from.
pub struct LoadedDocument {
    pub tokens: Vec<String>,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Document formats we recognize but do not extract text from.
const UNSUPPORTED_EXTENSIONS: &[&str] = &["mobi", "azw3", "docx", "doc", "odt"];

/// Load and tokenize a document, picking the loader from the file extension.
///
/// `.pdf` and `.epub` go through their dedicated extractors. Known binary
/// document formats without an extractor are rejected as
/// [`LoadError::UnsupportedFormat`]. Anything else is read as plain text.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    match extension_of(path).as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        Some(ext) if UNSUPPORTED_EXTENSIONS.contains(&ext) => {
            Err(LoadError::UnsupportedFormat(ext.to_string()))
        }
        _ => text::load(path),
    }
}

fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_lowercases() {
        assert_eq!(extension_of("Book.EPUB"), Some("epub".to_string()));
        assert_eq!(extension_of("paper.pdf"), Some("pdf".to_string()));
    }

    #[test]
    fn test_extension_of_none_for_bare_names() {
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".hidden"), None);
    }

    #[test]
    fn test_load_path_rejects_known_binary_formats() {
        let result = load_path("book.mobi");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "mobi"));
    }

    #[test]
    fn test_load_path_missing_text_file() {
        let result = load_path("/nonexistent/notes.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
