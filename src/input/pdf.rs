use super::{LoadError, LoadedDocument};
use crate::tokenizer::tokenize_text;
use std::fs;
use std::path::Path;

/// Load and tokenize a PDF file using the pdf-extract crate.
///
/// The extracted text is a single buffer, so page and line breaks act as
/// ordinary whitespace separators between words.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    Ok(LoadedDocument {
        tokens: tokenize_text(&text),
        source: format!("pdf:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_pdf_load_garbage_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not a pdf at all").unwrap();

        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::PdfParse(_))));
    }

    #[test]
    fn test_pdf_parse_error_display() {
        let err = LoadError::PdfParse("invalid xref table".to_string());
        assert!(err.to_string().contains("invalid xref table"));
    }
}
