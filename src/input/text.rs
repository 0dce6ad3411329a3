use super::{LoadError, LoadedDocument};
use crate::tokenizer::{LowercaseSentenceTokenizer, Tokenizer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and tokenize a plain-text file.
///
/// The file is read line by line through [`LowercaseSentenceTokenizer`],
/// so its line-joining behavior applies: no separator is inserted at line
/// boundaries. Invalid UTF-8 surfaces as [`LoadError::Io`].
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let tokens = LowercaseSentenceTokenizer.tokenize(BufReader::new(file))?;

    Ok(LoadedDocument {
        tokens,
        source: format!("text:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_text_load_nonexistent_file() {
        let result = load("/nonexistent/path/notes.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_text_load_tokenizes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, "Hello world.\n").unwrap();

        let document = load(path.to_str().unwrap()).unwrap();
        assert_eq!(document.tokens, vec!["hello", "world", "."]);
        assert!(document.source.starts_with("text:"));
    }

    #[test]
    fn test_text_load_empty_file_yields_no_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let document = load(path.to_str().unwrap()).unwrap();
        assert!(document.tokens.is_empty());
    }

    #[test]
    fn test_text_load_joins_lines_without_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("split.txt");
        fs::write(&path, "Hello\nworld.\n").unwrap();

        let document = load(path.to_str().unwrap()).unwrap();
        assert_eq!(document.tokens, vec!["helloworld", "."]);
    }
}
