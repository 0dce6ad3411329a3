use super::{LoadError, LoadedDocument};
use crate::tokenizer::tokenize_text;

/// Load and tokenize the current text contents of the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    Ok(LoadedDocument {
        tokens: tokenize_text(&text),
        source: "clipboard".to_string(),
    })
}
