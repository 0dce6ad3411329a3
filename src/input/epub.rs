use super::{LoadError, LoadedDocument};
use crate::tokenizer::tokenize_text;
use std::path::Path;

/// Load and tokenize an EPUB file using the epub crate.
///
/// All chapters are extracted in order, stripped of HTML markup, and joined
/// with blank lines before tokenization.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc = epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();

    if num_chapters == 0 {
        return Err(LoadError::EpubParse("no chapters in EPUB".to_string()));
    }

    let mut content = String::new();

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }

        if let Some((chapter_html, _mime)) = doc.get_current_str() {
            let plain = extract_plain_text(&chapter_html);
            if !plain.is_empty() {
                if !content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&plain);
            }
        }
    }

    if content.is_empty() {
        return Err(LoadError::EpubParse(
            "no extractable text content in EPUB".to_string(),
        ));
    }

    Ok(LoadedDocument {
        tokens: tokenize_text(&content),
        source: format!("epub:{}", path.display()),
    })
}

/// Strip HTML tags from chapter markup, keeping only text content.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        if c == '<' {
            in_tag = true;
        } else if c == '>' {
            in_tag = false;
        } else if !in_tag {
            result.push(c);
        }
    }

    result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epub_load_nonexistent_file() {
        let result = load("/nonexistent/path/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_extract_plain_text_strips_tags() {
        let html = "<html><body><p>Hello World</p></body></html>";
        let result = extract_plain_text(html);
        assert!(result.contains("Hello World"));
        assert!(!result.contains('<'));
    }

    #[test]
    fn test_extract_plain_text_drops_blank_lines() {
        let html = "<p>First.</p>\n\n   \n<p>Second.</p>";
        let result = extract_plain_text(html);
        assert_eq!(result, "First.\nSecond.");
    }

    #[test]
    fn test_extracted_chapter_tokenizes() {
        let html = "<h1>Chapter One.</h1>\n<p>It was a dark night.</p>";
        let tokens = tokenize_text(&extract_plain_text(html));
        assert_eq!(
            tokens,
            vec!["chapter", "one", ".", "it", "was", "a", "dark", "night", "."]
        );
    }
}
