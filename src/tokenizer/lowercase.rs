//! Lowercase sentence tokenization
//!
//! Converts text to lowercase and splits it into word tokens and standalone
//! `"."` sentence-terminator tokens. A period only becomes its own token
//! when it occurs at the end of a word; internal periods ("dr.smith's",
//! "3.14") stay inside the word token.

use std::io::{self, BufRead};

/// The sentence terminator emitted as its own token.
pub const SENTENCE_TERMINATOR: &str = ".";

/// Returns true if an emitted token is the standalone sentence terminator.
pub fn is_sentence_terminator(token: &str) -> bool {
    token == SENTENCE_TERMINATOR
}

/// Core trait for tokenization backends
///
/// A tokenizer consumes a line-oriented text source and produces the full
/// token sequence in source order. Reading happens to exhaustion before any
/// tokens are returned; a read failure aborts the call and propagates the
/// underlying error with no partial token sequence.
pub trait Tokenizer {
    /// Tokenize all text available from `reader`.
    fn tokenize<R: BufRead>(&self, reader: R) -> io::Result<Vec<String>>;
}

/// Tokenizer that lowercases its input and emits trailing periods as
/// separate `"."` tokens.
///
/// Lines read from the source are appended with no separator between them:
/// a word split across a line break merges into a single raw word. This
/// matches the reference line-joining behavior and is pinned by tests.
pub struct LowercaseSentenceTokenizer;

impl Tokenizer for LowercaseSentenceTokenizer {
    fn tokenize<R: BufRead>(&self, reader: R) -> io::Result<Vec<String>> {
        let mut buffer = String::new();

        for line in reader.lines() {
            // No separator inserted between lines.
            buffer.push_str(&line?);
        }

        Ok(tokenize_text(&buffer))
    }
}

/// Tokenize an in-memory text buffer.
///
/// The buffer is lowercased as a whole, then split on runs of whitespace.
/// For each raw word ending in a period, the word content (if any) is
/// emitted followed by a `"."` token. Only the single final period is
/// stripped: `"wait.."` yields `["wait.", "."]`, and a bare `"."` yields
/// just the terminator token. No empty token is ever produced.
pub fn tokenize_text(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();

    for word in lowered.split_whitespace() {
        if let Some(content) = word.strip_suffix('.') {
            if !content.is_empty() {
                tokens.push(content.to_string());
            }
            tokens.push(SENTENCE_TERMINATOR.to_string());
        } else {
            tokens.push(word.to_string());
        }
    }

    tokens
}
