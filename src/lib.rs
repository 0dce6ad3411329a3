//! Lowercase sentence tokenizer for NLP pipelines.
//!
//! Reads free-form text and produces a flat token sequence of lowercase
//! words and standalone `"."` sentence terminators, distinguishing trailing
//! sentence punctuation from punctuation embedded inside a word
//! (abbreviations, possessives, URLs). Input can come from any `BufRead`,
//! or from the bundled plain-text / PDF / EPUB / clipboard loaders.

pub mod input;
pub mod output;
pub mod repl;
pub mod tokenizer;

pub use input::{LoadError, LoadedDocument};
pub use tokenizer::{
    is_sentence_terminator, tokenize_text, LowercaseSentenceTokenizer, Tokenizer,
};
