//! Tokenization module
//!
//! Provides the `Tokenizer` capability trait and the lowercase sentence
//! tokenizer implementation.

pub mod lowercase;

pub use lowercase::{
    is_sentence_terminator, tokenize_text, LowercaseSentenceTokenizer, Tokenizer,
    SENTENCE_TERMINATOR,
};
