//! Interactive driver commands
//!
//! Provides command definitions and input parsing for the `sentok` REPL.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes; any
//!   other input is treated as text to tokenize in place

pub mod command;
pub mod parser;

pub use command::ReplCommand;
pub use parser::parse_repl_input;

/// Help text printed for `:h` / `:help`.
pub const HELP: &str = "\
commands:
  <text>      tokenize the line and print the tokens
  @<path>     tokenize a file (plain text, .pdf, .epub)
  @@          tokenize the clipboard contents
  :h, :help   show this help
  :q, :quit   exit";
