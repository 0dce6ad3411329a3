/// Commands that can be parsed from REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Exit the session
    Quit,

    /// Show help information
    Help,

    /// Tokenize a file (plain text, PDF, EPUB supported)
    LoadFile(String),

    /// Tokenize the clipboard contents
    LoadClipboard,

    /// Tokenize the input line itself
    Text(String),

    /// Unrecognized `:` command
    Unknown(String),
}
