//! Token output rendering for the driver

/// How a token sequence is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line (default), suited to piping into other tools
    Lines,

    /// All tokens on one line as a bracketed list
    Inline,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Lines
    }
}

/// Render tokens in the requested format.
pub fn format_tokens(tokens: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Lines => tokens.join("\n"),
        OutputFormat::Inline => format!("[{}]", tokens.join(", ")),
    }
}
