use super::ReplCommand;

/// Parse a REPL input line into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `@filename` → Tokenize file command
/// - `@@` (or a bare `@`) → Tokenize clipboard command
/// - Anything else → the line is text to tokenize
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            _ => ReplCommand::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Text(input.to_string())
    }
}
