use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use sentok::input;
use sentok::output::{format_tokens, OutputFormat};
use sentok::repl::{parse_repl_input, ReplCommand, HELP};
use sentok::tokenizer::tokenize_text;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);

    let result = match args.next() {
        Some(path) => run_file(&path),
        None => run_repl(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sentok: {err}");
            ExitCode::FAILURE
        }
    }
}

/// One-shot mode: tokenize a single document and print one token per line.
fn run_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let document = input::load_path(path)?;
    if !document.tokens.is_empty() {
        println!("{}", format_tokens(&document.tokens, OutputFormat::Lines));
    }
    Ok(())
}

/// Interactive mode: read lines from stdin until `:q` or EOF.
fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("sentok: type text to tokenize, :h for help");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_repl_input(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::LoadFile(path) => report(input::load_path(&path)),
            ReplCommand::LoadClipboard => report(input::clipboard::load()),
            ReplCommand::Text(text) => {
                let tokens = tokenize_text(&text);
                if !tokens.is_empty() {
                    println!("{}", format_tokens(&tokens, OutputFormat::Inline));
                }
            }
            ReplCommand::Unknown(cmd) => eprintln!("unknown command: {cmd} (:h for help)"),
        }
    }

    Ok(())
}

fn report(result: Result<input::LoadedDocument, input::LoadError>) {
    match result {
        Ok(document) => {
            println!("{}", format_tokens(&document.tokens, OutputFormat::Inline));
            println!("{} tokens from {}", document.tokens.len(), document.source);
        }
        Err(err) => eprintln!("load failed: {err}"),
    }
}
