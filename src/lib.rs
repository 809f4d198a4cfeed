#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};
use crate::lexer::lexer::tokenize;

pub mod errors;
pub mod lexer;
pub mod repl;

/// Fetch the 1-based `line` of `source` for display, without the
/// trailing newline.
pub fn source_line(source: &str, line: u32) -> Option<&str> {
    source.lines().nth((line as usize).checked_sub(1)?)
}

/// Scan `source`, print the resulting tokens, and render any lexical
/// errors. Returns whether at least one error was reported, so the
/// caller can decide the exit status.
pub fn run(source: &str, origin: &str) -> bool {
    let (tokens, errors) = tokenize(source);

    for token in &tokens {
        println!("{}", token);
    }

    for error in &errors {
        display_error(error, source, origin);
    }

    !errors.is_empty()
}

pub fn display_error(error: &Error, source: &str, origin: &str) {
    /*
        Error: message
        -> script.lox
           |
        20 | var a = #;
           |
    */

    let line = error.line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.tip() {
        println!("Error: {}", error.name());
    } else {
        println!("Error: {} ({})", error.name(), error.tip());
    }
    println!("-> {}", origin);
    println!("{:>padding$}", "|");

    if let Some(line_text) = source_line(source, line) {
        println!("{} | {}", line_string, line_text.trim());
    }

    println!("{:>padding$}", "|");
}
