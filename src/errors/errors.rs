use std::fmt::Display;

use thiserror::Error;

/// A lexical error paired with the 1-based line it was reported on.
///
/// Errors are plain values collected during a scan; nothing in the
/// lexer aborts on them, and nothing global records them.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorKind,
    line: u32,
}

impl Error {
    pub fn new(kind: ErrorKind, line: u32) -> Self {
        Error {
            internal_error: kind,
            line,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.internal_error
    }

    pub fn name(&self) -> &str {
        match &self.internal_error {
            ErrorKind::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorKind::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn tip(&self) -> ErrorTip {
        match &self.internal_error {
            // The message already names the character; there is nothing
            // useful to suggest.
            ErrorKind::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorKind::UnterminatedString => {
                ErrorTip::Suggestion(String::from("did you forget a closing `\"`?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] {}", self.line, self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
}
