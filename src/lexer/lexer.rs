use std::{iter::Peekable, str::CharIndices};

use crate::errors::errors::{Error, ErrorKind};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    /// Byte offset of the current lexeme's first character.
    start: usize,
    /// Byte offset just past the last consumed character.
    current: usize,
    line: u32,
    /// Line of the current lexeme's first character. Tokens are stamped
    /// with this, so a multi-line string carries its opening line even
    /// though `line` has moved on by the time it is pushed.
    start_line: u32,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            tokens: vec![],
            errors: vec![],
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    fn scan_token(&mut self, c: char) {
        match c {
            '(' => self.push_token(TokenKind::LeftParen),
            ')' => self.push_token(TokenKind::RightParen),
            '{' => self.push_token(TokenKind::LeftBrace),
            '}' => self.push_token(TokenKind::RightBrace),
            ',' => self.push_token(TokenKind::Comma),
            '.' => self.push_token(TokenKind::Dot),
            '-' => self.push_token(TokenKind::Minus),
            '+' => self.push_token(TokenKind::Plus),
            ';' => self.push_token(TokenKind::Semicolon),
            '*' => self.push_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.push_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.push_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.push_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.push_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    // A line comment runs to the end of the line. The
                    // newline itself is left for the next step so it still
                    // bumps the line counter.
                    while self.advance_if(|c| c != '\n').is_some() {}
                } else {
                    self.push_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string_literal(),
            c if is_digit(c) => self.number_literal(),
            c if is_alpha(c) => self.identifier(),
            c => self.push_error(ErrorKind::UnexpectedCharacter { character: c }),
        }
    }

    fn identifier(&mut self) {
        while self.advance_if(|c| is_alpha(c) || is_digit(c)).is_some() {}

        let kind = RESERVED_LOOKUP
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.push_token(kind);
    }

    fn number_literal(&mut self) {
        while self.advance_if(is_digit).is_some() {}

        // Only consume the dot when a fractional part follows; `12.`
        // leaves the dot for the next token.
        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            self.advance();
            while self.advance_if(is_digit).is_some() {}
        }

        // Always valid f64 syntax at this point, and str::parse is
        // locale-independent.
        let value: f64 = self.lexeme().parse().unwrap();
        self.push_literal(TokenKind::Number, Literal::Number(value));
    }

    fn string_literal(&mut self) {
        loop {
            match self.advance() {
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => {
                    self.push_error(ErrorKind::UnterminatedString);
                    return;
                }
            }
        }

        // Strip the surrounding quotes.
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_literal(TokenKind::String, Literal::Text(value));
    }

    fn push_token(&mut self, kind: TokenKind) {
        self.push_literal(kind, Literal::None);
    }

    fn push_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal,
            line: self.start_line,
        });
    }

    fn push_error(&mut self, kind: ErrorKind) {
        self.errors.push(Error::new(kind, self.line));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next().map(|(index, c)| {
            self.current = index + c.len_utf8();
            c
        })
    }

    fn advance_if(&mut self, f: impl FnOnce(char) -> bool) -> Option<char> {
        self.chars.next_if(|(_, c)| f(*c)).map(|(index, c)| {
            self.current = index + c.len_utf8();
            c
        })
    }

    fn match_char(&mut self, expected: char) -> bool {
        self.advance_if(|c| c == expected).is_some()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Scan `source` into its full token sequence. Lexical errors are
/// collected alongside the tokens rather than aborting the pass, so one
/// bad character does not hide later ones. The token vector always ends
/// with a single EOF token.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lexer = Lexer::new(source);

    loop {
        lexer.start = lexer.current;
        lexer.start_line = lexer.line;
        match lexer.advance() {
            Some(c) => lexer.scan_token(c),
            None => break,
        }
    }

    lexer.tokens.push(Token {
        kind: TokenKind::EOF,
        lexeme: String::new(),
        literal: Literal::None,
        line: lexer.line,
    });

    (lexer.tokens, lexer.errors)
}
