//! Lexical analysis for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into the token sequence consumed by the parser. It handles:
//!
//! - Single-pass tokenization with one character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling
//! - Lexical error recovery (the scan continues past bad input)

pub mod lexer;
pub mod tokens;
