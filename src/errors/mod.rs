//! Error types and error handling for the lexical front end.
//!
//! This module defines the lexical error values produced during a scan.
//! It includes:
//!
//! - Error structures with source line information
//! - Specific error variants for each recognition failure
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
