//! Error types and error handling for the lexer.
//!
//! This module defines the fatal scan errors the splitter can raise.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for unterminated constructs
//! - Helpful error messages and suggestions
//!
//! Classification never raises an error here: a word that matches no rule
//! becomes an `InvalidToken` token and processing continues.

pub mod errors;
