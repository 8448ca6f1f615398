//! Raw-word splitting for the lexer.
//!
//! This module contains the scanner that splits source text into a flat
//! sequence of raw words and synthetic line markers. It handles:
//!
//! - Whitespace skipping with `Newline` markers for line tracking
//! - Single-line (`~`) and block (`*~ ... *~`) comments
//! - String literals, emitted whole with their quotes
//! - Compound operators, separators and free-form word extraction
//! - Fatal errors for unterminated comments and string literals
//!
//! The scanner owns all character-level truth; the classifier never
//! re-reads the source text.

pub mod scanner;
pub mod words;
