//! Token classification for the lexer.
//!
//! This module contains the classifier that tags the scanner's raw words
//! with token categories. It handles:
//!
//! - Ordered first-match-wins rule dispatch over the word text
//! - Keyword, literal, operator and punctuator recognition
//! - 1-based line numbers tracked from the scanner's line markers
//! - `InvalidToken` tagging for words no rule recognizes
//!
//! Several rule patterns overlap; the rule order is a correctness
//! contract, not an implementation detail.

pub mod classifier;
pub mod tokens;
