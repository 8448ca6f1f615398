//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a classification rule for a fixed category
//!
//! These macros reduce boilerplate in the classifier implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The Category tag
/// * `$text` - The token's lexeme text
/// * `$line` - The 1-based line number
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::IntegerConstant, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $text:expr, $line:expr) => {
        Token {
            category: $category,
            text: $text,
            line: $line,
        }
    };
}

/// Creates a classification rule that tags every matching word with a
/// fixed category.
///
/// Rules whose category echoes the word itself (keywords, punctuators)
/// use a named handler function instead.
///
/// # Arguments
///
/// * `$pattern` - The anchored regex the word must match in full
/// * `$category` - The Category to assign
///
/// # Example
///
/// ```ignore
/// ClassRule {
///     pattern: Regex::new(r"^\d+$").unwrap(),
///     handler: |_| Category::IntegerConstant,
/// }
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $category:expr) => {
        ClassRule {
            pattern: Regex::new($pattern).unwrap(),
            handler: |_word: &str| $category,
        }
    };
}
