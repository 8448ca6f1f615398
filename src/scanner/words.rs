use std::fmt::Display;

/// Standalone `$` words are upstream placeholders meaning "ignore"; the
/// scanner passes them through and the classifier drops them.
pub const IGNORE_MARKER: &str = "$";

/// Multi-character operator spellings, tried before the separator table
/// so `+=` lexes as one word rather than `+` then `=`. Order is the
/// matching contract.
pub const COMPOUND_OPERATORS: [&str; 12] = [
    "++", "--", "+=", "-=", "==", "!=", ">=", "<=", "/=", "*=", "%=", "^=",
];

/// Punctuators and operators that stand alone as words and terminate
/// free-form word extraction. Order is the matching contract.
pub const SEPARATORS: [&str; 33] = [
    "[", "]", "(", ")", "{", "}", ",", ";", ":", "+", "-", "*", "/", "^", "%", "=", "==", "!=",
    "<", ">", ">=", "<=", "+=", "-=", "/=", "*=", "%=", "^=", "++", "--", "&", "!", "||",
];

/// A single item of the scanner's output stream.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Lexeme {
    /// A contiguous run of source text: an identifier, literal, operator
    /// or punctuator, not yet classified.
    Word(String),
    /// Synthetic marker for a line break consumed with the surrounding
    /// whitespace. Never becomes a token.
    Newline,
}

impl Lexeme {
    pub fn word(text: &str) -> Lexeme {
        Lexeme::Word(String::from(text))
    }

    pub fn is_marker(&self) -> bool {
        match self {
            Lexeme::Word(text) => text == IGNORE_MARKER,
            Lexeme::Newline => true,
        }
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lexeme::Word(text) => write!(f, "{}", text),
            Lexeme::Newline => write!(f, "newline"),
        }
    }
}
