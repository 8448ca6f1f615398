use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    /// Reserved words whose category tag is the keyword itself.
    pub static ref KEYWORD_LOOKUP: HashSet<&'static str> = HashSet::from([
        "var",
        "let",
        "const",
        "if",
        "else",
        "elif",
        "while",
        "function",
        "return",
        "null",
        "main",
        "Dyno",
        "this",
        "class",
        "enum",
        "case",
        "switch",
        "super",
        "try",
        "except",
        "finally",
        "catch",
        "new",
        "interface",
    ]);

    /// Punctuators whose category tag is the punctuator itself.
    pub static ref PUNCTUATOR_LOOKUP: HashSet<&'static str> =
        HashSet::from(["(", ")", "{", "}", "[", "]", ",", ":", ";", "."]);
}

/// The closed set of category tags a token can carry.
///
/// `Keyword` and `Punctuator` echo their own spelling as the tag; every
/// other variant renders as a class name. Downstream consumers
/// discriminate on the rendered tag, so the split is part of the output
/// contract.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    DataType,
    Boolean,
    Float,
    StringLiteral,
    AccessModifier,
    LoopControl,
    Identifier,
    IntegerConstant,
    ArithmeticOperator,
    ComparisonOperator,
    LogicalOperator,
    AssignmentOperator,
    Punctuator(&'static str),
    Keyword(&'static str),
    Invalid,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Punctuator(text) | Category::Keyword(text) => write!(f, "{}", text),
            Category::Invalid => write!(f, "InvalidToken"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub text: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ category: {}, text: {:?}, line: {} }}",
            self.category, self.text, self.line
        )
    }
}
