use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnclosedComment => "UnclosedComment",
            ErrorImpl::UnclosedStringLiteral => "UnclosedStringLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnclosedComment => ErrorTip::Suggestion(String::from(
                "A `*~` block comment must be closed with a matching `*~`",
            )),
            ErrorImpl::UnclosedStringLiteral => ErrorTip::Suggestion(String::from(
                "A string literal must be closed with a `\"` before the end of the file",
            )),
        }
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unclosed multi-line comment")]
    UnclosedComment,
    #[error("unclosed string literal")]
    UnclosedStringLiteral,
}
