use regex::Regex;

use crate::scanner::words::{Lexeme, IGNORE_MARKER};
use crate::{MK_RULE, MK_TOKEN};

use super::tokens::{Category, Token, KEYWORD_LOOKUP, PUNCTUATOR_LOOKUP};

pub type RuleHandler = fn(&str) -> Category;

/// One classification rule: an anchored pattern the whole word must
/// match, and the handler producing the category tag.
#[derive(Clone)]
pub struct ClassRule {
    pattern: Regex,
    handler: RuleHandler,
}

pub struct Classifier {
    rules: Vec<ClassRule>,
    tokens: Vec<Token>,
    line: u32,
}

impl Classifier {
    pub fn new() -> Classifier {
        Classifier {
            line: 1,
            tokens: vec![],
            // Rule order is a correctness contract: several patterns
            // overlap (a float also contains a digit run, `break` also
            // has identifier shape) and the first match wins.
            rules: vec![
                MK_RULE!(r"^(int|string|float|double|char)$", Category::DataType),
                MK_RULE!(r"^(true|false)$", Category::Boolean),
                MK_RULE!(r"^[-+]?\d*\.\d+([eE][-+]?\d+)?$", Category::Float),
                MK_RULE!(r#"(?s)^".*"$"#, Category::StringLiteral),
                ClassRule {
                    pattern: Regex::new(r"^[(){}\[\],:;.]$").unwrap(),
                    handler: punctuator_handler,
                },
                MK_RULE!(r"^(public|private|protected)$", Category::AccessModifier),
                MK_RULE!(r"^(break|continue)$", Category::LoopControl),
                ClassRule {
                    pattern: Regex::new(
                        r"^(var|let|const|if|else|elif|while|function|return|null|main|Dyno|this|class|enum|case|switch|super|try|except|finally|catch|new|interface)$",
                    )
                    .unwrap(),
                    handler: keyword_handler,
                },
                MK_RULE!(r"^[a-zA-Z_]\w*$", Category::Identifier),
                MK_RULE!(r"^\d+$", Category::IntegerConstant),
                MK_RULE!(r"^[+\-*/%^]$", Category::ArithmeticOperator),
                MK_RULE!(r"^(==|!=|<|>|<=|>=)$", Category::ComparisonOperator),
                MK_RULE!(r"^(&|\|\||!)$", Category::LogicalOperator),
                MK_RULE!(r"^[+\-*/%^]?=$", Category::AssignmentOperator),
            ],
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Ordered first-match-wins dispatch; a word no rule matches is
    /// `Invalid`, which is reported, not fatal.
    pub fn classify(&self, word: &str) -> Category {
        for rule in self.rules.iter() {
            if rule.pattern.is_match(word) {
                return (rule.handler)(word);
            }
        }

        Category::Invalid
    }
}

/// Echoes the punctuator's own spelling as its category tag.
fn punctuator_handler(word: &str) -> Category {
    match PUNCTUATOR_LOOKUP.get(word) {
        Some(&text) => Category::Punctuator(text),
        None => Category::Invalid,
    }
}

/// Echoes the keyword's own spelling as its category tag.
fn keyword_handler(word: &str) -> Category {
    match KEYWORD_LOOKUP.get(word) {
        Some(&text) => Category::Keyword(text),
        None => Category::Invalid,
    }
}

/// Tags every real word in the stream and assigns 1-based line numbers.
///
/// `Newline` markers advance the line counter and `$` words are
/// discarded; neither produces a token. Line numbers are non-decreasing
/// across the output.
pub fn tokenize(words: &[Lexeme]) -> Vec<Token> {
    let mut classifier = Classifier::new();

    for word in words {
        match word {
            Lexeme::Newline => {
                classifier.line += 1;
            }
            Lexeme::Word(text) => {
                if text == IGNORE_MARKER {
                    continue;
                }

                let category = classifier.classify(text);
                let line = classifier.line;
                classifier.push(MK_TOKEN!(category, text.clone(), line));
            }
        }
    }

    classifier.tokens
}
