use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::words::{Lexeme, COMPOUND_OPERATORS, SEPARATORS};

/// Opens a single-line comment running to the end of the line.
const LINE_COMMENT: char = '~';
/// Opens and closes a block comment.
const BLOCK_COMMENT: &str = "*~";

pub struct Scanner {
    words: Vec<Lexeme>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            words: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, word: Lexeme) {
        self.words.push(word);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && self.at().is_whitespace() {
            let c = self.at();
            if c == '\n' {
                self.push(Lexeme::Newline);
            }
            self.advance_n(c.len_utf8());
        }
    }

    /// Stops before the trailing newline so the whitespace pass still
    /// emits its line marker.
    fn skip_line_comment(&mut self) {
        match self.remainder().find('\n') {
            Some(offset) => self.advance_n(offset),
            None => self.pos = self.source.len(),
        }
    }

    /// Embedded newlines are absorbed without markers; lines inside a
    /// block comment are not counted.
    fn skip_block_comment(&mut self) -> Result<(), Error> {
        let start = self.pos;
        self.advance_n(BLOCK_COMMENT.len());

        while !self.at_eof() && !self.remainder().starts_with(BLOCK_COMMENT) {
            self.advance_n(self.at().len_utf8());
        }

        if self.at_eof() {
            return Err(Error::new(
                ErrorImpl::UnclosedComment,
                Position(start as u32, Rc::clone(&self.file)),
            ));
        }

        self.advance_n(BLOCK_COMMENT.len());
        Ok(())
    }

    /// Emits the quoted span as one word, both quotes included. There is
    /// no escape processing: the literal ends at the first `"`.
    fn scan_string_literal(&mut self) -> Result<(), Error> {
        let start = self.pos;
        self.advance_n(1);

        while !self.at_eof() && self.at() != '"' {
            self.advance_n(self.at().len_utf8());
        }

        if self.at_eof() {
            return Err(Error::new(
                ErrorImpl::UnclosedStringLiteral,
                Position(start as u32, Rc::clone(&self.file)),
            ));
        }

        self.advance_n(1);
        let literal = String::from(&self.source[start..self.pos]);
        self.push(Lexeme::Word(literal));
        Ok(())
    }

    /// First-match against the compound operator table, then the
    /// separator table. Compound operators go first so the match is
    /// longest-effective: every multi-character separator except `||`
    /// is a compound operator, and `|` alone is not a separator.
    fn match_operator(&self) -> Option<&'static str> {
        let rest = self.remainder();

        for op in COMPOUND_OPERATORS {
            if rest.starts_with(op) {
                return Some(op);
            }
        }

        for separator in SEPARATORS {
            if rest.starts_with(separator) {
                return Some(separator);
            }
        }

        None
    }

    fn separator_at_cursor(&self) -> bool {
        let rest = self.remainder();
        SEPARATORS.iter().any(|separator| rest.starts_with(separator))
    }

    /// Greedily consumes a maximal run of characters that are neither
    /// whitespace nor the start of any separator. Covers identifiers,
    /// numbers and any other free-form word.
    fn scan_word(&mut self) {
        let start = self.pos;

        while !self.at_eof() && !self.at().is_whitespace() && !self.separator_at_cursor() {
            self.advance_n(self.at().len_utf8());
        }

        let word = String::from(&self.source[start..self.pos]);
        if !word.is_empty() {
            self.push(Lexeme::Word(word));
        }
    }
}

/// Splits source text into raw words and synthetic line markers.
///
/// Comment and string detection take priority over separator matching at
/// each cursor position. On an unclosed block comment or string literal,
/// scanning stops and the words accumulated so far are returned alongside
/// the error.
pub fn split(source: &str, file: Option<String>) -> (Vec<Lexeme>, Option<Error>) {
    let mut scanner = Scanner::new(String::from(source), file);

    while !scanner.at_eof() {
        scanner.skip_whitespace();

        if scanner.at_eof() {
            break;
        }

        if scanner.at() == LINE_COMMENT {
            scanner.skip_line_comment();
        } else if scanner.remainder().starts_with(BLOCK_COMMENT) {
            if let Err(error) = scanner.skip_block_comment() {
                return (scanner.words, Some(error));
            }
        } else if scanner.at() == '"' {
            if let Err(error) = scanner.scan_string_literal() {
                return (scanner.words, Some(error));
            }
        } else {
            while let Some(op) = scanner.match_operator() {
                scanner.push(Lexeme::word(op));
                scanner.advance_n(op.len());
            }

            if !scanner.at_eof() && !scanner.at().is_whitespace() {
                scanner.scan_word();
            }
        }
    }

    (scanner.words, None)
}
