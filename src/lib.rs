#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::classifier::classifier::tokenize;
use crate::classifier::tokens::Token;
use crate::errors::errors::{Error, ErrorTip};
use crate::scanner::scanner::split;

pub mod classifier;
pub mod errors;
pub mod macros;
pub mod scanner;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<shell>")))
    }
}

/// Runs the whole pipeline: source text in, classified tokens out.
///
/// Scanning stops at the first unclosed block comment or string literal;
/// the tokens built from the words accumulated up to that point are still
/// returned alongside the error.
pub fn lex(source: &str, file: Option<String>) -> (Vec<Token>, Option<Error>) {
    let (words, error) = split(source, file);
    (tokenize(&words), error)
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    if pos >= source.len() {
        panic!("Position exceeds source length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing position");
}


pub fn display_error(error: Error, source: &str) {
    /*
        error: message
        -> final.dyno
           |
        20 | let a = "oops;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos - removed_whitespace + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
