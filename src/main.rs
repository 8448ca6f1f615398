use std::{env, fs::read_to_string, process};

use dyno_lexer::{
    classifier::classifier::tokenize,
    display_error,
    scanner::{scanner::split, words::Lexeme},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let (words, scan_error) = split(&source, Some(String::from(file_name)));

    println!("List of Words:");
    for word in words.iter() {
        if word.is_marker() {
            continue;
        }
        println!("{}", word);
    }

    let tokens = tokenize(&words);

    println!("----------Tokenization----------");
    println!();
    for token in tokens.iter() {
        println!(
            "ClassPart: {}  ValuePart: {}   LineNo: {}",
            token.category, token.text, token.line
        );
    }

    if let Some(error) = scan_error {
        display_error(error, &source);
        process::exit(1);
    }
}
