//! Integration tests for the full lexing pipeline.
//!
//! These tests drive the public API from source text through scanning and
//! classification, covering the end-to-end scenarios and the invariants
//! the token stream must uphold.

use dyno_lexer::{
    classifier::tokens::Category,
    lex,
    scanner::scanner::split,
};

#[test]
fn lex_simple_declaration() {
    let (tokens, error) = lex("int x = 5;\n", Some("test.dyno".to_string()));

    assert!(error.is_none());
    assert_eq!(tokens.len(), 5);

    assert_eq!(tokens[0].category, Category::DataType);
    assert_eq!(tokens[0].text, "int");
    assert_eq!(tokens[0].line, 1);

    assert_eq!(tokens[1].category, Category::Identifier);
    assert_eq!(tokens[1].text, "x");

    assert_eq!(tokens[2].category, Category::AssignmentOperator);
    assert_eq!(tokens[2].text, "=");

    assert_eq!(tokens[3].category, Category::IntegerConstant);
    assert_eq!(tokens[3].text, "5");

    assert_eq!(tokens[4].category, Category::Punctuator(";"));
    assert_eq!(tokens[4].text, ";");
    assert_eq!(tokens[4].line, 1);
}

#[test]
fn lex_line_comment_keeps_line_count() {
    // The word after a single-line comment still lands on its own line:
    // the comment does not swallow the newline's marker.
    let (tokens, error) = lex("~ comment\nx", None);

    assert!(error.is_none());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "x");
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn lex_string_literal_keeps_quotes() {
    let (tokens, error) = lex("\"hello world\"", None);

    assert!(error.is_none());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, Category::StringLiteral);
    assert_eq!(tokens[0].text, "\"hello world\"");
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn lex_block_comment_absorbs_newlines() {
    // Lines inside a block comment are not counted; `y` stays on line 1.
    let (tokens, error) = lex("*~ block \n comment *~ y", None);

    assert!(error.is_none());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, Category::Identifier);
    assert_eq!(tokens[0].text, "y");
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn lex_unclosed_string_literal() {
    let (tokens, error) = lex("\"abc", None);

    assert!(tokens.is_empty());
    assert_eq!(error.unwrap().get_error_name(), "UnclosedStringLiteral");
}

#[test]
fn lex_unclosed_block_comment_returns_partial_tokens() {
    let (tokens, error) = lex("let x = 1; *~ oops", None);

    assert_eq!(error.unwrap().get_error_name(), "UnclosedComment");
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].category, Category::Keyword("let"));
    assert_eq!(tokens[3].text, "1");
}

#[test]
fn lex_compound_assignment() {
    let (tokens, error) = lex("x+=1", None);

    assert!(error.is_none());
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].category, Category::Identifier);
    assert_eq!(tokens[1].category, Category::AssignmentOperator);
    assert_eq!(tokens[1].text, "+=");
    assert_eq!(tokens[2].category, Category::IntegerConstant);
}

#[test]
fn lex_small_program() {
    let source = r#"class Counter {
    public int count = 0;
    function bump() {
        ~ step by one
        count += 1;
    }
}
"#;
    let (tokens, error) = lex(source, Some("counter.dyno".to_string()));

    assert!(error.is_none());

    assert_eq!(tokens[0].category, Category::Keyword("class"));
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].category, Category::Identifier);
    assert_eq!(tokens[1].text, "Counter");

    let access = tokens
        .iter()
        .find(|token| token.category == Category::AccessModifier)
        .unwrap();
    assert_eq!(access.text, "public");
    assert_eq!(access.line, 2);

    let bump = tokens.iter().find(|token| token.text == "bump").unwrap();
    assert_eq!(bump.category, Category::Identifier);
    assert_eq!(bump.line, 3);

    let plus_equals = tokens.iter().find(|token| token.text == "+=").unwrap();
    assert_eq!(plus_equals.category, Category::AssignmentOperator);
    assert_eq!(plus_equals.line, 5);
}

#[test]
fn lex_line_numbers_are_non_decreasing() {
    let source = "var a = 1;\nvar b = a + 2;\n\nif a < b {\n    b = 0;\n}\n";
    let (tokens, error) = lex(source, None);

    assert!(error.is_none());
    assert_eq!(tokens[0].line, 1);

    for pair in tokens.windows(2) {
        assert!(pair[0].line <= pair[1].line);
    }
}

#[test]
fn lex_token_count_bounded_by_word_count() {
    let source = "let x = 1;\n$ let y = 2;\n";
    let (words, _) = split(source, None);
    let (tokens, _) = lex(source, None);

    let real_words = words.iter().filter(|word| !word.is_marker()).count();
    assert_eq!(tokens.len(), real_words);
    assert!(tokens.len() <= words.len());
}

#[test]
fn lex_is_deterministic() {
    let source = "while true { n -= 1; }\n";
    let (first, _) = lex(source, None);
    let (second, _) = lex(source, None);

    assert_eq!(first, second);
}

#[test]
fn lex_invalid_word_is_reported_not_fatal() {
    let (tokens, error) = lex("x @ y", None);

    assert!(error.is_none());
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].category, Category::Invalid);
    assert_eq!(tokens[2].category, Category::Identifier);
}

#[test]
fn lex_float_and_integer_literals() {
    let (tokens, error) = lex("float pi = 3.14; int n = 3;", None);

    assert!(error.is_none());
    let pi = tokens.iter().find(|token| token.text == "3.14").unwrap();
    assert_eq!(pi.category, Category::Float);

    let n = tokens.iter().find(|token| token.text == "3").unwrap();
    assert_eq!(n.category, Category::IntegerConstant);
}
