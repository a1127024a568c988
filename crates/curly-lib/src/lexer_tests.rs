use crate::lexer::{LexError, TokenKind, scan};

fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

fn snapshot_spans(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, spans: bool) -> String {
    let tokens = scan(input).expect("scan should succeed");
    let mut out = String::new();
    for token in tokens {
        if spans {
            out.push_str(&format!(
                "{:?} {:?} {:?}\n",
                token.kind, token.text, token.span
            ));
        } else {
            out.push_str(&format!("{:?} {:?}\n", token.kind, token.text));
        }
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("{ } : ,"), @r#"
    LeftBrace "{"
    RightBrace "}"
    Colon ":"
    Comma ","
    "#);
}

#[test]
fn single_number_field() {
    insta::assert_snapshot!(snapshot(r#"{"a": 1}"#), @r#"
    LeftBrace "{"
    StringLiteral "a"
    Colon ":"
    NumberLiteral "1"
    RightBrace "}"
    "#);
}

#[test]
fn string_text_excludes_quotes() {
    insta::assert_snapshot!(snapshot_spans(r#"{"key": "value"}"#), @r#"
    LeftBrace "{" 0..1
    StringLiteral "key" 1..6
    Colon ":" 6..7
    StringLiteral "value" 8..15
    RightBrace "}" 15..16
    "#);
}

#[test]
fn empty_string() {
    let tokens = scan(r#""" }"#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "");
    assert_eq!(tokens[0].span, 0..2);
}

#[test]
fn whitespace_is_discarded() {
    let input = "{\n\t\"a\" :\r\n 12 ,\n}\n";

    insta::assert_snapshot!(snapshot(input), @r#"
    LeftBrace "{"
    StringLiteral "a"
    Colon ":"
    NumberLiteral "12"
    Comma ","
    RightBrace "}"
    "#);
}

#[test]
fn number_is_maximal_digit_run() {
    insta::assert_snapshot!(snapshot("007 12}"), @r#"
    NumberLiteral "007"
    NumberLiteral "12"
    RightBrace "}"
    "#);
}

#[test]
fn number_followed_by_whitespace_is_not_truncated() {
    let tokens = scan("42\n").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "42");
}

#[test]
fn escaped_quote_terminates_string() {
    insta::assert_snapshot!(snapshot(r#""a\" "b""#), @r#"
    StringLiteral "a\\"
    StringLiteral "b"
    "#);
}

#[test]
fn string_may_span_lines() {
    let tokens = scan("\"line one\nline two\" }").unwrap();
    assert_eq!(tokens[0].text, "line one\nline two");
}

#[test]
fn non_ascii_inside_string() {
    let tokens = scan(r#"{"név": "こんにちは"}"#).unwrap();
    assert_eq!(tokens[1].text, "név");
    assert_eq!(tokens[3].text, "こんにちは");
}

#[test]
fn empty_input() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan(" \n\t\r ").unwrap().is_empty());
}

#[test]
fn truncated_number() {
    let err = scan("42").unwrap_err();
    assert_eq!(err, LexError::TruncatedNumber { span: 0..2 });
}

#[test]
fn truncated_number_after_tokens() {
    let err = scan(r#"{"a": 17"#).unwrap_err();
    assert_eq!(err, LexError::TruncatedNumber { span: 6..8 });
}

#[test]
fn unterminated_string() {
    let err = scan(r#"{"a": "unterminated"#).unwrap_err();
    assert_eq!(err, LexError::UnterminatedString { span: 6..19 });
}

#[test]
fn unexpected_character() {
    let err = scan(r#"{"a": true}"#).unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            ch: 't',
            span: 6..7
        }
    );
}

#[test]
fn unexpected_character_non_ascii() {
    let err = scan("{é}").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            ch: 'é',
            span: 1..3
        }
    );
}

#[test]
fn rejects_dialect_exclusions() {
    for input in ["[1]}", "-1}", "null}", "1.5}"] {
        let err = scan(input).unwrap_err();
        assert!(
            matches!(err, LexError::UnexpectedCharacter { .. }),
            "{input}: {err:?}"
        );
    }
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(scan("42").unwrap_err().to_string(), @"input ends with a number; expected `}` after it");
    insta::assert_snapshot!(scan("\"abc").unwrap_err().to_string(), @"unterminated string literal");
    insta::assert_snapshot!(scan("@").unwrap_err().to_string(), @"unexpected character `@`");
}
