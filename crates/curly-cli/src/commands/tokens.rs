//! Print the token stream of a document.

use std::fmt::Write;
use std::path::PathBuf;

use curly_lib::{Document, Token};

use super::run_common::{exit_with_error, load_or_exit};

pub struct TokensArgs {
    pub input: PathBuf,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_or_exit(&args.input);

    let tokens = match Document::new(&source.text).tokens() {
        Ok(tokens) => tokens,
        Err(e) => exit_with_error(&e, &source, args.color),
    };

    if args.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", format_tokens(&tokens, args.spans));
}

/// One token per line: kind and text, optionally prefixed by the byte range.
pub fn format_tokens(tokens: &[Token<'_>], spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if spans {
            write!(out, "{:?} ", token.span).expect("String write never fails");
        }
        writeln!(out, "{:?} {:?}", token.kind, token.text).expect("String write never fails");
    }
    out
}
