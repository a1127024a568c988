//! Validate a document.

use std::path::PathBuf;

use super::run_common::{document, exit_with_error, load_or_exit};

pub struct CheckArgs {
    pub input: PathBuf,
    pub strict: bool,
    pub depth_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(&args.input);

    if let Err(e) = document(&source, args.strict, args.depth_limit).parse() {
        exit_with_error(&e, &source, args.color);
    }

    // Silent on success (like cargo check)
    tracing::debug!(input = %source.name, "document is valid");
}
