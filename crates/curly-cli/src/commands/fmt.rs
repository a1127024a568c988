//! Render a document in canonical form.

use std::fs;
use std::path::PathBuf;

use curly_lib::render;

use super::run_common::{document, exit_with_error, load_or_exit};

pub struct FmtArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub depth_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let source = load_or_exit(&args.input);

    let root = match document(&source, args.strict, args.depth_limit).parse() {
        Ok(root) => root,
        Err(e) => exit_with_error(&e, &source, args.color),
    };

    let mut output = render(&root);
    output.push('\n');

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::debug!(path = %path.display(), bytes = output.len(), "wrote output");
        }
        None => print!("{}", output),
    }
}
