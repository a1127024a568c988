//! Print the parsed tree of a document.

use std::path::PathBuf;

use super::run_common::{document, exit_with_error, load_or_exit};

pub struct AstArgs {
    pub input: PathBuf,
    pub strict: bool,
    pub depth_limit: Option<u32>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = load_or_exit(&args.input);

    let root = match document(&source, args.strict, args.depth_limit).parse() {
        Ok(root) => root,
        Err(e) => exit_with_error(&e, &source, args.color),
    };

    if args.json {
        match serde_json::to_string_pretty(&root) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", root.printer().dump());
}
