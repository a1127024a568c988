//! Shared plumbing for the document commands.

use std::path::Path;

use curly_lib::{Document, Error};

use super::source_loader::{SourceFile, load_source};

/// Loads the input or exits with an I/O error.
pub fn load_or_exit(path: &Path) -> SourceFile {
    match load_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn document(source: &SourceFile, strict: bool, depth_limit: Option<u32>) -> Document<'_> {
    Document::new(&source.text)
        .strict(strict)
        .with_depth_limit(depth_limit)
}

/// Prints the annotated diagnostic and exits with status 1.
pub fn exit_with_error(error: &Error, source: &SourceFile, color: bool) -> ! {
    eprint!(
        "{}",
        error
            .printer()
            .source(&source.text)
            .path(&source.name)
            .colored(color)
            .render()
    );
    std::process::exit(1);
}
