use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Name used in diagnostics for input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Document text plus the name diagnostics refer to it by.
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

/// Reads `path`, or stdin when it is `-`.
pub fn load_source(path: &Path) -> Result<SourceFile, LoadError> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.display().to_string(),
        source,
    })?;

    Ok(SourceFile {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

fn load_stdin() -> Result<SourceFile, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(LoadError::Stdin)?;

    Ok(SourceFile {
        name: STDIN_NAME.to_string(),
        text,
    })
}
