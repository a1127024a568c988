use std::path::{Path, PathBuf};

use super::source_loader::{LoadError, load_source};

#[test]
fn reads_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let source = load_source(&path).unwrap();

    assert_eq!(source.name, path.to_string_lossy());
    assert!(source.text.contains("name = \"curly-cli\""));
}

#[test]
fn missing_file() {
    let err = load_source(Path::new("does/not/exist.json")).err().unwrap();

    assert!(matches!(&err, LoadError::File { path, .. } if path == "does/not/exist.json"));
    assert!(
        err.to_string()
            .starts_with("failed to read 'does/not/exist.json': "),
        "{err}"
    );
}
