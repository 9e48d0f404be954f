//! Fixture utilities

use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the checked-in fixtures, optionally joined with `sub`
pub fn testdata_dir(sub: &str) -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata");
    if sub.is_empty() { root } else { root.join(sub) }
}

/// Create a temporary project directory holding the given files
pub fn write_project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
    temp_dir
}
