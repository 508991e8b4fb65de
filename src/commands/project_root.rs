use std::path::{Path, PathBuf};

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `persistgen.toml`
/// - `Cargo.toml`
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(persistgen::config::CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("Cargo.toml").is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
