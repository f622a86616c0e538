use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// `(path relative to the crate root, 1-based line number, line)`.
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn rust_files_under(relative_dir: &str) -> Vec<PathBuf> {
    let mut pending = vec![root().join(relative_dir)];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));
        for entry in entries {
            let path = entry
                .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// Every line of the selected files that `keep` accepts.
fn scan_lines(
    relative_dir: &str,
    include_file: impl Fn(&Path) -> bool,
    keep: impl Fn(&str) -> bool,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    for file in rust_files_under(relative_dir) {
        if !include_file(&file) {
            continue;
        }
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
        hits.extend(
            content
                .lines()
                .enumerate()
                .filter(|&(_, line)| keep(line))
                .map(|(idx, line)| (relative_path(&file), idx + 1, line.to_string())),
        );
    }
    hits
}

pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    scan_lines(relative_dir, |_| true, |line| {
        patterns.iter().any(|p| line.contains(p))
    })
}

pub fn find_lines_containing_except_files(
    relative_dir: &str,
    patterns: &[&str],
    allowed_relative_files: &[&str],
) -> Vec<Hit> {
    let allowed: HashSet<&str> = allowed_relative_files.iter().copied().collect();
    find_lines_containing(relative_dir, patterns)
        .into_iter()
        .filter(|(path, _, _)| !allowed.contains(path.as_str()))
        .collect()
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}

/// Lines in `mod.rs` files other than module declarations, comments and
/// `#[cfg` attributes.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    scan_lines(
        relative_dir,
        |file| file.file_name().is_some_and(|name| name == "mod.rs"),
        |raw| {
            let line = raw.trim();
            !(line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg"))
        },
    )
}
