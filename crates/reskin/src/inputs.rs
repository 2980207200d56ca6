//! Input file discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

/// A source file to transpile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Path to read from
    pub path: PathBuf,

    /// Path of the output relative to the output directory
    pub relative: PathBuf,
}

/// Expand the command line paths into source files.
///
/// Files are taken as given. Directories are walked for files with one of
/// `extensions`, skipping hidden directories and `node_modules`.
pub fn collect_inputs(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            scan_dir(path, extensions, &mut inputs);
        } else if path.is_file() {
            let relative = path
                .file_name()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow::anyhow!("Invalid input path: {}", path.display()))?;
            inputs.push(Input {
                path: path.clone(),
                relative,
            });
        } else {
            anyhow::bail!("Input not found: {}", path.display());
        }
    }

    Ok(inputs)
}

fn scan_dir(dir: &Path, extensions: &[String], inputs: &mut Vec<Input>) {
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !extensions.iter().any(|allowed| allowed == ext) {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path).to_path_buf();
        inputs.push(Input {
            path: path.to_path_buf(),
            relative,
        });
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_str().unwrap_or("");
    entry.file_type().is_dir() && (name.starts_with('.') || name == "node_modules")
}
