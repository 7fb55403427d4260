use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::models::SourceFile;

/// Directory and file names excluded from every walk.
const IGNORED_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".vercel",
    "dist",
    "build",
    ".DS_Store",
    ".env",
    ".env.local",
    "coverage",
    ".nyc_output",
];

/// The single suffix pattern in the ignore list (`*.log`).
const IGNORED_SUFFIX: &str = ".log";

/// True when an entry is excluded from traversal.
///
/// The ignore list is a fixed finite set, matched by exact entry name or by
/// the name appearing anywhere in the relative path, plus the `.log` name
/// suffix. No general glob engine; this is the whole pattern language.
pub fn is_ignored(name: &str, relative_path: &str) -> bool {
    if name.ends_with(IGNORED_SUFFIX) {
        return true;
    }
    IGNORED_NAMES
        .iter()
        .any(|ignored| name == *ignored || relative_path.contains(ignored))
}

/// Walk `root` depth-first and read every regular file that survives the
/// ignore list.
///
/// Ignored directories are pruned before descent, so nothing inside them is
/// ever visited. Files that cannot be read as text (binary content,
/// permissions) are skipped with a warning; unreadable subdirectories are
/// logged and contribute nothing, without affecting their siblings. Entries
/// keep filesystem listing order, unsorted.
pub fn collect_files(root: &Path) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        !is_ignored(&name, &relative.to_string_lossy())
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Error reading directory entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let name = relative.to_string_lossy().to_string();

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let size = entry
                    .metadata()
                    .map(|m| m.len())
                    .unwrap_or(content.len() as u64);
                files.push(SourceFile {
                    name,
                    content,
                    size,
                });
            }
            Err(err) => {
                eprintln!("Skipping {}: {}", name, err);
            }
        }
    }

    Ok(files)
}

/// Read an explicit list of markdown files.
///
/// Entries that are missing, not regular files, or lacking a `.md` extension
/// are skipped with a warning rather than failing the batch. File names in
/// the result are base names, not full paths.
pub fn read_markdown_files(paths: &[PathBuf]) -> Vec<SourceFile> {
    let mut files = Vec::new();

    for path in paths {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                eprintln!("Skipping {}: {}", path.display(), err);
                continue;
            }
        };

        if !metadata.is_file() {
            eprintln!("Skipping {}: not a file", path.display());
            continue;
        }

        let is_markdown = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_markdown {
            eprintln!("Skipping {}: not a markdown file", path.display());
            continue;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                files.push(SourceFile {
                    name,
                    content,
                    size: metadata.len(),
                });
            }
            Err(err) => {
                eprintln!("Skipping {}: {}", path.display(), err);
            }
        }
    }

    files
}
