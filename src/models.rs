//! Core data models used throughout ChatPorter.
//!
//! These types represent the files, documents, and session handles that flow
//! through the aggregation and submission pipeline. All of them are value
//! objects created and consumed within a single invocation.

use std::path::PathBuf;

/// A single file read from disk, before combining.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Relative path (directory walks) or base name (explicit file lists).
    /// Unique within a batch.
    pub name: String,
    /// Raw text content.
    pub content: String,
    /// Byte length as reported by the filesystem.
    pub size: u64,
}

/// The merged document produced by the combiner.
///
/// With a single source file, `text` is that file's content verbatim. With
/// more than one, `text` is the ordered concatenation of `# <name>` blocks
/// separated by `\n\n---\n\n`.
#[derive(Debug, Clone)]
pub struct CombinedDocument {
    pub text: String,
    /// File names in input order, used by the platform formatters.
    pub file_list: Vec<String>,
}

/// Target chat platform for the formatted envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Raw,
    V0,
    ChatGpt,
    Claude,
    Cursor,
}

impl Platform {
    /// Map a platform tag to its formatter target.
    ///
    /// Unknown tags fall back to [`Platform::Raw`].
    pub fn from_tag(tag: &str) -> Platform {
        match tag {
            "v0" => Platform::V0,
            "chatgpt" => Platform::ChatGpt,
            "claude" => Platform::Claude,
            "cursor" => Platform::Cursor,
            _ => Platform::Raw,
        }
    }
}

/// How a single invocation's source arguments are ingested.
///
/// Chosen once per invocation by [`crate::classify::classify`] and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionMode {
    /// A GitHub-style repository URL.
    RepoUrl(String),
    /// An existing local directory.
    Directory(PathBuf),
    /// A URL to a zip archive. Only reachable through the `zip` command,
    /// never through automatic classification.
    ArchiveUrl(String),
    /// An explicit list of markdown files.
    FileList(Vec<PathBuf>),
}

/// A chat session created on the vendor platform.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    /// Browser-openable URL derived from the id.
    pub url: String,
}
