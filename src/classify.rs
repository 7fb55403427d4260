use regex::Regex;
use std::path::{Path, PathBuf};

use crate::models::IngestionMode;

/// True when the argument looks like a GitHub repository URL
/// (`https://github.com/<owner>/<repo>`, optionally `www.` and `http`).
pub fn is_github_url(url: &str) -> bool {
    // Hard-coded literal pattern; compilation cannot fail at runtime.
    Regex::new(r"^https?://(www\.)?github\.com/[\w.-]+/[\w.-]+")
        .map(|re| re.is_match(url))
        .unwrap_or(false)
}

/// Decide the ingestion mode for a set of positional source arguments.
///
/// Exactly one argument matching the GitHub URL pattern is a repository
/// reference, regardless of filesystem state. Exactly one argument that
/// stats as a directory is a directory import. Everything else is treated as
/// an explicit file list; per-entry validation happens at read time so a bad
/// entry skips with a warning instead of failing the batch.
///
/// Archive URLs are never inferred here — only the `zip` command produces
/// [`IngestionMode::ArchiveUrl`].
pub fn classify(inputs: &[String]) -> IngestionMode {
    if inputs.len() == 1 {
        if is_github_url(&inputs[0]) {
            return IngestionMode::RepoUrl(inputs[0].clone());
        }
        let path = Path::new(&inputs[0]);
        if path.is_dir() {
            return IngestionMode::Directory(path.to_path_buf());
        }
    }
    IngestionMode::FileList(inputs.iter().map(PathBuf::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_urls_match() {
        assert!(is_github_url("https://github.com/user/repo"));
        assert!(is_github_url("http://github.com/user/repo"));
        assert!(is_github_url("https://www.github.com/user/repo"));
        assert!(is_github_url("https://github.com/user/repo/tree/main/src"));
        assert!(is_github_url("https://github.com/some-user/my.repo-name"));
    }

    #[test]
    fn non_github_urls_do_not_match() {
        assert!(!is_github_url("https://gitlab.com/user/repo"));
        assert!(!is_github_url("ftp://github.com/user/repo"));
        assert!(!is_github_url("github.com/user/repo"));
        assert!(!is_github_url("https://github.com/useronly"));
        assert!(!is_github_url("docs/readme.md"));
    }

    #[test]
    fn single_github_url_classifies_as_repo_without_touching_disk() {
        let inputs = vec!["https://github.com/user/repo".to_string()];
        assert_eq!(
            classify(&inputs),
            IngestionMode::RepoUrl("https://github.com/user/repo".to_string())
        );
    }

    #[test]
    fn single_directory_classifies_as_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![tmp.path().to_string_lossy().to_string()];
        assert_eq!(
            classify(&inputs),
            IngestionMode::Directory(tmp.path().to_path_buf())
        );
    }

    #[test]
    fn everything_else_classifies_as_file_list() {
        // Nonexistent single path
        let inputs = vec!["no-such-file.md".to_string()];
        assert_eq!(
            classify(&inputs),
            IngestionMode::FileList(vec![PathBuf::from("no-such-file.md")])
        );

        // Multiple arguments never classify as repo or directory
        let inputs = vec![
            "https://github.com/user/repo".to_string(),
            "notes.md".to_string(),
        ];
        match classify(&inputs) {
            IngestionMode::FileList(paths) => assert_eq!(paths.len(), 2),
            other => panic!("expected FileList, got {:?}", other),
        }
    }
}
