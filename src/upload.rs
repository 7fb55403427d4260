//! Command runners: classify, read, combine, render, submit, emit.
//!
//! Each `run_*` function backs one CLI subcommand. The `upload` runner owns
//! the full routing decision (repository / directory / file list, API mode
//! vs. text formatting); `repo`, `dir`, and `zip` are direct API paths.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::classify;
use crate::collect;
use crate::combine::combine;
use crate::config::{ApiConfig, ChatOptions};
use crate::format;
use crate::models::{ChatSession, IngestionMode, Platform, SourceFile};
use crate::submit::{self, ChatRequest};

/// Flags accepted by the `upload` subcommand.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Platform tag for the formatter (`raw` when not given).
    pub platform: String,
    /// Write formatted output here instead of stdout.
    pub output: Option<PathBuf>,
    /// Platform to open in the browser after formatting.
    pub open: Option<String>,
    /// Create an actual chat via the API instead of formatting text.
    pub use_api: bool,
    /// Credential flag, overriding `V0_API_KEY`.
    pub api_key: Option<String>,
    pub chat: ChatOptions,
}

/// Upload file(s), a directory, or a GitHub repository.
///
/// A single GitHub URL routes to the repository import and a single existing
/// directory routes to the directory import; both require API mode. Every
/// other argument shape is read as an explicit markdown file list, which
/// formats locally unless API mode is requested. An API failure in the file
/// path degrades to text formatting instead of aborting.
pub async fn run_upload(paths: &[String], options: &UploadOptions) -> Result<()> {
    match classify::classify(paths) {
        IngestionMode::RepoUrl(url) => {
            require_api_mode(options, "Repository")?;
            run_repo(&url, options.api_key.as_deref(), &options.chat, true).await
        }
        IngestionMode::Directory(dir) => {
            require_api_mode(options, "Directory")?;
            run_dir(&dir, options.api_key.as_deref(), &options.chat, true).await
        }
        IngestionMode::ArchiveUrl(url) => {
            require_api_mode(options, "Archive")?;
            run_zip(&url, options.api_key.as_deref(), &options.chat, true).await
        }
        IngestionMode::FileList(paths) => run_file_list(&paths, options).await,
    }
}

fn require_api_mode(options: &UploadOptions, what: &str) -> Result<()> {
    if !options.use_api || options.platform != "v0" {
        bail!("{} imports require --api with --platform v0", what);
    }
    Ok(())
}

/// The explicit-file-list arm of `upload`.
async fn run_file_list(paths: &[PathBuf], options: &UploadOptions) -> Result<()> {
    println!("Reading files...");

    let files = collect::read_markdown_files(paths);
    if files.is_empty() {
        bail!("No valid markdown files found");
    }

    println!("Found {} file(s):", files.len());
    for file in &files {
        println!("  - {} ({:.2} KB)", file.name, file.size as f64 / 1024.0);
    }

    if options.use_api && options.platform == "v0" {
        match create_chat_from_files(&files, options).await {
            Ok(session) => {
                report_session(&session, true);
                return Ok(());
            }
            Err(err) => {
                eprintln!("Warning: chat creation failed: {}", err);
                eprintln!("Falling back to text formatting...");
            }
        }
    }

    let document = combine(&files);
    let platform = Platform::from_tag(&options.platform);
    let formatted = format::render(platform, &document);

    emit(&formatted, options.output.as_deref())?;

    if let Some(target) = &options.open {
        open_platform(target);
    }

    Ok(())
}

async fn create_chat_from_files(
    files: &[SourceFile],
    options: &UploadOptions,
) -> Result<ChatSession> {
    let config = ApiConfig::resolve(options.api_key.as_deref())?;
    println!("Creating chat from {} file(s)...", files.len());
    let request = ChatRequest::files(files, &options.chat);
    submit::submit(&config, &request).await
}

/// Import a GitHub repository into a chat.
pub async fn run_repo(
    url: &str,
    api_key: Option<&str>,
    chat: &ChatOptions,
    open_browser: bool,
) -> Result<()> {
    let config = ApiConfig::resolve(api_key)?;

    println!("Creating chat from repository: {}", url);
    let request = ChatRequest::repo(url, chat);
    let session = submit::submit(&config, &request).await?;

    report_session(&session, open_browser);
    Ok(())
}

/// Import a local directory into a chat.
///
/// Walks the directory with the fixed ignore list and uploads everything
/// readable as text. An empty result is an input error, not a silent no-op.
pub async fn run_dir(
    path: &Path,
    api_key: Option<&str>,
    chat: &ChatOptions,
    open_browser: bool,
) -> Result<()> {
    println!("Reading directory: {}", path.display());

    let files = collect::collect_files(path)?;
    if files.is_empty() {
        bail!("No files found in directory");
    }
    println!("Found {} file(s) in directory", files.len());

    let config = ApiConfig::resolve(api_key)?;

    let mut chat = chat.clone();
    if chat.name.is_none() {
        chat.name = Some(format!("ChatPorter: {}", path_basename(path)));
    }

    let request = ChatRequest::files(&files, &chat);
    let session = submit::submit(&config, &request).await?;

    report_session(&session, open_browser);
    Ok(())
}

/// Import a zip archive (by URL) into a chat.
pub async fn run_zip(
    url: &str,
    api_key: Option<&str>,
    chat: &ChatOptions,
    open_browser: bool,
) -> Result<()> {
    let config = ApiConfig::resolve(api_key)?;

    println!("Creating chat from zip archive: {}", url);
    let request = ChatRequest::zip(url, chat);
    let session = submit::submit(&config, &request).await?;

    report_session(&session, open_browser);
    Ok(())
}

/// Write formatted output to a file, or print it framed by a banner.
fn emit(formatted: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, formatted)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("Formatted content written to: {}", path.display());
        }
        None => {
            let banner = "=".repeat(60);
            println!("\n{}", banner);
            println!("Formatted Content:\n");
            println!("{}", formatted);
            println!("\n{}", banner);
        }
    }
    Ok(())
}

fn report_session(session: &ChatSession, open_browser: bool) {
    println!("Chat created successfully!");
    println!("  Chat ID: {}", session.id);
    println!("  Chat URL: {}", session.url);

    if open_browser {
        open_in_browser(&session.url);
        println!("Opened chat in browser");
    }
}

/// Open a platform's home page so the user can paste the formatted content.
fn open_platform(platform: &str) {
    let url = match platform {
        "v0" => "https://v0.dev/chat",
        "chatgpt" => "https://chat.openai.com",
        "claude" => "https://claude.ai",
        "cursor" => "cursor://",
        other => {
            eprintln!("Unknown platform: {}", other);
            return;
        }
    };

    println!("Opening {}...", platform);
    open_in_browser(url);
    println!("Tip: copy the formatted content above and paste it into the chat.");
}

/// Launch the OS URL opener. A launch failure is a warning, never fatal.
fn open_in_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd").args(["/C", "start", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    if let Err(err) = result {
        eprintln!("Could not open browser: {}", err);
    }
}

fn path_basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
