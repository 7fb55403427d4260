//! # ChatPorter CLI (`chatporter`)
//!
//! The `chatporter` binary ports markdown documents, directories, and
//! repositories into AI chat conversations: either as formatted text for
//! pasting, or as a real chat session created through the v0 Platform API.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `chatporter upload <paths...>` | Format or upload markdown files, a directory, or a repo URL |
//! | `chatporter repo <url>` | Import a GitHub repository into a v0 chat |
//! | `chatporter dir <path>` | Import a local directory into a v0 chat |
//! | `chatporter zip <url>` | Import a zip archive from a URL into a v0 chat |
//!
//! ## Examples
//!
//! ```bash
//! # Format two files for Claude and print to stdout
//! chatporter upload notes.md api.md --platform claude
//!
//! # Save the ChatGPT envelope to a file
//! chatporter upload notes.md --platform chatgpt -o context.txt
//!
//! # Create a v0 chat from the files (requires V0_API_KEY)
//! chatporter upload notes.md api.md --api --platform v0
//!
//! # Import a repository on a specific branch
//! chatporter repo https://github.com/user/repo --branch develop
//!
//! # Import a directory without opening the browser afterwards
//! chatporter dir ./docs --no-open
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chat_porter::config::ChatOptions;
use chat_porter::upload::{self, UploadOptions};

/// ChatPorter — port markdown documents into AI chat conversations.
#[derive(Parser)]
#[command(
    name = "chatporter",
    about = "Port markdown documents into AI chat conversations",
    version,
    long_about = "ChatPorter reads markdown files, directories, or GitHub repositories, \
    reformats their combined content for a target chat platform (v0, ChatGPT, Claude, Cursor), \
    and either prints/saves the result or creates a pre-loaded chat session via the v0 Platform API."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Upload markdown file(s), a directory, or a GitHub repository.
    ///
    /// A single GitHub URL is imported as a repository and a single existing
    /// directory is imported as a directory; both require `--api` with
    /// `--platform v0`. Anything else is read as a list of markdown files
    /// and formatted for the chosen platform (or uploaded with `--api`).
    Upload {
        /// File(s), directory, or GitHub repo URL to upload.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Target platform (v0, chatgpt, claude, cursor, raw).
        #[arg(short, long, default_value = "raw")]
        platform: String,

        /// Save formatted output to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open a platform in the browser (v0, chatgpt, claude, cursor).
        #[arg(long)]
        open: Option<String>,

        /// Use the v0 Platform API to create an actual chat (requires V0_API_KEY).
        #[arg(long)]
        api: bool,

        /// v0 API key (or set V0_API_KEY).
        #[arg(long)]
        api_key: Option<String>,

        /// Chat name (API mode).
        #[arg(long)]
        name: Option<String>,

        /// v0 project id (API mode).
        #[arg(long)]
        project_id: Option<String>,

        /// Lock uploaded files from AI modification (API mode).
        #[arg(long)]
        lock_files: bool,

        /// Lock all files from AI modification (API mode).
        #[arg(long)]
        lock_all_files: bool,

        /// Git branch for repository imports.
        #[arg(long, default_value = "main")]
        branch: String,
    },

    /// Import a GitHub repository into a v0 chat.
    Repo {
        /// Repository URL (e.g. https://github.com/user/repo).
        url: String,

        /// v0 API key (or set V0_API_KEY).
        #[arg(long)]
        api_key: Option<String>,

        /// Chat name.
        #[arg(long)]
        name: Option<String>,

        /// v0 project id.
        #[arg(long)]
        project_id: Option<String>,

        /// Git branch to import.
        #[arg(long, default_value = "main")]
        branch: String,

        /// Lock all files from AI modification.
        #[arg(long)]
        lock_all_files: bool,

        /// Don't open the browser after creation.
        #[arg(long)]
        no_open: bool,
    },

    /// Import a local directory into a v0 chat.
    ///
    /// Walks the directory recursively, skipping the usual build and
    /// dependency artifacts (node_modules, .git, dist, ...), and uploads
    /// everything readable as text.
    Dir {
        /// Directory path to import.
        path: PathBuf,

        /// v0 API key (or set V0_API_KEY).
        #[arg(long)]
        api_key: Option<String>,

        /// Chat name.
        #[arg(long)]
        name: Option<String>,

        /// v0 project id.
        #[arg(long)]
        project_id: Option<String>,

        /// Lock files from AI modification.
        #[arg(long)]
        lock_files: bool,

        /// Lock all files from AI modification.
        #[arg(long)]
        lock_all_files: bool,

        /// Don't open the browser after creation.
        #[arg(long)]
        no_open: bool,
    },

    /// Import a zip archive from a URL into a v0 chat.
    Zip {
        /// URL to the zip archive (e.g. https://github.com/user/repo/archive/main.zip).
        url: String,

        /// v0 API key (or set V0_API_KEY).
        #[arg(long)]
        api_key: Option<String>,

        /// Chat name.
        #[arg(long)]
        name: Option<String>,

        /// v0 project id.
        #[arg(long)]
        project_id: Option<String>,

        /// Lock all files from AI modification.
        #[arg(long)]
        lock_all_files: bool,

        /// Don't open the browser after creation.
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            paths,
            platform,
            output,
            open,
            api,
            api_key,
            name,
            project_id,
            lock_files,
            lock_all_files,
            branch,
        } => {
            let options = UploadOptions {
                platform,
                output,
                open,
                use_api: api,
                api_key,
                chat: ChatOptions {
                    name,
                    project_id,
                    branch: Some(branch),
                    lock_files,
                    lock_all_files,
                },
            };
            upload::run_upload(&paths, &options).await?;
        }
        Commands::Repo {
            url,
            api_key,
            name,
            project_id,
            branch,
            lock_all_files,
            no_open,
        } => {
            let chat = ChatOptions {
                name,
                project_id,
                branch: Some(branch),
                lock_files: false,
                lock_all_files,
            };
            upload::run_repo(&url, api_key.as_deref(), &chat, !no_open).await?;
        }
        Commands::Dir {
            path,
            api_key,
            name,
            project_id,
            lock_files,
            lock_all_files,
            no_open,
        } => {
            let chat = ChatOptions {
                name,
                project_id,
                branch: None,
                lock_files,
                lock_all_files,
            };
            upload::run_dir(&path, api_key.as_deref(), &chat, !no_open).await?;
        }
        Commands::Zip {
            url,
            api_key,
            name,
            project_id,
            lock_all_files,
            no_open,
        } => {
            let chat = ChatOptions {
                name,
                project_id,
                branch: None,
                lock_files: false,
                lock_all_files,
            };
            upload::run_zip(&url, api_key.as_deref(), &chat, !no_open).await?;
        }
    }

    Ok(())
}
