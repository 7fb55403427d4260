//! Chat creation against the v0 Platform API.
//!
//! Defines the [`ChatClient`] capability with two interchangeable
//! implementations:
//! - **[`TypedClient`]** — strict response decoding, attempted first.
//! - **[`RawClient`]** — lenient parse that only extracts the `id` field,
//!   used as the fallback when the typed path fails.
//!
//! [`submit`] orchestrates the pair: any primary failure is logged as a
//! warning and retried once through the raw path. The single fallback
//! attempt is the full resilience strategy; there is no backoff.
//!
//! # Wire contract
//!
//! One endpoint, `POST <api_url>` (default
//! `https://api.v0.dev/v1/chats/init`), JSON body with a `type`
//! discriminator (`files` | `repo` | `zip`), an `Authorization: Bearer`
//! header, and a response JSON carrying an `id`. A non-2xx response is
//! surfaced with its status code and the parsed (or raw) error body.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{ApiConfig, ChatOptions};
use crate::models::{ChatSession, SourceFile};

/// Base URL a created chat is reachable at.
const CHAT_URL_BASE: &str = "https://v0.dev/chat";

/// One file entry in a `files` payload.
#[derive(Debug, Serialize)]
pub struct ChatFile {
    pub name: String,
    pub content: String,
    pub locked: bool,
}

/// Repository reference in a `repo` payload.
#[derive(Debug, Serialize)]
pub struct RepoRef {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Archive reference in a `zip` payload.
#[derive(Debug, Serialize)]
pub struct ZipRef {
    pub url: String,
}

/// The three payload shapes the endpoint accepts, discriminated by `type`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatPayload {
    Files { files: Vec<ChatFile> },
    Repo { repo: RepoRef },
    Zip { zip: ZipRef },
}

/// Full request body: one payload plus the common fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(flatten)]
    pub payload: ChatPayload,
    pub name: String,
    pub lock_all_files: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl ChatRequest {
    /// Build a `files` submission. File names are placed under `docs/` the
    /// way the platform's start-from-existing-code flow expects.
    pub fn files(files: &[SourceFile], options: &ChatOptions) -> ChatRequest {
        let chat_files = files
            .iter()
            .map(|f| ChatFile {
                name: format!("docs/{}", f.name),
                content: f.content.clone(),
                locked: options.lock_files,
            })
            .collect();

        ChatRequest {
            payload: ChatPayload::Files { files: chat_files },
            name: options
                .name
                .clone()
                .unwrap_or_else(|| format!("ChatPorter: {} file(s)", files.len())),
            lock_all_files: options.lock_all_files,
            project_id: options.project_id.clone(),
        }
    }

    /// Build a `repo` submission from a repository URL.
    pub fn repo(url: &str, options: &ChatOptions) -> ChatRequest {
        ChatRequest {
            payload: ChatPayload::Repo {
                repo: RepoRef {
                    url: url.to_string(),
                    branch: options.branch.clone(),
                },
            },
            name: options
                .name
                .clone()
                .unwrap_or_else(|| format!("ChatPorter: {}", url_basename(url))),
            lock_all_files: options.lock_all_files,
            project_id: options.project_id.clone(),
        }
    }

    /// Build a `zip` submission from an archive URL.
    pub fn zip(url: &str, options: &ChatOptions) -> ChatRequest {
        ChatRequest {
            payload: ChatPayload::Zip {
                zip: ZipRef {
                    url: url.to_string(),
                },
            },
            name: options
                .name
                .clone()
                .unwrap_or_else(|| "ChatPorter: Zip Archive".to_string()),
            lock_all_files: options.lock_all_files,
            project_id: options.project_id.clone(),
        }
    }
}

/// Strict response model used by the typed client.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    id: String,
}

/// A chat-creation capability.
///
/// Implementations own transport and decoding details; callers go through
/// [`submit`], which selects between them.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn init_chat(&self, config: &ApiConfig, request: &ChatRequest) -> Result<ChatSession>;
}

/// Primary path: strict response decoding.
pub struct TypedClient;

#[async_trait]
impl ChatClient for TypedClient {
    async fn init_chat(&self, config: &ApiConfig, request: &ChatRequest) -> Result<ChatSession> {
        let response = post_chat(config, request).await?;
        let chat: ChatResponse = response.json().await?;
        Ok(session_from_id(chat.id))
    }
}

/// Fallback path: direct call where only the `id` field is required.
pub struct RawClient;

#[async_trait]
impl ChatClient for RawClient {
    async fn init_chat(&self, config: &ApiConfig, request: &ChatRequest) -> Result<ChatSession> {
        let response = post_chat(config, request).await?;
        let json: serde_json::Value = response.json().await?;
        let id = json
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("API response missing id field"))?
            .to_string();
        Ok(session_from_id(id))
    }
}

/// Create a chat, trying the typed client first and falling back to the raw
/// client on any failure. The primary failure is logged as a warning; the
/// fallback's outcome is final.
pub async fn submit(config: &ApiConfig, request: &ChatRequest) -> Result<ChatSession> {
    match TypedClient.init_chat(config, request).await {
        Ok(session) => Ok(session),
        Err(err) => {
            eprintln!("Warning: primary client failed: {}", err);
            eprintln!("  Falling back to direct API call...");
            RawClient.init_chat(config, request).await
        }
    }
}

/// POST the request and surface non-2xx responses as errors.
///
/// The error message carries the status code and the body's `message` field
/// when the body parses as JSON, or the raw body text otherwise.
async fn post_chat(config: &ApiConfig, request: &ChatRequest) -> Result<reqwest::Response> {
    let client = reqwest::Client::new();

    let response = client
        .post(&config.api_url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);
        bail!("API error {}: {}", status.as_u16(), message);
    }

    Ok(response)
}

fn session_from_id(id: String) -> ChatSession {
    let url = format!("{}/{}", CHAT_URL_BASE, id);
    ChatSession { id, url }
}

/// Last path segment of a URL, used for default chat names.
fn url_basename(url: &str) -> &str {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
}
