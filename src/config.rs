use anyhow::{bail, Result};

/// Default endpoint for chat creation, overridable via `V0_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.v0.dev/v1/chats/init";

/// Credentials and endpoint for the v0 Platform API.
///
/// Built explicitly from the environment and CLI flags at the command layer
/// so the submission adapter never consults ambient state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_url: String,
}

impl ApiConfig {
    /// Resolve the API key and endpoint.
    ///
    /// The `--api-key` flag wins over the `V0_API_KEY` environment variable;
    /// `V0_API_URL` wins over [`DEFAULT_API_URL`].
    pub fn resolve(api_key_flag: Option<&str>) -> Result<Self> {
        let api_key = match api_key_flag {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => match std::env::var("V0_API_KEY") {
                Ok(key) if !key.is_empty() => key,
                _ => bail!(
                    "V0_API_KEY not found. Set it in your environment or use --api-key.\n\
                     Get your API key from: https://v0.app/settings/api"
                ),
            },
        };

        let api_url =
            std::env::var("V0_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self { api_key, api_url })
    }
}

/// Request-level options common to every chat creation.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Chat name; each command derives a default when unset.
    pub name: Option<String>,
    /// Optional v0 project to attach the chat to.
    pub project_id: Option<String>,
    /// Git branch for repository imports.
    pub branch: Option<String>,
    /// Lock each uploaded file from AI modification.
    pub lock_files: bool,
    /// Lock the whole file set from AI modification.
    pub lock_all_files: bool,
}
