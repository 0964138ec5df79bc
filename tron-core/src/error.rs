use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by a weather provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unknown location '{0}'")]
    UnknownLocation(String),

    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid header value {0}")]
    Header(String),

    #[error("Invalid selector {0}")]
    Selector(String),

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl ProviderError {
    /// Whether the error came from reaching the upstream site.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ProviderError::Fetch { .. } | ProviderError::Status { .. })
    }
}

/// Failures of a single location's cache write.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("No provider found for location '{location}'{}", pinned_suffix(.provider))]
    ProviderNotFound {
        location: String,
        provider: Option<String>,
    },

    #[error("Provider '{provider}' failed for location '{location}'")]
    Provider {
        location: String,
        provider: String,
        #[source]
        source: ProviderError,
    },

    #[error("Failed to write cache file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize forecast for location '{location}'")]
    Serialize {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

fn pinned_suffix(provider: &Option<String>) -> String {
    match provider {
        Some(id) => format!(" (pinned provider '{id}' is not registered)"),
        None => String::new(),
    }
}
