//! Cloud sharing of prompts
//!
//! The [`ShareClient`] trait is the seam; the only shipped backend is the
//! mock one, which serves canned community prompts. A real HTTP backend
//! would implement the same trait.

mod client;
mod mock;

pub use client::{DownloadFilters, ShareClient, ShareSort, SharedPrompt};
pub use mock::MockShareClient;

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::config::ShareConfig;

/// Errors from share operations
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Unknown share provider: '{0}'. Supported: mock")]
    UnknownProvider(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),
}

/// Create a share client for the provider named in config
pub fn create_client(config: &ShareConfig) -> Result<Arc<dyn ShareClient>, ShareError> {
    debug!(provider = %config.provider, "create_client: called");
    match config.provider.as_str() {
        "mock" => {
            debug!("create_client: creating mock client");
            Ok(Arc::new(MockShareClient::new()))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(ShareError::UnknownProvider(other.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_mock() {
        let config = ShareConfig {
            provider: "mock".to_string(),
        };
        assert!(create_client(&config).is_ok());
    }

    #[test]
    fn test_create_client_unknown_provider() {
        let config = ShareConfig {
            provider: "http".to_string(),
        };
        let err = create_client(&config).unwrap_err();
        assert!(matches!(err, ShareError::UnknownProvider(_)));
    }
}
