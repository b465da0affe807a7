//! Cronhook HTTP Client
//!
//! A small, type-safe HTTP client for the Cronhook server API.
//!
//! # Example
//!
//! ```no_run
//! use cronhook_client::CronhookClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CronhookClient::new("http://localhost:8080");
//!
//!     // Listing refreshes the server's hash index
//!     let jobs = client.list_jobs().await?;
//!
//!     if let Some(job) = jobs.first() {
//!         let output = client.run_job(&job.identifier).await?;
//!         print!("{}", String::from_utf8_lossy(&output));
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

// Re-export commonly used types
pub use cronhook_core::domain::job::CronJob;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Cronhook server API
#[derive(Debug, Clone)]
pub struct CronhookClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl CronhookClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use cronhook_client::CronhookClient;
    ///
    /// let client = CronhookClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// Triggered jobs run until they finish on the server, so a request
    /// timeout here should leave room for the slowest job.
    ///
    /// # Example
    /// ```
    /// use cronhook_client::CronhookClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(600))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = CronhookClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Turn a non-success response into an [`ClientError::ApiError`]
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = self.check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is returned as raw bytes
    async fn handle_bytes_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = self.check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }
}
