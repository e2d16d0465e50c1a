//! Timeout-bounded HTTP GET abstraction shared by all provider adapters.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Per-request bound applied when configuration does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
	#[error("request timed out after {0:?}")]
	Timeout(Duration),

	#[error("connection failed: {0}")]
	Connect(String),

	#[error("unexpected HTTP status {0}")]
	Status(u16),
}

/// Minimal GET transport: one bounded request, no retries.
///
/// Implementations must be safe for concurrent use; the engine shares a
/// single transport across all racing adapters.
#[async_trait]
pub trait FetchTransport: Send + Sync {
	/// Fetch `url` and return the response body, failing past `timeout`.
	async fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError>;
}
