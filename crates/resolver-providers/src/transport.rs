//! HTTP implementation of the fetch transport.

use async_trait::async_trait;
use resolver_types::{FetchTransport, TransportError};
use std::time::Duration;

/// Transport backed by a shared `reqwest` client.
///
/// One bounded GET per call, no automatic retry. The underlying client
/// pools connections and is safe for concurrent use, so a single
/// instance serves all racing adapters.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> Self {
		Self {
			client: reqwest::Client::new(),
		}
	}
}

#[async_trait]
impl FetchTransport for HttpTransport {
	async fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
		let response = self
			.client
			.get(url)
			.timeout(timeout)
			.send()
			.await
			.map_err(|err| classify(err, timeout))?;

		let status = response.status();
		if !status.is_success() {
			return Err(TransportError::Status(status.as_u16()));
		}

		response.text().await.map_err(|err| classify(err, timeout))
	}
}

fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
	if err.is_timeout() {
		TransportError::Timeout(timeout)
	} else {
		TransportError::Connect(err.to_string())
	}
}
