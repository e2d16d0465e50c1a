// resolver-providers/src/lib.rs

pub mod implementations;
pub mod transport;

pub use implementations::{
	default_providers, BlockExplorerProvider, GatewayProvider, ScanApiProvider, SourcifyProvider,
};
pub use transport::HttpTransport;

#[cfg(test)]
pub(crate) mod testutil {
	use async_trait::async_trait;
	use resolver_types::{FetchTransport, TransportError};
	use std::sync::Mutex;
	use std::time::Duration;

	/// Transport that replays a canned response and records requested URLs.
	pub struct MockTransport {
		response: Result<String, TransportError>,
		requests: Mutex<Vec<String>>,
	}

	impl MockTransport {
		pub fn ok(body: &str) -> Self {
			Self {
				response: Ok(body.to_string()),
				requests: Mutex::new(Vec::new()),
			}
		}

		pub fn failing(error: TransportError) -> Self {
			Self {
				response: Err(error),
				requests: Mutex::new(Vec::new()),
			}
		}

		pub fn requested(&self) -> Vec<String> {
			self.requests.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl FetchTransport for MockTransport {
		async fn get(&self, url: &str, _timeout: Duration) -> Result<String, TransportError> {
			self.requests.lock().unwrap().push(url.to_string());
			self.response.clone()
		}
	}
}
