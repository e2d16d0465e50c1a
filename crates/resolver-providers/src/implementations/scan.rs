//! Scan-family adapter.
//!
//! Same wire format as the hosted explorer, but the scan services sit
//! behind per-chain API keys injected from configuration. A chain whose
//! key is absent never materializes a scan endpoint, so this adapter is
//! simply inapplicable there.

use crate::implementations::decode_rpc_abi;
use async_trait::async_trait;
use resolver_types::{
	Abi, AbiProvider, Address, ChainEndpoints, ChainId, FetchTransport, ProviderError,
	ProviderKind, ProviderResult,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct ScanApiProvider {
	transport: Arc<dyn FetchTransport>,
}

impl ScanApiProvider {
	pub fn new(transport: Arc<dyn FetchTransport>) -> Self {
		Self { transport }
	}
}

#[async_trait]
impl AbiProvider for ScanApiProvider {
	fn kind(&self) -> ProviderKind {
		ProviderKind::ScanApi
	}

	fn is_applicable(&self, endpoints: &ChainEndpoints) -> bool {
		endpoints.scan.is_some()
	}

	async fn attempt(
		&self,
		address: &Address,
		chain: ChainId,
		endpoints: &ChainEndpoints,
		timeout: Duration,
	) -> ProviderResult<Abi> {
		let scan = endpoints.scan.as_ref().ok_or(ProviderError::Inapplicable)?;

		let mut url = format!(
			"{}/api?module=contract&action=getabi&address={}",
			scan.base_url, address
		);
		if let Some(key) = &scan.api_key {
			url.push_str("&apiKey=");
			url.push_str(key);
		}
		debug!(%chain, %address, "querying scan API");

		let body = self.transport.get(&url, timeout).await?;
		decode_rpc_abi(&body)
	}
}
