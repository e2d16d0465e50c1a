//! Hosted block-explorer adapter.
//!
//! Speaks the keyless Etherscan-compatible API exposed by hosted
//! explorer instances; chains without their own instance share a default
//! host keyed by chain identifier.

use crate::implementations::decode_rpc_abi;
use async_trait::async_trait;
use resolver_types::{
	Abi, AbiProvider, Address, ChainEndpoints, ChainId, FetchTransport, ProviderError,
	ProviderKind, ProviderResult,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct BlockExplorerProvider {
	transport: Arc<dyn FetchTransport>,
}

impl BlockExplorerProvider {
	pub fn new(transport: Arc<dyn FetchTransport>) -> Self {
		Self { transport }
	}
}

#[async_trait]
impl AbiProvider for BlockExplorerProvider {
	fn kind(&self) -> ProviderKind {
		ProviderKind::BlockExplorer
	}

	fn is_applicable(&self, endpoints: &ChainEndpoints) -> bool {
		endpoints.explorer.is_some()
	}

	async fn attempt(
		&self,
		address: &Address,
		chain: ChainId,
		endpoints: &ChainEndpoints,
		timeout: Duration,
	) -> ProviderResult<Abi> {
		let explorer = endpoints
			.explorer
			.as_ref()
			.ok_or(ProviderError::Inapplicable)?;

		let url = format!(
			"{}/api?module=contract&action=getabi&address={}",
			explorer.base_url, address
		);
		debug!(%chain, %address, "querying block explorer");

		let body = self.transport.get(&url, timeout).await?;
		decode_rpc_abi(&body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::MockTransport;
	use resolver_types::{ExplorerEndpoint, DEFAULT_TIMEOUT};

	fn endpoints() -> ChainEndpoints {
		ChainEndpoints {
			explorer: Some(ExplorerEndpoint {
				base_url: "https://blockscout.example/592".to_string(),
			}),
			..Default::default()
		}
	}

	fn address() -> Address {
		Address::new("0xABC0000000000000000000000000000000000001")
	}

	#[tokio::test]
	async fn test_double_decodes_result() {
		let body = r#"{"status":"1","message":"OK","result":"[{\"type\":\"function\",\"name\":\"totalSupply\"}]"}"#;
		let transport = Arc::new(MockTransport::ok(body));
		let provider = BlockExplorerProvider::new(transport.clone());

		let abi = provider
			.attempt(&address(), ChainId::ASTAR, &endpoints(), DEFAULT_TIMEOUT)
			.await
			.unwrap();
		assert_eq!(abi.entries()[0]["name"], "totalSupply");

		assert_eq!(
			transport.requested(),
			vec![format!(
				"https://blockscout.example/592/api?module=contract&action=getabi&address={}",
				address()
			)]
		);
	}

	#[tokio::test]
	async fn test_unverified_contract_is_not_found() {
		let body = r#"{"status":"0","message":"NOTOK","result":"Contract source code not verified"}"#;
		let provider = BlockExplorerProvider::new(Arc::new(MockTransport::ok(body)));

		let result = provider
			.attempt(&address(), ChainId::ASTAR, &endpoints(), DEFAULT_TIMEOUT)
			.await;
		assert_eq!(result, Err(ProviderError::NotFound));
	}

	#[test]
	fn test_applicability_follows_explorer_slot() {
		let provider = BlockExplorerProvider::new(Arc::new(MockTransport::ok("{}")));
		assert!(provider.is_applicable(&endpoints()));
		assert!(!provider.is_applicable(&ChainEndpoints::default()));
	}
}
