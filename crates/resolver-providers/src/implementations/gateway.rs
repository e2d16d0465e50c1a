//! First-party gateway adapter.

use async_trait::async_trait;
use resolver_types::{
	Abi, AbiProvider, Address, ChainEndpoints, ChainId, FetchTransport, ProviderError,
	ProviderKind, ProviderResult,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ContractResponse {
	#[serde(rename = "contractAbi", default)]
	contract_abi: Option<ContractAbi>,
}

#[derive(Debug, Deserialize)]
struct ContractAbi {
	#[serde(default)]
	abi: Option<Vec<serde_json::Value>>,
}

pub struct GatewayProvider {
	transport: Arc<dyn FetchTransport>,
}

impl GatewayProvider {
	pub fn new(transport: Arc<dyn FetchTransport>) -> Self {
		Self { transport }
	}
}

#[async_trait]
impl AbiProvider for GatewayProvider {
	fn kind(&self) -> ProviderKind {
		ProviderKind::Gateway
	}

	fn is_applicable(&self, endpoints: &ChainEndpoints) -> bool {
		endpoints.gateway.is_some()
	}

	async fn attempt(
		&self,
		address: &Address,
		chain: ChainId,
		endpoints: &ChainEndpoints,
		timeout: Duration,
	) -> ProviderResult<Abi> {
		let gateway = endpoints.gateway.as_ref().ok_or(ProviderError::Inapplicable)?;

		let url = format!(
			"{}/v1/chains/{}/contracts/{}",
			gateway.base_url, chain, address
		);
		debug!(%chain, %address, "querying gateway");

		let body = self.transport.get(&url, timeout).await?;
		let response: ContractResponse = serde_json::from_str(&body)
			.map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

		// The gateway may store the contract and answer 200 without ever
		// having fetched its ABI; that is a miss, not a transport failure.
		match response.contract_abi.and_then(|contract| contract.abi) {
			Some(entries) => Ok(Abi::new(entries)),
			None => Err(ProviderError::NotFound),
		}
	}
}
