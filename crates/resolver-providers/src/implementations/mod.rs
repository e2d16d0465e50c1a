//! Provider adapters, one per external registry family.
//!
//! Each adapter owns its URL template and its response shape. They share
//! nothing but the transport, so the engine can race them freely.

mod blockscout;
mod gateway;
mod scan;
mod sourcify;

pub use blockscout::BlockExplorerProvider;
pub use gateway::GatewayProvider;
pub use scan::ScanApiProvider;
pub use sourcify::SourcifyProvider;

use resolver_types::{Abi, AbiProvider, FetchTransport, ProviderError, ProviderResult};
use serde::Deserialize;
use std::sync::Arc;

/// Etherscan-compatible response envelope shared by the explorer and
/// scan-family adapters.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcEnvelope {
	#[serde(default)]
	message: String,
	#[serde(default)]
	result: Option<String>,
}

/// Decode an Etherscan-compatible `getabi` body.
///
/// The `result` field is itself a JSON-encoded string; a second decode
/// yields the ABI array, normalized to the same representation the
/// gateway path produces.
pub(crate) fn decode_rpc_abi(body: &str) -> ProviderResult<Abi> {
	let envelope: RpcEnvelope = serde_json::from_str(body)
		.map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

	if envelope.message != "OK" {
		return Err(ProviderError::NotFound);
	}
	let result = match envelope.result {
		Some(result) if !result.is_empty() => result,
		_ => return Err(ProviderError::NotFound),
	};

	let entries: Vec<serde_json::Value> = serde_json::from_str(&result)
		.map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;
	Ok(Abi::new(entries))
}

/// All four adapters over a shared transport.
///
/// Order carries no priority; the race is decided by completion order
/// alone.
pub fn default_providers(transport: Arc<dyn FetchTransport>) -> Vec<Arc<dyn AbiProvider>> {
	vec![
		Arc::new(SourcifyProvider::new(transport.clone())),
		Arc::new(GatewayProvider::new(transport.clone())),
		Arc::new(BlockExplorerProvider::new(transport.clone())),
		Arc::new(ScanApiProvider::new(transport)),
	]
}
