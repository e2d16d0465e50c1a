//! Provider abstraction and the adapter-local error taxonomy.

use crate::{
	chains::{ChainEndpoints, ChainId},
	common::{Abi, Address},
	transport::TransportError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Why a single provider attempt did not produce an ABI.
///
/// All variants collapse to "no ABI from this provider" at the engine
/// boundary; they stay distinguishable here for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
	/// The chain carries no endpoint for this provider. Not a failure;
	/// the engine filters these adapters out before the race starts.
	#[error("provider not applicable for this chain")]
	Inapplicable,

	#[error("transport error: {0}")]
	Transport(#[from] TransportError),

	/// 2xx response whose body did not match the expected shape.
	#[error("malformed response: {0}")]
	MalformedResponse(String),

	/// Well-formed response that explicitly carries no ABI.
	#[error("no ABI published for this contract")]
	NotFound,
}

/// The closed set of external registry families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
	SourceVerification,
	Gateway,
	BlockExplorer,
	ScanApi,
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::SourceVerification => "source-verification",
			Self::Gateway => "gateway",
			Self::BlockExplorer => "block-explorer",
			Self::ScanApi => "scan-api",
		};
		write!(f, "{}", name)
	}
}

/// A single external registry capable of producing an ABI for a contract.
#[async_trait]
pub trait AbiProvider: Send + Sync {
	/// Which provider family this adapter implements.
	fn kind(&self) -> ProviderKind;

	/// Whether the chain carries the endpoint this adapter requires.
	///
	/// The engine filters on this before launching the race; an adapter
	/// must never be attempted for a chain where this returns false.
	fn is_applicable(&self, endpoints: &ChainEndpoints) -> bool;

	/// Perform one bounded fetch-and-extract attempt against the provider.
	///
	/// Exactly one attempt per resolution; retries are the caller's
	/// decision, not the adapter's.
	async fn attempt(
		&self,
		address: &Address,
		chain: ChainId,
		endpoints: &ChainEndpoints,
		timeout: Duration,
	) -> ProviderResult<Abi>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_provider_kind_display() {
		assert_eq!(
			ProviderKind::SourceVerification.to_string(),
			"source-verification"
		);
		assert_eq!(ProviderKind::Gateway.to_string(), "gateway");
		assert_eq!(ProviderKind::BlockExplorer.to_string(), "block-explorer");
		assert_eq!(ProviderKind::ScanApi.to_string(), "scan-api");
	}

	#[test]
	fn test_transport_errors_convert() {
		let error: ProviderError = TransportError::Status(503).into();
		assert_eq!(
			error,
			ProviderError::Transport(TransportError::Status(503))
		);
	}
}
