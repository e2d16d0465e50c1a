//! Source-verification adapter.
//!
//! The verification service stores a full file bundle per verified
//! contract; the ABI lives inside the bundle's `metadata.json` at
//! `output.abi`.

use async_trait::async_trait;
use resolver_types::{
	Abi, AbiProvider, Address, ChainEndpoints, ChainId, FetchTransport, ProviderError,
	ProviderKind, ProviderResult,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const METADATA_FILE: &str = "metadata.json";

/// One verified file in a bundle.
#[derive(Debug, Deserialize)]
struct VerifiedFile {
	name: String,
	content: String,
}

pub struct SourcifyProvider {
	transport: Arc<dyn FetchTransport>,
}

impl SourcifyProvider {
	pub fn new(transport: Arc<dyn FetchTransport>) -> Self {
		Self { transport }
	}

	fn extract_abi(files: &[VerifiedFile]) -> ProviderResult<Abi> {
		if files.is_empty() {
			return Err(ProviderError::NotFound);
		}

		let metadata = files
			.iter()
			.find(|file| file.name == METADATA_FILE)
			.ok_or(ProviderError::NotFound)?;

		let metadata: serde_json::Value = serde_json::from_str(&metadata.content)
			.map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

		match metadata.pointer("/output/abi") {
			Some(serde_json::Value::Array(entries)) => Ok(Abi::new(entries.clone())),
			Some(_) => Err(ProviderError::MalformedResponse(
				"output.abi is not an array".to_string(),
			)),
			None => Err(ProviderError::NotFound),
		}
	}
}

#[async_trait]
impl AbiProvider for SourcifyProvider {
	fn kind(&self) -> ProviderKind {
		ProviderKind::SourceVerification
	}

	fn is_applicable(&self, endpoints: &ChainEndpoints) -> bool {
		endpoints.verification.is_some()
	}

	async fn attempt(
		&self,
		address: &Address,
		chain: ChainId,
		endpoints: &ChainEndpoints,
		timeout: Duration,
	) -> ProviderResult<Abi> {
		let verification = endpoints
			.verification
			.as_ref()
			.ok_or(ProviderError::Inapplicable)?;

		let url = format!(
			"{}/files/{}/{}",
			verification.base_url, verification.chain_slug, address
		);
		debug!(%chain, %address, "querying source-verification service");

		let body = self.transport.get(&url, timeout).await?;
		let files: Vec<VerifiedFile> = serde_json::from_str(&body)
			.map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

		Self::extract_abi(&files)
	}
}
