//! Registry mapping chains to their provider endpoints.
//!
//! The registry is the single lookup the engine consults before a race:
//! a chain either resolves to a `ChainEndpoints` record or to a typed
//! absence. An unsupported chain is a legitimate outcome, never an error
//! raised across the engine boundary.
//!
//! # Thread Safety
//!
//! The registry is immutable after construction in typical use; wrap it
//! in `Arc` to share it. Mutating methods exist for construction and for
//! applying configuration overrides before the registry is shared.

use crate::table;
use resolver_types::{ChainEndpoints, ChainId, Environment};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	#[error("chain {0} already registered")]
	AlreadyRegistered(ChainId),
}

/// Registry of per-chain provider endpoints.
pub struct ChainRegistry {
	endpoints: HashMap<ChainId, ChainEndpoints>,
}

impl ChainRegistry {
	/// Creates a new empty registry.
	pub fn new() -> Self {
		Self {
			endpoints: HashMap::new(),
		}
	}

	/// Creates a registry from the built-in chain table.
	///
	/// # Arguments
	///
	/// * `environment` - Selects production or staging gateway hosts
	/// * `scan_keys` - Scan-family API keys by chain; chains without a key
	///   get no scan endpoint and their ScanAPI adapter stays inapplicable
	pub fn with_defaults(
		environment: Environment,
		scan_keys: &HashMap<ChainId, String>,
	) -> Self {
		let endpoints = table::default_endpoints(environment, scan_keys)
			.into_iter()
			.collect::<HashMap<_, _>>();
		info!(
			chains = endpoints.len(),
			?environment,
			"chain registry built from defaults"
		);
		Self { endpoints }
	}

	/// Registers endpoints for a chain.
	///
	/// # Errors
	///
	/// Returns an error if the chain is already registered; use
	/// [`ChainRegistry::apply_override`] to change an existing record.
	pub fn register(
		&mut self,
		chain: ChainId,
		endpoints: ChainEndpoints,
	) -> Result<(), RegistryError> {
		if self.endpoints.contains_key(&chain) {
			return Err(RegistryError::AlreadyRegistered(chain));
		}
		debug!(%chain, "registering chain endpoints");
		self.endpoints.insert(chain, endpoints);
		Ok(())
	}

	/// Merges a configuration override into a chain's record.
	///
	/// Slots present in `patch` replace the existing slot; absent slots
	/// keep their current value. Unknown chains are added wholesale, so
	/// coverage can grow from configuration alone.
	pub fn apply_override(&mut self, chain: ChainId, patch: ChainEndpoints) {
		match self.endpoints.get_mut(&chain) {
			Some(existing) => {
				debug!(%chain, "applying endpoint override");
				if patch.gateway.is_some() {
					existing.gateway = patch.gateway;
				}
				if patch.explorer.is_some() {
					existing.explorer = patch.explorer;
				}
				if patch.scan.is_some() {
					existing.scan = patch.scan;
				}
				if patch.verification.is_some() {
					existing.verification = patch.verification;
				}
			}
			None => {
				debug!(%chain, "adding chain from configuration");
				self.endpoints.insert(chain, patch);
			}
		}
	}

	/// Looks up the endpoints for a chain.
	///
	/// `None` is the typed "unsupported" signal; the engine maps it to
	/// zero applicable adapters.
	pub fn endpoints_for(&self, chain: &ChainId) -> Option<&ChainEndpoints> {
		self.endpoints.get(chain)
	}

	/// Returns all registered chain ids, in no guaranteed order.
	pub fn chains(&self) -> Vec<ChainId> {
		self.endpoints.keys().copied().collect()
	}
}

impl Default for ChainRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ChainRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChainRegistry")
			.field("chains", &self.endpoints.keys().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use resolver_types::{GatewayEndpoint, ScanEndpoint};

	fn gateway(base_url: &str) -> ChainEndpoints {
		ChainEndpoints {
			gateway: Some(GatewayEndpoint {
				base_url: base_url.to_string(),
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_register_and_lookup() {
		let mut registry = ChainRegistry::new();
		registry
			.register(ChainId(592), gateway("https://gateway.example"))
			.unwrap();

		let endpoints = registry.endpoints_for(&ChainId(592)).unwrap();
		assert_eq!(
			endpoints.gateway.as_ref().unwrap().base_url,
			"https://gateway.example"
		);

		assert!(registry.endpoints_for(&ChainId(1)).is_none());
	}

	#[test]
	fn test_duplicate_registration() {
		let mut registry = ChainRegistry::new();
		registry
			.register(ChainId(592), gateway("https://first.example"))
			.unwrap();

		let result = registry.register(ChainId(592), gateway("https://second.example"));
		assert_eq!(result, Err(RegistryError::AlreadyRegistered(ChainId(592))));
	}

	#[test]
	fn test_list_chains() {
		let mut registry = ChainRegistry::new();
		assert!(registry.chains().is_empty());

		registry
			.register(ChainId(592), ChainEndpoints::default())
			.unwrap();
		registry
			.register(ChainId(1284), ChainEndpoints::default())
			.unwrap();

		let chains = registry.chains();
		assert_eq!(chains.len(), 2);
		assert!(chains.contains(&ChainId(592)));
		assert!(chains.contains(&ChainId(1284)));
	}

	#[test]
	fn test_defaults_cover_supported_chains() {
		let registry =
			ChainRegistry::with_defaults(Environment::Production, &HashMap::new());

		assert!(registry.endpoints_for(&ChainId::ASTAR).is_some());
		assert!(registry.endpoints_for(&ChainId::HARMONY_TESTNET).is_some());
		// Ethereum mainnet was never part of the table.
		assert!(registry.endpoints_for(&ChainId(1)).is_none());
	}

	#[test]
	fn test_override_replaces_only_present_slots() {
		let mut registry =
			ChainRegistry::with_defaults(Environment::Production, &HashMap::new());

		let patch = ChainEndpoints {
			scan: Some(ScanEndpoint {
				base_url: "https://api.scan.example".to_string(),
				api_key: None,
			}),
			..Default::default()
		};
		registry.apply_override(ChainId::ASTAR, patch);

		let endpoints = registry.endpoints_for(&ChainId::ASTAR).unwrap();
		assert_eq!(
			endpoints.scan.as_ref().unwrap().base_url,
			"https://api.scan.example"
		);
		// Untouched slots survive the merge.
		assert!(endpoints.gateway.is_some());
		assert!(endpoints.verification.is_some());
	}

	#[test]
	fn test_override_adds_unknown_chain() {
		let mut registry = ChainRegistry::new();
		registry.apply_override(ChainId(59144), gateway("https://gateway.linea.example"));

		assert!(registry.endpoints_for(&ChainId(59144)).is_some());
	}
}
