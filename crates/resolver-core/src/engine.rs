//! The resolution engine.
//!
//! One `resolve()` call fans out to every adapter whose endpoint is
//! configured for the chain, races them concurrently, and returns the
//! first successful ABI. Provider failures never escape the engine; the
//! caller sees `Found` or `NotFound` and nothing else.

use resolver_chains::ChainRegistry;
use resolver_config::ResolverConfig;
use resolver_providers::{default_providers, HttpTransport};
use resolver_types::{
	AbiProvider, Address, ChainId, Environment, FetchTransport, ResolutionOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Multi-provider ABI resolver.
///
/// Cheap to share: wrap it in `Arc` and call [`Resolver::resolve`] from
/// as many tasks as needed. The registry and adapter set are fixed at
/// construction; each call derives its inputs fresh and shares no
/// mutable state with concurrent calls.
pub struct Resolver {
	registry: Arc<ChainRegistry>,
	providers: Vec<Arc<dyn AbiProvider>>,
	timeout: Duration,
}

impl Resolver {
	pub fn new(
		registry: Arc<ChainRegistry>,
		providers: Vec<Arc<dyn AbiProvider>>,
		timeout: Duration,
	) -> Self {
		Self {
			registry,
			providers,
			timeout,
		}
	}

	/// Wires the default engine from configuration: built-in chain table
	/// resolved against the configured environment, configuration
	/// overrides applied on top, all four adapters over one HTTP
	/// transport.
	pub fn from_config(config: &ResolverConfig) -> Self {
		let environment = Environment::from_production_flag(config.resolver.production);

		let mut registry = ChainRegistry::with_defaults(environment, &config.chain_scan_keys());
		for (chain, patch) in config.chain_overrides() {
			registry.apply_override(chain, patch);
		}

		let transport: Arc<dyn FetchTransport> = Arc::new(HttpTransport::new());

		Self::new(
			Arc::new(registry),
			default_providers(transport),
			config.resolver.timeout(),
		)
	}

	/// Resolve the ABI for `address` on `chain`.
	///
	/// Fans out one attempt per applicable provider and returns the
	/// first success; attempts still in flight after the winner are
	/// abandoned and their results discarded. An unsupported chain, a
	/// chain with no applicable providers, or a race where every attempt
	/// fails all collapse to [`ResolutionOutcome::NotFound`].
	pub async fn resolve(&self, address: &Address, chain: ChainId) -> ResolutionOutcome {
		let Some(endpoints) = self.registry.endpoints_for(&chain) else {
			debug!(%chain, "chain not present in registry");
			return ResolutionOutcome::NotFound;
		};

		let applicable: Vec<Arc<dyn AbiProvider>> = self
			.providers
			.iter()
			.filter(|provider| provider.is_applicable(endpoints))
			.cloned()
			.collect();

		if applicable.is_empty() {
			debug!(%chain, "no applicable providers configured");
			return ResolutionOutcome::NotFound;
		}

		debug!(
			%chain,
			%address,
			providers = applicable.len(),
			"racing providers"
		);

		let mut attempts = JoinSet::new();
		for provider in applicable {
			let address = address.clone();
			let endpoints = endpoints.clone();
			let timeout = self.timeout;
			attempts.spawn(async move {
				let outcome = provider.attempt(&address, chain, &endpoints, timeout).await;
				(provider.kind(), outcome)
			});
		}

		while let Some(joined) = attempts.join_next().await {
			match joined {
				Ok((provider, Ok(abi))) => {
					// First success wins; abandon the rest of the race.
					attempts.abort_all();
					info!(%chain, %address, %provider, entries = abi.len(), "resolved ABI");
					return ResolutionOutcome::Found { abi, provider };
				}
				Ok((provider, Err(error))) => {
					debug!(%chain, %address, %provider, %error, "provider attempt failed");
				}
				Err(error) => {
					warn!(%chain, %address, %error, "provider task did not complete");
				}
			}
		}

		debug!(%chain, %address, "all providers exhausted");
		ResolutionOutcome::NotFound
	}
}
