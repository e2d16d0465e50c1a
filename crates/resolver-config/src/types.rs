//! Configuration types consumed at startup.
//!
//! The resolver owns none of these values; they are injected once when the
//! engine is constructed. Defaults are chosen so that an engine built with
//! no configuration file at all still races the keyless providers.

use resolver_types::{ChainEndpoints, ChainId, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// Top-level resolver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
	#[serde(default)]
	pub resolver: ResolverSettings,

	/// Scan-family API keys by chain id.
	///
	/// A chain without a key never materializes a scan endpoint, so its
	/// ScanAPI adapter stays inapplicable rather than failing at request
	/// time.
	#[serde(default)]
	pub scan_api_keys: HashMap<String, String>,

	/// Per-chain endpoint overrides merged over the built-in table.
	///
	/// Provider coverage drifts over time; keeping the table editable from
	/// configuration means coverage changes ship without touching the
	/// engine. Slots present here replace the built-in slot for that
	/// chain; unknown chain ids add new entries.
	#[serde(default)]
	pub chains: HashMap<String, ChainEndpoints>,
}

/// Engine-level settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverSettings {
	/// Selects production or staging gateway hosts.
	pub production: bool,
	/// Per-attempt transport bound in seconds.
	pub timeout_secs: u64,
}

impl Default for ResolverSettings {
	fn default() -> Self {
		Self {
			production: true,
			timeout_secs: DEFAULT_TIMEOUT.as_secs(),
		}
	}
}

impl ResolverSettings {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}

impl ResolverConfig {
	/// Scan API keys with their chain ids parsed.
	///
	/// Entries whose key does not parse as a chain id are skipped with a
	/// warning; the loader rejects them up front when the file goes
	/// through `ConfigLoader`.
	pub fn chain_scan_keys(&self) -> HashMap<ChainId, String> {
		self.scan_api_keys
			.iter()
			.filter_map(|(chain, key)| match chain.parse::<ChainId>() {
				Ok(chain) => Some((chain, key.clone())),
				Err(_) => {
					warn!(%chain, "ignoring scan API key with invalid chain id");
					None
				}
			})
			.collect()
	}

	/// Per-chain endpoint overrides with their chain ids parsed.
	pub fn chain_overrides(&self) -> Vec<(ChainId, ChainEndpoints)> {
		self.chains
			.iter()
			.filter_map(|(chain, endpoints)| match chain.parse::<ChainId>() {
				Ok(chain) => Some((chain, endpoints.clone())),
				Err(_) => {
					warn!(%chain, "ignoring endpoint override with invalid chain id");
					None
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ResolverConfig::default();
		assert!(config.resolver.production);
		assert_eq!(config.resolver.timeout(), DEFAULT_TIMEOUT);
		assert!(config.scan_api_keys.is_empty());
		assert!(config.chains.is_empty());
	}

	#[test]
	fn test_parse_minimal_toml() {
		let config: ResolverConfig = toml::from_str(
			r#"
			[resolver]
			production = false
			timeout_secs = 3
			"#,
		)
		.unwrap();
		assert!(!config.resolver.production);
		assert_eq!(config.resolver.timeout(), Duration::from_secs(3));
	}

	#[test]
	fn test_scan_keys_parse_chain_ids() {
		let config: ResolverConfig = toml::from_str(
			r#"
			[scan_api_keys]
			"1284" = "moonscan-key"
			"bogus" = "dropped"
			"#,
		)
		.unwrap();

		let keys = config.chain_scan_keys();
		assert_eq!(keys.len(), 1);
		assert_eq!(keys.get(&ChainId::MOONBEAM).map(String::as_str), Some("moonscan-key"));
	}

	#[test]
	fn test_chain_overrides_parse() {
		let config: ResolverConfig = toml::from_str(
			r#"
			[chains."592".explorer]
			base_url = "https://blockscout.example/astar"
			"#,
		)
		.unwrap();

		let overrides = config.chain_overrides();
		assert_eq!(overrides.len(), 1);
		let (chain, endpoints) = &overrides[0];
		assert_eq!(*chain, ChainId::ASTAR);
		assert_eq!(
			endpoints.explorer.as_ref().unwrap().base_url,
			"https://blockscout.example/astar"
		);
		assert!(endpoints.gateway.is_none());
	}
}
