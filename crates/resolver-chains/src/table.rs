//! Built-in chain → endpoint table.
//!
//! The table is data, not control flow: one record per supported network,
//! resolved against the deployment environment when the registry is
//! constructed. Provider coverage changes by editing records or overriding
//! them from configuration, never by touching the engine.

use resolver_types::{
	ChainEndpoints, ChainId, Environment, ExplorerEndpoint, GatewayEndpoint, ScanEndpoint,
	VerificationEndpoint,
};
use std::collections::HashMap;

/// Default source-verification service root.
pub const SOURCIFY_BASE_URL: &str = "https://sourcify.dev/server";

/// Shared hosted-explorer root; chains on it are keyed by chain id.
pub const BLOCKSCOUT_HOST: &str = "https://blockscout.com";

/// Gateway hosts for one chain, one per environment.
///
/// An empty string means the chain offers no gateway in that environment
/// and resolves to a typed absence, never to an empty URL.
struct GatewayHosts {
	production: &'static str,
	staging: &'static str,
}

struct ChainRecord {
	id: ChainId,
	gateway: Option<GatewayHosts>,
	/// Served by the shared hosted explorer.
	hosted_explorer: bool,
	/// Scan-family API host; only materialized when a key is configured.
	scan_host: Option<&'static str>,
}

const CHAINS: &[ChainRecord] = &[
	ChainRecord {
		id: ChainId::ACALA,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.acala.network",
			staging: "https://gateway.staging.safe.acala.network",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::KARURA,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.acala.network",
			staging: "https://gateway.staging.safe.acala.network",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::MANDALA,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.acala.network",
			staging: "https://gateway.staging.safe.acala.network",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::ASTAR,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.astar.network",
			staging: "https://gateway.staging-safe.astar.network",
		}),
		hosted_explorer: true,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::SHIDEN,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.astar.network",
			staging: "https://gateway.staging-safe.astar.network",
		}),
		hosted_explorer: true,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::SHIBUYA,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.astar.network",
			staging: "https://gateway.staging-safe.astar.network",
		}),
		hosted_explorer: true,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::BOBABEAM,
		gateway: Some(GatewayHosts {
			production: "https://gateway.multisig.bobabeam.boba.network",
			staging: "https://gateway.staging.multisig.bobabeam.boba.network",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::CRONOS,
		gateway: Some(GatewayHosts {
			production: "https://gateway.cronos-safe.org",
			staging: "https://gateway-cronos-safe.crolabs-int.co",
		}),
		hosted_explorer: false,
		scan_host: Some("https://api.cronoscan.com"),
	},
	ChainRecord {
		id: ChainId::CRONOS_TESTNET,
		gateway: Some(GatewayHosts {
			production: "https://gateway.cronos-safe.org",
			staging: "https://gateway-cronos-safe.crolabs-int.co",
		}),
		hosted_explorer: false,
		scan_host: Some("https://api-testnet.cronoscan.com"),
	},
	ChainRecord {
		id: ChainId::EVMOS,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.evmos.org",
			staging: "https://gateway.safe.evmos.dev",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::EVMOS_TESTNET,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.evmos.org",
			staging: "https://gateway.safe.evmos.dev",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::HARMONY,
		gateway: Some(GatewayHosts {
			production: "https://gateway.multisig.harmony.one",
			staging: "https://gateway.staging-safe.harmony.one",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::HARMONY_TESTNET,
		gateway: Some(GatewayHosts {
			production: "https://gateway.multisig.harmony.one",
			staging: "https://gateway.staging-safe.harmony.one",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::MOONBEAM,
		gateway: Some(GatewayHosts {
			production: "https://gateway.multisig.moonbeam.network",
			staging: "https://gateway.staging.multisig.moonbeam.network",
		}),
		hosted_explorer: false,
		scan_host: Some("https://api-moonbeam.moonscan.io"),
	},
	ChainRecord {
		id: ChainId::MOONRIVER,
		gateway: Some(GatewayHosts {
			production: "https://gateway.multisig.moonbeam.network",
			staging: "https://gateway.staging.multisig.moonbeam.network",
		}),
		hosted_explorer: false,
		scan_host: Some("https://api-moonriver.moonscan.io"),
	},
	ChainRecord {
		id: ChainId::MOONBASE,
		gateway: Some(GatewayHosts {
			production: "https://gateway.multisig.moonbeam.network",
			staging: "https://gateway.staging.multisig.moonbeam.network",
		}),
		hosted_explorer: false,
		scan_host: Some("https://api-moonbase.moonscan.io"),
	},
	ChainRecord {
		id: ChainId::TELOS,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.telos.net",
			staging: "https://gateway.safe.telos.net",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::TELOS_TESTNET,
		gateway: Some(GatewayHosts {
			production: "https://gateway.safe.telos.net",
			staging: "https://gateway.safe.telos.net",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::THUNDER_CORE,
		// No production gateway is offered for ThunderCore.
		gateway: Some(GatewayHosts {
			production: "",
			staging: "https://gateway.staging.safe.thundercore.com",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::VELAS,
		gateway: Some(GatewayHosts {
			production: "https://gateway.velasafe.com",
			staging: "https://gateway.staging.velasafe.com",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
	ChainRecord {
		id: ChainId::VELAS_TESTNET,
		gateway: Some(GatewayHosts {
			production: "https://gateway.velasafe.com",
			staging: "https://gateway.staging.velasafe.com",
		}),
		hosted_explorer: false,
		scan_host: None,
	},
];

impl ChainRecord {
	fn endpoints(&self, environment: Environment, scan_key: Option<&str>) -> ChainEndpoints {
		let gateway = self
			.gateway
			.as_ref()
			.map(|hosts| {
				if environment.is_production() {
					hosts.production
				} else {
					hosts.staging
				}
			})
			.filter(|base_url| !base_url.is_empty())
			.map(|base_url| GatewayEndpoint {
				base_url: base_url.to_string(),
			});

		let explorer = self.hosted_explorer.then(|| ExplorerEndpoint {
			base_url: format!("{}/{}", BLOCKSCOUT_HOST, self.id),
		});

		let scan = match (self.scan_host, scan_key) {
			(Some(base_url), Some(key)) => Some(ScanEndpoint {
				base_url: base_url.to_string(),
				api_key: Some(key.to_string()),
			}),
			_ => None,
		};

		ChainEndpoints {
			gateway,
			explorer,
			scan,
			verification: Some(VerificationEndpoint {
				base_url: SOURCIFY_BASE_URL.to_string(),
				chain_slug: self.id.to_string(),
			}),
		}
	}
}

/// Resolve the built-in table against an environment and the configured
/// scan API keys.
pub fn default_endpoints(
	environment: Environment,
	scan_keys: &HashMap<ChainId, String>,
) -> Vec<(ChainId, ChainEndpoints)> {
	CHAINS
		.iter()
		.map(|record| {
			let key = scan_keys.get(&record.id).map(String::as_str);
			(record.id, record.endpoints(environment, key))
		})
		.collect()
}
