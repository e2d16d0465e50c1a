//! Chain identifiers and per-chain provider endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const ACALA: Self = Self(787);
	pub const KARURA: Self = Self(686);
	pub const MANDALA: Self = Self(595);
	pub const ASTAR: Self = Self(592);
	pub const SHIDEN: Self = Self(336);
	pub const SHIBUYA: Self = Self(81);
	pub const BOBABEAM: Self = Self(1294);
	pub const CRONOS: Self = Self(25);
	pub const CRONOS_TESTNET: Self = Self(338);
	pub const EVMOS: Self = Self(9001);
	pub const EVMOS_TESTNET: Self = Self(9000);
	pub const HARMONY: Self = Self(1666600000);
	pub const HARMONY_TESTNET: Self = Self(1666700000);
	pub const MOONBEAM: Self = Self(1284);
	pub const MOONRIVER: Self = Self(1285);
	pub const MOONBASE: Self = Self(1287);
	pub const TELOS: Self = Self(40);
	pub const TELOS_TESTNET: Self = Self(41);
	pub const THUNDER_CORE: Self = Self(108);
	pub const VELAS: Self = Self(106);
	pub const VELAS_TESTNET: Self = Self(111);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// First-party gateway endpoint for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayEndpoint {
	pub base_url: String,
}

/// Hosted block-explorer endpoint (keyless Etherscan-compatible API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerEndpoint {
	pub base_url: String,
}

/// Scan-family endpoint (Etherscan-compatible API behind an API key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEndpoint {
	pub base_url: String,
	/// Appended as the `apiKey` query parameter when present.
	#[serde(default)]
	pub api_key: Option<String>,
}

/// Content-addressed source-verification service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEndpoint {
	pub base_url: String,
	/// Chain slug in the service's namespace; the chain id for EVM networks.
	pub chain_slug: String,
}

/// Endpoints a chain exposes, one optional slot per provider family.
///
/// Absence of a slot means the corresponding provider is inapplicable for
/// the chain, not an error. A record is derived once per resolution and
/// never mutated while the race runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEndpoints {
	#[serde(default)]
	pub gateway: Option<GatewayEndpoint>,
	#[serde(default)]
	pub explorer: Option<ExplorerEndpoint>,
	#[serde(default)]
	pub scan: Option<ScanEndpoint>,
	#[serde(default)]
	pub verification: Option<VerificationEndpoint>,
}

impl ChainEndpoints {
	/// True when no provider family is configured at all.
	pub fn is_empty(&self) -> bool {
		self.gateway.is_none()
			&& self.explorer.is_none()
			&& self.scan.is_none()
			&& self.verification.is_none()
	}
}
