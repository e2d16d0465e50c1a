//! Common types used throughout the resolver system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract address as supplied by the caller.
///
/// The resolver only splices the address into provider URLs and never
/// interprets it, so it is kept as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
	pub fn new(address: impl Into<String>) -> Self {
		Self(address.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for Address {
	fn from(address: &str) -> Self {
		Self::new(address)
	}
}

impl From<String> for Address {
	fn from(address: String) -> Self {
		Self(address)
	}
}

/// A contract ABI as produced by a provider.
///
/// Order-preserving sequence of interface-entry descriptors. The resolver
/// hands it back verbatim; individual entries are opaque to the engine.
/// Every provider path, whether the ABI arrives as a plain JSON array or
/// as a JSON-encoded string needing a second decode, normalizes into this
/// one representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi(Vec<serde_json::Value>);

impl Abi {
	pub fn new(entries: Vec<serde_json::Value>) -> Self {
		Self(entries)
	}

	pub fn entries(&self) -> &[serde_json::Value] {
		&self.0
	}

	pub fn into_entries(self) -> Vec<serde_json::Value> {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<serde_json::Value>> for Abi {
	fn from(entries: Vec<serde_json::Value>) -> Self {
		Self(entries)
	}
}

/// Deployment environment used when selecting per-chain endpoints.
///
/// Injected once at registry construction; several chains expose
/// different gateway hosts for production and staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	Production,
	Staging,
}

impl Environment {
	pub fn from_production_flag(production: bool) -> Self {
		if production {
			Self::Production
		} else {
			Self::Staging
		}
	}

	pub fn is_production(&self) -> bool {
		matches!(self, Self::Production)
	}
}
