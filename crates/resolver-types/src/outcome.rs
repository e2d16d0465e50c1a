//! Resolution outcome handed back to callers.

use crate::{common::Abi, providers::ProviderKind};

/// Result of a single `resolve()` call.
///
/// Provider-level failure detail is deliberately erased: callers get an
/// ABI or nothing, and diagnostics stay in the logs. Constructed once per
/// resolution and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
	/// The race produced an ABI; `provider` names the winner.
	Found { abi: Abi, provider: ProviderKind },
	/// Every applicable provider failed, or none were applicable.
	NotFound,
}

impl ResolutionOutcome {
	pub fn is_found(&self) -> bool {
		matches!(self, Self::Found { .. })
	}

	pub fn abi(&self) -> Option<&Abi> {
		match self {
			Self::Found { abi, .. } => Some(abi),
			Self::NotFound => None,
		}
	}

	pub fn into_abi(self) -> Option<Abi> {
		match self {
			Self::Found { abi, .. } => Some(abi),
			Self::NotFound => None,
		}
	}

	/// The provider that won the race, if any.
	pub fn provider(&self) -> Option<ProviderKind> {
		match self {
			Self::Found { provider, .. } => Some(*provider),
			Self::NotFound => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_outcome_accessors() {
		let abi = Abi::new(vec![json!({"type": "function", "name": "symbol"})]);
		let found = ResolutionOutcome::Found {
			abi: abi.clone(),
			provider: ProviderKind::Gateway,
		};
		assert!(found.is_found());
		assert_eq!(found.abi(), Some(&abi));
		assert_eq!(found.provider(), Some(ProviderKind::Gateway));
		assert_eq!(found.into_abi(), Some(abi));

		let missing = ResolutionOutcome::NotFound;
		assert!(!missing.is_found());
		assert_eq!(missing.abi(), None);
		assert_eq!(missing.provider(), None);
	}
}
