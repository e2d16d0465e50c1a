// resolver-core/src/lib.rs

pub mod engine;

pub use engine::Resolver;

// Callers interact with the engine through these types.
pub use resolver_types::{Abi, Address, ChainId, ProviderKind, ResolutionOutcome};
