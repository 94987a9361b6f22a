//! Chain configuration defaults
//!
//! Resolves the default layers of a chain configuration:
//! 1. Fallback defaults, applied to every chain
//! 2. Chain-specific defaults, keyed by chain id
//!
//! Explicit user configuration is applied on top by the caller.

pub mod bundled;
pub mod chain;
pub mod defaults;
pub mod document;
pub mod error;
pub mod schema;

pub use chain::{BlockHistoryEstimator, Chain, HeadTracker, KeySpecific, NodePool};
pub use defaults::{ChainDefaults, Registry};
pub use document::{display_name, DecodedDocument, DefaultsDocument, FALLBACK_STEM};
pub use error::LoadError;
pub use schema::Overlay;
