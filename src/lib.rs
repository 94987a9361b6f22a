//! Chain Defaults - layered runtime tunables for EVM networks
//!
//! This crate loads the bundled per-network default documents into an
//! immutable [`Registry`] and overlays them onto chain configurations:
//! fallback defaults first, then the defaults of the selected chain.

pub mod config;

pub use chain_types::{ChainId, ChainType, Duration, GasEstimatorMode, Link, ParseError, Wei};
pub use config::{Chain, ChainDefaults, DefaultsDocument, LoadError, Overlay, Registry};
