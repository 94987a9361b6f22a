//! Chain Configuration Value Types
//!
//! Scalar types used by the chain configuration schema: arbitrary-precision
//! chain identifiers and token amounts, human-readable durations, and the
//! enumerated chain and estimator kinds.

pub mod amount;
pub mod chain_id;
pub mod duration;
pub mod error;
pub mod kind;

pub use amount::{Link, Wei};
pub use chain_id::ChainId;
pub use duration::Duration;
pub use error::ParseError;
pub use kind::{ChainType, GasEstimatorMode};
