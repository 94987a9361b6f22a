//! Enumerated chain and gas estimator kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Chain family with behaviour that differs from plain Ethereum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Arbitrum,
    Metis,
    Optimism,
    XDai,
}

impl ChainType {
    pub const ALL: [ChainType; 4] = [Self::Arbitrum, Self::Metis, Self::Optimism, Self::XDai];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arbitrum => "arbitrum",
            Self::Metis => "metis",
            Self::Optimism => "optimism",
            Self::XDai => "xdai",
        }
    }
}

/// Strategy used to estimate gas prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasEstimatorMode {
    BlockHistory,
    FixedPrice,
    Optimism2,
    L2Suggested,
}

impl GasEstimatorMode {
    pub const ALL: [GasEstimatorMode; 4] = [
        Self::BlockHistory,
        Self::FixedPrice,
        Self::Optimism2,
        Self::L2Suggested,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlockHistory => "BlockHistory",
            Self::FixedPrice => "FixedPrice",
            Self::Optimism2 => "Optimism2",
            Self::L2Suggested => "L2Suggested",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GasEstimatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "chain type",
                value: s.to_string(),
            })
    }
}

impl FromStr for GasEstimatorMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "gas estimator mode",
                value: s.to_string(),
            })
    }
}
