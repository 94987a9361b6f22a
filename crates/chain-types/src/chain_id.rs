//! Arbitrary-precision chain identifiers.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// Identifier of a blockchain network.
///
/// Ordering, equality and hashing are numeric, so `9 < 10` and ids larger
/// than any fixed-width integer compare correctly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(BigInt);

impl ChainId {
    /// Wrap an existing big integer.
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    /// Borrow the underlying integer.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Consume the id, returning the underlying integer.
    pub fn into_bigint(self) -> BigInt {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidChainId(s.to_string()));
        }
        trimmed
            .parse::<BigInt>()
            .map(Self)
            .map_err(|_| ParseError::InvalidChainId(s.to_string()))
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for ChainId {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<BigInt> for ChainId {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChainIdVisitor)
    }
}

struct ChainIdVisitor;

impl<'de> Visitor<'de> for ChainIdVisitor {
    type Value = ChainId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a chain id as an integer or decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ChainId, E> {
        Ok(ChainId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ChainId, E> {
        Ok(ChainId::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ChainId, E> {
        v.parse().map_err(E::custom)
    }
}
