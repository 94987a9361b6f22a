//! Token amounts: native gas currency in wei, LINK in juels.
//!
//! Both are arbitrary-precision, non-negative integers of the smallest
//! denomination. The text form is either a bare integer of that
//! denomination or `<decimal> <unit>`, e.g. `20 gwei`, `0.1 link`.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// Wei denominations, smallest first.
const WEI_UNITS: &[(&str, u32)] = &[
    ("wei", 0),
    ("kwei", 3),
    ("mwei", 6),
    ("gwei", 9),
    ("micro", 12),
    ("milli", 15),
    ("ether", 18),
    ("kether", 21),
    ("mether", 24),
    ("gether", 27),
    ("tether", 30),
];

/// LINK denominations, smallest first.
const LINK_UNITS: &[(&str, u32)] = &[("juels", 0), ("link", 18)];

const LINK_DECIMALS: u32 = 18;

/// Amount of the chain's native currency, in wei.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wei(BigUint);

/// Amount of LINK, in juels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Link(BigUint);

impl Wei {
    pub fn new(wei: BigUint) -> Self {
        Self(wei)
    }

    pub fn from_gwei(gwei: u64) -> Self {
        Self(BigUint::from(gwei) * BigUint::from(10u32).pow(9))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl Link {
    pub fn from_juels(juels: BigUint) -> Self {
        Self(juels)
    }

    pub fn as_juels(&self) -> &BigUint {
        &self.0
    }
}

impl From<u64> for Wei {
    fn from(wei: u64) -> Self {
        Self(BigUint::from(wei))
    }
}

impl From<u64> for Link {
    fn from(juels: u64) -> Self {
        Self(BigUint::from(juels))
    }
}

impl FromStr for Wei {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, WEI_UNITS).map(Self)
    }
}

impl FromStr for Link {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, LINK_UNITS).map(Self)
    }
}

impl fmt::Display for Wei {
    /// Uses the largest unit that represents the amount exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_zero() {
            return f.write_str("0");
        }
        for (name, exponent) in WEI_UNITS.iter().rev() {
            let scale = BigUint::from(10u32).pow(*exponent);
            if (&self.0 % &scale).is_zero() {
                return write!(f, "{} {}", &self.0 / &scale, name);
            }
        }
        write!(f, "{} wei", self.0)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = BigUint::from(10u32).pow(LINK_DECIMALS);
        let whole = &self.0 / &scale;
        let fraction = &self.0 % &scale;
        if fraction.is_zero() {
            return write!(f, "{whole} link");
        }
        let padded = format!("{:0>width$}", fraction.to_string(), width = LINK_DECIMALS as usize);
        write!(f, "{whole}.{} link", padded.trim_end_matches('0'))
    }
}

/// Parse `<decimal>[ ]<unit>` (or a bare integer of the smallest unit).
fn parse_scaled(input: &str, units: &[(&str, u32)]) -> Result<BigUint, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let number = number.trim_end();

    let exponent = if unit.is_empty() {
        0
    } else {
        units
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(unit))
            .map(|(_, exponent)| *exponent)
            .ok_or_else(|| ParseError::UnknownUnit {
                input: input.to_string(),
                unit: unit.to_string(),
            })?
    };

    let (whole, fraction, has_point) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction, true),
        None => (number, "", false),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty()
        || (has_point && fraction.is_empty())
        || !all_digits(whole)
        || !all_digits(fraction)
    {
        return Err(ParseError::InvalidNumber(input.to_string()));
    }

    let fraction = fraction.trim_end_matches('0');
    let fraction_len = fraction.len() as u32;
    if fraction_len > exponent {
        return Err(ParseError::TooPrecise {
            input: input.to_string(),
            max_decimals: exponent,
        });
    }

    let mut digits = String::with_capacity(whole.len() + exponent as usize);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take((exponent - fraction_len) as usize));

    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ParseError::InvalidNumber(input.to_string()))
}

impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor::<Wei>::new("a wei amount such as '20 gwei'"))
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor::<Link>::new("a LINK amount such as '0.1 link'"))
    }
}

/// Accepts a non-negative integer of the smallest unit or a unit string.
struct AmountVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<T> AmountVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for AmountVisitor<T>
where
    T: FromStr<Err = ParseError> + From<u64>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        Ok(T::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        u64::try_from(v)
            .map(T::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}
