//! Error types for scalar value parsing.

/// Errors produced while parsing the text form of a value type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty value")]
    Empty,

    #[error("invalid chain id '{0}': expected a decimal integer")]
    InvalidChainId(String),

    #[error("invalid amount '{0}': expected a decimal number")]
    InvalidNumber(String),

    #[error("unknown unit '{unit}' in '{input}'")]
    UnknownUnit { input: String, unit: String },

    #[error("amount '{input}' is more precise than its unit allows ({max_decimals} decimals)")]
    TooPrecise { input: String, max_decimals: u32 },

    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
