//! Default-definition documents
//!
//! A document is a TOML file holding an optional `ChainID` plus any of the
//! [`Chain`] fields at the top level. Exactly one document, `fallback.toml`,
//! omits the chain id.

use chain_types::ChainId;

use super::chain::Chain;

/// Document stem reserved for the fallback defaults.
pub const FALLBACK_STEM: &str = "fallback";

/// Key carrying the chain id inside a document.
pub const CHAIN_ID_KEY: &str = "ChainID";

/// A raw, named default-definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsDocument {
    /// Source name, e.g. `Ethereum_Mainnet.toml`
    pub name: String,

    /// TOML text
    pub contents: String,
}

/// A document after decoding, before registry validation.
#[derive(Debug, Clone)]
pub struct DecodedDocument {
    pub chain_id: Option<ChainId>,
    pub chain: Chain,
}

impl DefaultsDocument {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Source name without its file-type suffix.
    pub fn stem(&self) -> &str {
        document_stem(&self.name)
    }

    /// Human-readable name derived from the source name.
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    pub fn is_fallback(&self) -> bool {
        self.stem() == FALLBACK_STEM
    }

    /// Decode the document, rejecting any key the schema does not declare.
    pub fn decode(&self) -> Result<DecodedDocument, toml::de::Error> {
        let mut table: toml::Table = toml::from_str(&self.contents)?;
        let chain_id = table
            .remove(CHAIN_ID_KEY)
            .map(|value| value.try_into::<ChainId>())
            .transpose()?;
        let chain = toml::Value::Table(table).try_into::<Chain>()?;
        Ok(DecodedDocument { chain_id, chain })
    }
}

/// Strip the file-type suffix from a document name.
pub fn document_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Derive the display name of a document: stem with `_` replaced by spaces.
pub fn display_name(name: &str) -> String {
    document_stem(name).replace('_', " ")
}
