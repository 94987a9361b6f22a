//! Registry load errors
//!
//! All of these are defects in the default-definition data. A registry is
//! never constructed when any of them occurs.

use std::path::PathBuf;

use chain_types::ChainId;

/// Errors that can occur while loading default-definition documents
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read defaults directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{document}': {source}")]
    Read {
        document: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode '{document}': {source}")]
    Decode {
        document: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Fallback document '{document}' must not set ChainID, found {chain_id}")]
    FallbackHasChainId { document: String, chain_id: ChainId },

    #[error("Document '{document}' is missing ChainID")]
    MissingChainId { document: String },

    #[error("Document '{document}' repeats ChainID {chain_id} already defined by '{first}'")]
    DuplicateChainId {
        document: String,
        chain_id: ChainId,
        first: String,
    },

    #[error("No fallback document found")]
    MissingFallback,

    #[error("Document '{document}' is a second fallback after '{first}'")]
    DuplicateFallback { document: String, first: String },
}

impl LoadError {
    /// Name of the document that failed, when the failure is tied to one.
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::Read { document, .. }
            | Self::Decode { document, .. }
            | Self::FallbackHasChainId { document, .. }
            | Self::MissingChainId { document }
            | Self::DuplicateChainId { document, .. }
            | Self::DuplicateFallback { document, .. } => Some(document),
            Self::ReadDir { .. } | Self::MissingFallback => None,
        }
    }
}
