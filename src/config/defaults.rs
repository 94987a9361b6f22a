//! Built-in chain defaults registry
//!
//! The registry is built once from a set of default-definition documents
//! and is read-only afterwards. It supplies the two lowest layers of a chain
//! configuration:
//! 1. Fallback defaults (`fallback.toml`), applied to every chain
//! 2. Chain-specific defaults, keyed by chain id
//!
//! Explicit user configuration is layered on top by the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chain_types::ChainId;
use tracing::{debug, info, trace};

use super::bundled;
use super::chain::Chain;
use super::document::DefaultsDocument;
use super::error::LoadError;
use super::schema::Overlay;

/// Chain-specific defaults and the name of the document they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainDefaults {
    /// Chain id declared by the document
    pub chain_id: ChainId,

    /// Display name derived from the document name
    pub name: String,

    /// Chain-specific layer only (the fallback is not merged in)
    pub config: Chain,
}

/// Immutable index of fallback and per-chain defaults.
#[derive(Debug, Clone)]
pub struct Registry {
    fallback: Chain,
    chains: BTreeMap<ChainId, ChainDefaults>,
    ids: Vec<ChainId>,
}

impl Registry {
    /// Load the defaults compiled into this crate.
    ///
    /// An error here means the bundled data is defective; callers should
    /// treat it as fatal.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::load(bundled::documents())
    }

    /// Load every `*.toml` document in `dir`, in file-name order.
    pub fn from_dir(dir: &Path) -> Result<Self, LoadError> {
        let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let contents = fs::read_to_string(&path).map_err(|source| LoadError::Read {
                document: path.display().to_string(),
                source,
            })?;
            documents.push(DefaultsDocument::new(name, contents));
        }

        Self::load(documents)
    }

    /// Build a registry from documents, validating all of them first.
    ///
    /// Exactly one document must be the fallback (`fallback.toml`) and
    /// carry no chain id; every other document must carry a chain id that
    /// no other document uses.
    pub fn load<I>(documents: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = DefaultsDocument>,
    {
        let mut fallback: Option<(String, Chain)> = None;
        let mut chains: BTreeMap<ChainId, ChainDefaults> = BTreeMap::new();
        let mut sources: BTreeMap<ChainId, String> = BTreeMap::new();

        for doc in documents {
            let decoded = doc.decode().map_err(|source| LoadError::Decode {
                document: doc.name.clone(),
                source,
            })?;

            if doc.is_fallback() {
                if let Some(chain_id) = decoded.chain_id {
                    return Err(LoadError::FallbackHasChainId {
                        document: doc.name,
                        chain_id,
                    });
                }
                if let Some((first, _)) = &fallback {
                    return Err(LoadError::DuplicateFallback {
                        document: doc.name,
                        first: first.clone(),
                    });
                }
                debug!(document = %doc.name, "loaded fallback defaults");
                fallback = Some((doc.name, decoded.chain));
                continue;
            }

            let Some(chain_id) = decoded.chain_id else {
                return Err(LoadError::MissingChainId { document: doc.name });
            };
            if let Some(first) = sources.get(&chain_id) {
                return Err(LoadError::DuplicateChainId {
                    document: doc.name,
                    chain_id,
                    first: first.clone(),
                });
            }

            let name = doc.display_name();
            debug!(document = %doc.name, chain_id = %chain_id, name = %name, "loaded chain defaults");
            sources.insert(chain_id.clone(), doc.name);
            chains.insert(
                chain_id.clone(),
                ChainDefaults {
                    chain_id,
                    name,
                    config: decoded.chain,
                },
            );
        }

        let (fallback_document, fallback) = fallback.ok_or(LoadError::MissingFallback)?;
        let ids: Vec<ChainId> = chains.keys().cloned().collect();

        info!(
            chains = ids.len(),
            fallback = %fallback_document,
            "chain defaults registry built"
        );

        Ok(Self {
            fallback,
            chains,
            ids,
        })
    }

    /// Every chain id with built-in defaults, ascending.
    pub fn default_ids(&self) -> &[ChainId] {
        &self.ids
    }

    /// Display name for a chain id; empty when absent or unknown.
    pub fn default_name(&self, chain_id: Option<&ChainId>) -> &str {
        chain_id
            .and_then(|id| self.chains.get(id))
            .map(|entry| entry.name.as_str())
            .unwrap_or("")
    }

    /// The fallback defaults applied to every chain.
    pub fn fallback(&self) -> &Chain {
        &self.fallback
    }

    /// Chain-specific defaults only, without the fallback layer.
    pub fn get(&self, chain_id: &ChainId) -> Option<&ChainDefaults> {
        self.chains.get(chain_id)
    }

    pub fn contains(&self, chain_id: &ChainId) -> bool {
        self.chains.contains_key(chain_id)
    }

    /// Chain entries in ascending chain id order.
    pub fn entries(&self) -> impl Iterator<Item = &ChainDefaults> {
        self.chains.values()
    }

    /// Number of chains with specific defaults (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Overlay the fallback, then the defaults of `chain_id` if known, onto
    /// `target`.
    ///
    /// Explicit fields of each layer replace those already in `target`, so
    /// this must run before any explicit user configuration is applied;
    /// values set earlier are overwritten wherever a default exists.
    pub fn set_defaults(&self, target: &mut Chain, chain_id: Option<&ChainId>) {
        target.set_from(&self.fallback);
        trace!(fields = self.fallback.explicit_fields().len(), "applied fallback defaults");

        let Some(chain_id) = chain_id else {
            debug!("applied fallback defaults without chain id");
            return;
        };
        match self.chains.get(chain_id) {
            Some(entry) => {
                target.set_from(&entry.config);
                debug!(chain_id = %chain_id, name = %entry.name, "applied chain defaults");
            }
            None => debug!(chain_id = %chain_id, "no chain specific defaults"),
        }
    }

    /// The effective defaults for `chain_id`, starting from an empty config.
    pub fn defaults_for(&self, chain_id: Option<&ChainId>) -> Chain {
        let mut chain = Chain::default();
        self.set_defaults(&mut chain, chain_id);
        chain
    }
}
