//! Default-definition documents compiled into the crate.

use super::document::DefaultsDocument;

macro_rules! bundled_documents {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../defaults/", $name)))),*]
    };
}

/// `(name, contents)` of every bundled document, in file-name order.
pub const BUNDLED: &[(&str, &str)] = bundled_documents![
    "Arbitrum_Goerli.toml",
    "Arbitrum_Mainnet.toml",
    "Arbitrum_Rinkeby.toml",
    "Avalanche_Fuji.toml",
    "Avalanche_Mainnet.toml",
    "BSC_Mainnet.toml",
    "BSC_Testnet.toml",
    "Ethereum_Goerli.toml",
    "Ethereum_Kovan.toml",
    "Ethereum_Mainnet.toml",
    "Ethereum_Rinkeby.toml",
    "Ethereum_Ropsten.toml",
    "Fantom_Mainnet.toml",
    "Fantom_Testnet.toml",
    "Harmony_Mainnet.toml",
    "Harmony_Testnet.toml",
    "Heco_Mainnet.toml",
    "Klaytn_Mainnet.toml",
    "Klaytn_Testnet.toml",
    "Metis_Mainnet.toml",
    "Metis_Rinkeby.toml",
    "Optimism_Goerli.toml",
    "Optimism_Kovan.toml",
    "Optimism_Mainnet.toml",
    "Polygon_Mainnet.toml",
    "Polygon_Mumbai.toml",
    "RSK_Mainnet.toml",
    "RSK_Testnet.toml",
    "Simulated.toml",
    "fallback.toml",
    "xDai_Mainnet.toml",
];

/// The bundled set as owned documents.
pub fn documents() -> impl Iterator<Item = DefaultsDocument> {
    BUNDLED
        .iter()
        .map(|(name, contents)| DefaultsDocument::new(*name, *contents))
}
