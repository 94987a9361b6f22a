//! Bundled Defaults Tests
//!
//! Exercises the registry built from the documents compiled into the crate.

use std::collections::BTreeSet;

use chain_defaults::config::Chain;
use chain_defaults::{ChainId, ChainType, Duration, GasEstimatorMode, Link, Registry, Wei};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Test Helpers
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn registry() -> Registry {
    init_tracing();
    Registry::bundled().expect("bundled defaults are valid")
}

fn id(n: u64) -> ChainId {
    ChainId::from(n)
}

/// Look up a dotted path in a rendered configuration.
fn lookup<'a>(value: &'a toml::Value, path: &str) -> Option<&'a toml::Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

fn render(chain: &Chain) -> toml::Value {
    toml::Value::try_from(chain).expect("chain renders")
}

// =============================================================================
// Registry contents
// =============================================================================

#[test]
fn test_bundled_loads() {
    let registry = registry();
    assert_eq!(registry.len(), 30);
    assert!(!registry.is_empty());
    assert_eq!(registry.fallback().gas_bump_percent, Some(20));
    assert_eq!(registry.fallback().min_incoming_confirmations, Some(3));
}

#[test]
fn test_default_ids_strictly_ascending() {
    let registry = registry();
    let ids = registry.default_ids();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids.first(), Some(&id(1)));
    assert_eq!(ids.last(), Some(&id(1_666_700_000)));

    let entry_ids: Vec<&ChainId> = registry.entries().map(|e| &e.chain_id).collect();
    assert_eq!(entry_ids, ids.iter().collect::<Vec<_>>());
}

#[test]
fn test_default_names() {
    let registry = registry();
    assert_eq!(registry.default_name(Some(&id(1))), "Ethereum Mainnet");
    assert_eq!(registry.default_name(Some(&id(42161))), "Arbitrum Mainnet");
    assert_eq!(registry.default_name(Some(&id(100))), "xDai Mainnet");
    assert_eq!(registry.default_name(Some(&id(1337))), "Simulated");
    assert_eq!(registry.default_name(None), "");
    assert_eq!(registry.default_name(Some(&id(2))), "");
}

#[test]
fn test_names_are_unique() {
    let registry = registry();
    let names: BTreeSet<&str> = registry.entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names.len(), registry.len());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn test_every_chain_layers_over_fallback() {
    let registry = registry();
    let fallback = render(registry.fallback());

    for chain_id in registry.default_ids() {
        let entry = registry.get(chain_id).expect("listed id has an entry");
        let merged = registry.defaults_for(Some(chain_id));

        let expected: BTreeSet<String> = registry
            .fallback()
            .explicit_fields()
            .into_iter()
            .chain(entry.config.explicit_fields())
            .collect();
        let actual: BTreeSet<String> = merged.explicit_fields().into_iter().collect();
        assert_eq!(actual, expected, "explicit fields of {}", entry.name);

        let specific = render(&entry.config);
        let rendered = render(&merged);
        for path in &expected {
            let want = lookup(&specific, path).or_else(|| lookup(&fallback, path));
            assert_eq!(lookup(&rendered, path), want, "{} of {}", path, entry.name);
        }
    }
}

#[test]
fn test_no_chain_id_yields_fallback() {
    let registry = registry();
    assert_eq!(registry.defaults_for(None), *registry.fallback());
}

#[test]
fn test_ethereum_mainnet() {
    let registry = registry();
    let chain = registry.defaults_for(Some(&id(1)));

    assert_eq!(chain.eip1559_dynamic_fees, Some(true));
    assert_eq!(chain.gas_price_default, Some(Wei::from_gwei(20)));
    assert_eq!(chain.minimum_contract_payment, Some("0.1 link".parse::<Link>().unwrap()));
    assert_eq!(
        chain.link_contract_address.map(|a| a.to_string().to_lowercase()),
        Some("0x514910771af9ca656af840dff83e8264ecf986ca".to_string())
    );
    let estimator = chain.block_history_estimator.expect("estimator defaults");
    assert_eq!(estimator.transaction_percentile, Some(50));
    assert_eq!(estimator.block_history_size, Some(8));
}

#[test]
fn test_optimism_overrides_nested_and_zero_values() {
    let registry = registry();
    let chain = registry.defaults_for(Some(&id(10)));

    assert_eq!(chain.chain_type, Some(ChainType::Optimism));
    assert_eq!(chain.gas_estimator_mode, Some(GasEstimatorMode::L2Suggested));
    assert_eq!(chain.balance_monitor_enabled, Some(false));
    assert_eq!(chain.block_backfill_depth, Some(0));

    let head_tracker = chain.head_tracker.expect("head tracker defaults");
    assert_eq!(head_tracker.history_depth, Some(10));
    assert_eq!(head_tracker.sampling_interval, Some(Duration::default()));
    assert_eq!(head_tracker.max_buffer_size, Some(3));

    let node_pool = chain.node_pool.expect("node pool defaults");
    assert_eq!(node_pool.no_new_heads_threshold, Some(Duration::default()));
    assert_eq!(node_pool.poll_interval, Some(Duration::from_secs(10)));
}

#[test]
fn test_unknown_chain_gets_fallback_only() {
    let registry = registry();
    let unknown: ChainId = "99999999999999999999999".parse().unwrap();
    assert!(!registry.contains(&unknown));
    assert_eq!(registry.defaults_for(Some(&unknown)), *registry.fallback());
}

#[test]
fn test_effective_config_dumps_as_toml() {
    let registry = registry();
    let chain = registry.defaults_for(Some(&id(137)));
    let dumped = chain.to_toml_string().unwrap();

    assert!(dumped.contains("GasPriceDefault = \"30 gwei\""));
    assert!(dumped.contains("[HeadTracker]"));
    assert!(!dumped.contains("ChainType"));

    let reparsed: Chain = toml::from_str(&dumped).unwrap();
    assert_eq!(reparsed, chain);
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();

    let registry = registry();
    let results: Vec<Chain> = std::thread::scope(|s| {
        let handles: Vec<_> = registry
            .default_ids()
            .iter()
            .map(|chain_id| {
                let registry = &registry;
                s.spawn(move || registry.defaults_for(Some(chain_id)))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker thread"))
            .collect()
    });

    for (chain_id, chain) in registry.default_ids().iter().zip(&results) {
        assert_eq!(*chain, registry.defaults_for(Some(chain_id)));
    }
}
