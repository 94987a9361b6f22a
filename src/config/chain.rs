//! Chain configuration data model
//!
//! Every field is optional: `None` inherits from a lower-precedence layer,
//! `Some` is explicit (including zero and `false`).

use alloy_primitives::Address;
use chain_types::{ChainType, Duration, GasEstimatorMode, Link, Wei};
use serde::{Deserialize, Serialize};

use super::schema::{overlay_schema, Overlay};

overlay_schema! {
    /// Tunable runtime parameters for one EVM network.
    pub struct Chain {
        /// Watch key balances and log changes
        "BalanceMonitorEnabled" => balance_monitor_enabled: bool,

        /// Blocks to backfill behind the head on startup
        "BlockBackfillDepth" => block_backfill_depth: u32,

        /// Skip backfilling blocks older than the backfill depth
        "BlockBackfillSkip" => block_backfill_skip: bool,

        /// Network family with non-standard behaviour (unset for plain EVM)
        "ChainType" => chain_type: ChainType,

        /// Send EIP-1559 (type 2) transactions
        "EIP1559DynamicFees" => eip1559_dynamic_fees: bool,

        /// Confirmations after which a block is considered final
        "FinalityDepth" => finality_depth: u32,

        /// Address of the flags contract
        "FlagsContractAddress" => flags_contract_address: Address,

        /// Percent added to the gas price on each bump
        "GasBumpPercent" => gas_bump_percent: u16,

        /// Blocks to wait before bumping an unconfirmed transaction (0 disables)
        "GasBumpThreshold" => gas_bump_threshold: u64,

        /// Number of in-flight transactions checked for bumping
        "GasBumpTxDepth" => gas_bump_tx_depth: u16,

        /// Minimum amount added to the gas price on each bump, in wei
        "GasBumpWei" => gas_bump_wei: Wei,

        /// Gas price estimation strategy
        "GasEstimatorMode" => gas_estimator_mode: GasEstimatorMode,

        /// Fee cap used when the estimator has no data, in wei
        "GasFeeCapDefault" => gas_fee_cap_default: Wei,

        /// Gas limit for transactions without an explicit limit
        "GasLimitDefault" => gas_limit_default: u64,

        /// Multiplier applied to every estimated gas limit
        "GasLimitMultiplier" => gas_limit_multiplier: f64,

        /// Gas limit for plain value transfers
        "GasLimitTransfer" => gas_limit_transfer: u64,

        /// Gas price used when the estimator has no data, in wei
        "GasPriceDefault" => gas_price_default: Wei,

        /// EIP-1559 tip cap used when the estimator has no data, in wei
        "GasTipCapDefault" => gas_tip_cap_default: Wei,

        /// Lowest EIP-1559 tip cap ever sent, in wei
        "GasTipCapMinimum" => gas_tip_cap_minimum: Wei,

        /// Address of the LINK token contract
        "LinkContractAddress" => link_contract_address: Address,

        /// Blocks per log backfill request
        "LogBackfillBatchSize" => log_backfill_batch_size: u32,

        /// Interval between log polls (0s subscribes instead)
        "LogPollInterval" => log_poll_interval: Duration,

        /// Ceiling on any gas price sent, in wei
        "MaxGasPriceWei" => max_gas_price_wei: Wei,

        /// Unconfirmed transactions allowed per key (0 is unlimited)
        "MaxInFlightTransactions" => max_in_flight_transactions: u32,

        /// Queued transactions allowed before new ones are dropped (0 is unlimited)
        "MaxQueuedTransactions" => max_queued_transactions: u32,

        /// Floor on any gas price sent, in wei
        "MinGasPriceWei" => min_gas_price_wei: Wei,

        /// Confirmations required on incoming log events
        "MinIncomingConfirmations" => min_incoming_confirmations: u32,

        /// Minimum payment accepted for a job
        "MinimumContractPayment" => minimum_contract_payment: Link,

        /// Resync local nonces with the node on startup
        "NonceAutoSync" => nonce_auto_sync: bool,

        /// Confirmations before an OCR contract config is accepted
        "OCRContractConfirmations" => ocr_contract_confirmations: u16,

        /// Timeout for an OCR transmit call
        "OCRContractTransmitterTransmitTimeout" => ocr_contract_transmitter_transmit_timeout: Duration,

        /// Timeout for OCR database operations
        "OCRDatabaseTimeout" => ocr_database_timeout: Duration,

        /// Timeout for an OCR observation
        "OCRObservationTimeout" => ocr_observation_timeout: Duration,

        /// Extra time granted to late OCR observations
        "OCRObservationGracePeriod" => ocr_observation_grace_period: Duration,

        /// Confirmations before an OCR2 contract config is accepted
        "OCR2ContractConfirmations" => ocr2_contract_confirmations: u16,

        /// Address of the operator factory contract
        "OperatorFactoryAddress" => operator_factory_address: Address,

        /// Requests per JSON-RPC batch
        "RPCDefaultBatchSize" => rpc_default_batch_size: u32,

        /// Interval between transaction reaper runs (0s disables)
        "TxReaperInterval" => tx_reaper_interval: Duration,

        /// Age after which confirmed transactions are reaped
        "TxReaperThreshold" => tx_reaper_threshold: Duration,

        /// Time before an unconfirmed transaction is rebroadcast (0s disables)
        "TxResendAfterThreshold" => tx_resend_after_threshold: Duration,

        /// Route transactions through forwarder contracts
        "UseForwarders" => use_forwarders: bool,
    }
    nested {
        "BlockHistoryEstimator" => block_history_estimator: BlockHistoryEstimator,
        "HeadTracker" => head_tracker: HeadTracker,
        "NodePool" => node_pool: NodePool,
    }
    excluded {
        /// Per-key overrides, propagated outside the defaults layering.
        "KeySpecific" => key_specific: Vec<KeySpecific>,
    }
}

overlay_schema! {
    /// Settings for the block history gas estimator.
    pub struct BlockHistoryEstimator {
        /// Blocks fetched per batch request (0 fetches in one request)
        "BatchSize" => batch_size: u32,

        /// Blocks to lag behind the head before sampling
        "BlockDelay" => block_delay: u16,

        /// Recent blocks sampled for gas prices
        "BlockHistorySize" => block_history_size: u16,

        /// Blocks of fee headroom added to the EIP-1559 fee cap
        "EIP1559FeeCapBufferBlocks" => eip1559_fee_cap_buffer_blocks: u16,

        /// Percentile (0-100) of sampled gas prices used as the estimate
        "TransactionPercentile" => transaction_percentile: u16,
    }
}

overlay_schema! {
    /// Settings for head tracking.
    pub struct HeadTracker {
        /// Warn when no new head arrives for this long (0s disables)
        "BlockEmissionIdleWarningThreshold" => block_emission_idle_warning_threshold: Duration,

        /// Heads kept in the database
        "HistoryDepth" => history_depth: u32,

        /// Heads buffered before the oldest are dropped
        "MaxBufferSize" => max_buffer_size: u32,

        /// Minimum interval between processed heads (0s processes every head)
        "SamplingInterval" => sampling_interval: Duration,
    }
}

overlay_schema! {
    /// Settings for RPC node liveness checks.
    pub struct NodePool {
        /// Mark a node out of sync after this long without a head (0s disables)
        "NoNewHeadsThreshold" => no_new_heads_threshold: Duration,

        /// Failed polls before a node is marked unreachable
        "PollFailureThreshold" => poll_failure_threshold: u32,

        /// Interval between liveness polls (0s disables)
        "PollInterval" => poll_interval: Duration,
    }
}

/// Override for a single sending key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeySpecific {
    /// Sending key the override applies to
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Address>,

    /// Ceiling on gas price for this key, in wei
    #[serde(rename = "MaxGasPriceWei", default, skip_serializing_if = "Option::is_none")]
    pub max_gas_price_wei: Option<Wei>,
}

impl Chain {
    /// Dotted document paths of every explicit leaf field.
    pub fn explicit_fields(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.explicit_paths("", &mut out);
        out
    }

    /// Dotted document paths of every field that takes part in the merge.
    pub fn mergeable_fields() -> Vec<String> {
        let mut out = Vec::new();
        Self::field_paths("", &mut out);
        out
    }

    /// Render the explicit fields as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
