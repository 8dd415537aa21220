use serde::Serialize;

use crate::services::chains::Architecture;

/// Schema version used when a caller does not name one
pub const DEFAULT_SCHEMA_VERSION: u8 = 1;

/// Fields a UI shows for a v2 oracle read by default
pub const DEFAULT_DISPLAY_CODES: [u32; 3] = [107, 112, 321];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    Address,
}

/// A named, typed metric identified by a small integer code.
///
/// Codes are grouped by range (100s block metadata, 200s/300s predictions)
/// but nothing relies on the grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricField {
    pub code: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub description: &'static str,
}

const fn number(code: u32, name: &'static str, description: &'static str) -> MetricField {
    MetricField {
        code,
        name,
        value_type: ValueType::Number,
        description,
    }
}

const fn address(code: u32, name: &'static str, description: &'static str) -> MetricField {
    MetricField {
        code,
        name,
        value_type: ValueType::Address,
        description,
    }
}

#[rustfmt::skip]
pub const EVM_V1_FIELDS: &[MetricField] = &[
    number(100, "slot", "Block's slot"),
    number(101, "epoch", "Block's epoch"),
    number(102, "tx_count", "Transaction Count"),
    address(103, "miner", "Miner"),
    address(104, "fee_recipient", "Fee Recipient"),
    number(105, "gas_used", "Gas Used"),
    number(106, "gas_limit", "Gas Limit"),
    number(107, "base_fee_per_gas", "Base Fee Per Gas"),
    number(108, "block_blob_size", "Block Blob Size"),
    number(109, "block_blob_gas_price", "Block Blob Gas Price"),
    number(110, "block_blob_gas_used", "Block Blob Gas Used"),
    number(111, "block_blob_gas_limit", "Block Blob Gas Limit"),
    number(112, "blob_base_fee_per_gas", "Blob Base Fee Per Gas"),

    number(200, "pred_base_fee_per_gas_p99", "Gas Price Prediction - p99"),
    number(201, "pred_base_fee_per_gas_p95", "Gas Price Prediction - p95"),
    number(202, "pred_base_fee_per_gas_p90", "Gas Price Prediction - p90"),
    number(203, "pred_base_fee_per_gas_p80", "Gas Price Prediction - p80"),
    number(204, "pred_base_fee_per_gas_p70", "Gas Price Prediction - p70"),
    number(205, "pred_base_fee_per_gas_p50", "Gas Price Prediction - p50"),

    number(300, "pred_tx_count_p99", "Transaction Count Prediction - p99"),
    number(301, "pred_tx_count_p95", "Transaction Count Prediction - p95"),
    number(302, "pred_tx_count_p90", "Transaction Count Prediction - p90"),
    number(303, "pred_tx_count_p80", "Transaction Count Prediction - p80"),
    number(304, "pred_tx_count_p70", "Transaction Count Prediction - p70"),
    number(305, "pred_tx_count_p50", "Transaction Count Prediction - p50"),

    number(310, "pred_base_fee_per_gas_p99", "Base Fee Per Gas Prediction - p99"),
    number(311, "pred_base_fee_per_gas_p95", "Base Fee Per Gas Prediction - p95"),
    number(312, "pred_base_fee_per_gas_p90", "Base Fee Per Gas Prediction - p90"),
    number(313, "pred_base_fee_per_gas_p80", "Base Fee Per Gas Prediction - p80"),
    number(314, "pred_base_fee_per_gas_p70", "Base Fee Per Gas Prediction - p70"),
    number(315, "pred_base_fee_per_gas_p50", "Base Fee Per Gas Prediction - p50"),

    number(320, "pred_max_priority_fee_per_gas_p99", "Max Priority Fee Per Gas Prediction - p99"),
    number(321, "pred_max_priority_fee_per_gas_p95", "Max Priority Fee Per Gas Prediction - p95"),
    number(322, "pred_max_priority_fee_per_gas_p90", "Max Priority Fee Per Gas Prediction - p90"),
    number(323, "pred_max_priority_fee_per_gas_p80", "Max Priority Fee Per Gas Prediction - p80"),
    number(324, "pred_max_priority_fee_per_gas_p70", "Max Priority Fee Per Gas Prediction - p70"),
    number(325, "pred_max_priority_fee_per_gas_p50", "Max Priority Fee Per Gas Prediction - p50"),

    number(330, "pred_max_fee_per_gas_p99", "Max Fee Per Gas Prediction - p99"),
    number(331, "pred_max_fee_per_gas_p95", "Max Fee Per Gas Prediction - p95"),
    number(332, "pred_max_fee_per_gas_p90", "Max Fee Per Gas Prediction - p90"),
    number(333, "pred_max_fee_per_gas_p80", "Max Fee Per Gas Prediction - p80"),
    number(334, "pred_max_fee_per_gas_p70", "Max Fee Per Gas Prediction - p70"),
    number(335, "pred_max_fee_per_gas_p50", "Max Fee Per Gas Prediction - p50"),
];

// Published but still empty
pub const UTXO_V1_FIELDS: &[MetricField] = &[];

/// Field table for an architecture and schema version, if one is published
pub fn schema_table(arch: Architecture, schema_version: u8) -> Option<&'static [MetricField]> {
    match (arch, schema_version) {
        (Architecture::Evm, 1) => Some(EVM_V1_FIELDS),
        (Architecture::Utxo, 1) => Some(UTXO_V1_FIELDS),
        _ => None,
    }
}

pub fn describe_field_in(
    arch: Architecture,
    schema_version: u8,
    code: u32,
) -> Option<&'static MetricField> {
    schema_table(arch, schema_version)?
        .iter()
        .find(|field| field.code == code)
}

/// Look up `code` in the default (EVM, v1) table. `None` means unknown.
pub fn describe_field(code: u32) -> Option<&'static MetricField> {
    describe_field_in(Architecture::Evm, DEFAULT_SCHEMA_VERSION, code)
}
