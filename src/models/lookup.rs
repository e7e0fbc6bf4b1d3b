//! Request and response shapes of a lookup batch.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Raw address input: one possibly delimited string, or an explicit list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AddressInput {
    Text(String),
    List(Vec<String>),
}

impl AddressInput {
    /// Interpret an arbitrary JSON value as address input.
    ///
    /// Non-string members of an array are dropped. Any shape other than a
    /// string or an array gives `None`.
    pub fn from_json(value: &Value) -> Option<AddressInput> {
        match value {
            Value::String(s) => Some(AddressInput::Text(s.clone())),
            Value::Array(items) => Some(AddressInput::List(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl From<&str> for AddressInput {
    fn from(s: &str) -> Self {
        AddressInput::Text(s.to_string())
    }
}

impl From<Vec<String>> for AddressInput {
    fn from(v: Vec<String>) -> Self {
        AddressInput::List(v)
    }
}

/// Lookup outcome for one candidate address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    pub address: String,
    pub is_known: bool,
    pub services: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    pub matched_ranges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts and tag unions across one batch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_checked: usize,
    pub known_count: usize,
    /// Always `total_checked - known_count - error_count`.
    pub unknown_count: i64,
    pub error_count: usize,
    pub unique_services: BTreeSet<String>,
    pub unique_regions: BTreeSet<String>,
}

impl BatchSummary {
    /// Summary reported when a batch never reaches the matching stage.
    pub fn input_error() -> Self {
        BatchSummary {
            error_count: 1,
            ..Default::default()
        }
    }
}

/// Where the data came from, plus any batch-level error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupMetadata {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(
        rename = "totalIPv4Prefixes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_ipv4_prefixes: Option<usize>,
    #[serde(
        rename = "totalIPv6Prefixes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_ipv6_prefixes: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupMetadata {
    pub fn with_error(source: &str, error: String) -> Self {
        LookupMetadata {
            source: source.to_string(),
            error: Some(error),
            ..Default::default()
        }
    }
}

/// Full answer of one `check_ip_ranges` call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LookupResponse {
    pub results: Vec<AddressResult>,
    pub summary: BatchSummary,
    pub metadata: LookupMetadata,
}

impl LookupResponse {
    /// Zero-result response carrying only a batch-level error.
    pub fn failed(source: &str, error: String) -> Self {
        LookupResponse {
            results: vec![],
            summary: BatchSummary::input_error(),
            metadata: LookupMetadata::with_error(source, error),
        }
    }
}

/// Fixed payload of the diagnostic operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub server_name: String,
    pub available_operations: Vec<String>,
}
