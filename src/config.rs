//! Static configuration and defaults.

use std::time::Duration;

/// Official AWS endpoint publishing the current IP ranges.
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/// Provider name used in error texts.
pub const PROVIDER_NAME: &str = "AWS";

/// Name reported by the diagnostic status operation.
pub const SERVER_NAME: &str = "aws-ip-lookup-tool";

/// Seconds before a dataset fetch is treated as failed.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Tag used when a prefix record lacks a service or region.
pub const UNKNOWN_TAG: &str = "UNKNOWN";

/// Shortest plausible dotted-decimal IPv4 string, "1.1.1.1".
pub const MIN_IP_LEN: usize = 7;
/// Longest plausible dotted-decimal IPv4 string, "255.255.255.255".
pub const MAX_IP_LEN: usize = 15;

/// Per-call settings for a lookup batch.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Where the provider dataset is fetched from.
    pub source_url: String,
    /// Upper bound on the dataset fetch.
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            source_url: AWS_IP_RANGES_URL.to_string(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}
