// cargo watch -x 'fmt' -x 'test'

pub mod aws;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use config::{LookupConfig, PROVIDER_NAME, SERVER_NAME};
use futures::FutureExt;
use models::{
    AddressInput, IpRangesData, LookupMetadata, LookupResponse, RangeIndex, StatusResponse,
};
use processing::{error_batch, generate_summary, lookup_batch, parse_ip_input};
use std::any::Any;
use std::error::Error;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Reported when normalization leaves nothing to look up.
pub const NO_VALID_IPS_ERROR: &str = "No valid IP addresses provided";

/// Check addresses against the live AWS IP ranges with default settings.
pub async fn check_ip_ranges(input: Option<&AddressInput>) -> LookupResponse {
    let config = LookupConfig::default();
    check_ip_ranges_with(input, &config, || aws::fetch_aws_ip_ranges(&config)).await
}

/// Check addresses against the dataset produced by `source`.
///
/// `source` is awaited at most once, and only if there is something to look
/// up, bounded by `config.timeout`. `config.source_url` is reported as the
/// data source. This never fails: every fault ends up in `metadata.error`.
pub async fn check_ip_ranges_with<F, Fut>(
    input: Option<&AddressInput>,
    config: &LookupConfig,
    source: F,
) -> LookupResponse
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<IpRangesData, Box<dyn Error>>>,
{
    match AssertUnwindSafe(run_lookup(input, config, source))
        .catch_unwind()
        .await
    {
        Ok(response) => response,
        Err(panic) => {
            let detail = panic_message(panic.as_ref());
            log::error!("Lookup aborted: {detail}");
            LookupResponse::failed(&config.source_url, format!("Unexpected error: {detail}"))
        }
    }
}

async fn run_lookup<F, Fut>(
    input: Option<&AddressInput>,
    config: &LookupConfig,
    source: F,
) -> LookupResponse
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<IpRangesData, Box<dyn Error>>>,
{
    let candidates = parse_ip_input(input);
    if candidates.is_empty() {
        log::warn!("{NO_VALID_IPS_ERROR}");
        return LookupResponse::failed(&config.source_url, NO_VALID_IPS_ERROR.to_string());
    }
    log::info!("#Start lookup of {} address(es)", candidates.len());

    let fetched = match tokio::time::timeout(config.timeout, source()).await {
        Ok(fetched) => fetched,
        Err(_) => Err(format!("timed out after {}s", config.timeout.as_secs_f32()).into()),
    };

    let data = match fetched {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to fetch {PROVIDER_NAME} IP ranges: {e}");
            let results = error_batch(
                &candidates,
                &format!("Failed to fetch {PROVIDER_NAME} IP ranges: {e}"),
            );
            return LookupResponse {
                summary: generate_summary(&results),
                results,
                metadata: LookupMetadata::with_error(
                    &config.source_url,
                    format!("Failed to fetch {PROVIDER_NAME} data: {e}"),
                ),
            };
        }
    };

    let index = RangeIndex::from_dataset(&data);
    let results = lookup_batch(&candidates, &index);
    let summary = generate_summary(&results);
    log::info!(
        "# Checked {} address(es): known={} unknown={} errors={}",
        summary.total_checked,
        summary.known_count,
        summary.unknown_count,
        summary.error_count
    );

    let metadata = index.metadata;
    LookupResponse {
        results,
        summary,
        metadata: LookupMetadata {
            source: config.source_url.clone(),
            sync_token: Some(metadata.sync_token.unwrap_or_else(|| "unknown".to_string())),
            create_date: Some(metadata.create_date.unwrap_or_else(|| "unknown".to_string())),
            total_ipv4_prefixes: Some(metadata.total_ipv4_prefixes),
            total_ipv6_prefixes: Some(metadata.total_ipv6_prefixes),
            error: None,
        },
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Fixed status payload confirming the tool is reachable. No I/O.
pub fn test_connection() -> StatusResponse {
    StatusResponse {
        status: "ok".to_string(),
        message: format!("{PROVIDER_NAME} IP Lookup is running correctly"),
        server_name: SERVER_NAME.to_string(),
        available_operations: vec!["check_ip_ranges".to_string(), "test_connection".to_string()],
    }
}
