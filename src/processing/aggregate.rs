//! Per-address results and the batch summary.

use super::matcher::{find_ip_matches, IpMatches};
use super::validate::parse_ip;
use crate::models::{AddressResult, BatchSummary, RangeIndex};
use std::collections::BTreeSet;

/// Error text for a candidate that is not a dotted-decimal IPv4 address.
pub const INVALID_IP_ERROR: &str = "Invalid IP address format";

/// Build the result for an address that went through matching.
pub fn format_ip_result(address: &str, matches: IpMatches) -> AddressResult {
    AddressResult {
        address: address.to_string(),
        is_known: !matches.services.is_empty(),
        services: matches.services,
        regions: matches.regions,
        matched_ranges: matches.ranges,
        error: None,
    }
}

/// Build the result for an address that could not be looked up.
pub fn format_error_result(address: &str, error: &str) -> AddressResult {
    AddressResult {
        address: address.to_string(),
        is_known: false,
        services: BTreeSet::new(),
        regions: BTreeSet::new(),
        matched_ranges: vec![],
        error: Some(error.to_string()),
    }
}

/// Validate one candidate and match it against the index.
pub fn lookup_address(candidate: &str, index: &RangeIndex) -> AddressResult {
    match parse_ip(candidate) {
        Some(ip) => format_ip_result(candidate, find_ip_matches(ip, index)),
        None => {
            log::debug!("'{candidate}' is not a valid IPv4 address");
            format_error_result(candidate, INVALID_IP_ERROR)
        }
    }
}

/// One result per candidate, same order and multiplicity.
pub fn lookup_batch(candidates: &[String], index: &RangeIndex) -> Vec<AddressResult> {
    candidates
        .iter()
        .map(|candidate| lookup_address(candidate, index))
        .collect()
}

/// Tag every candidate with the same batch-level error.
pub fn error_batch(candidates: &[String], error: &str) -> Vec<AddressResult> {
    candidates
        .iter()
        .map(|candidate| format_error_result(candidate, error))
        .collect()
}

/// Generate summary statistics for the lookup results.
///
/// `unknown_count` is derived by subtraction, never counted directly.
pub fn generate_summary(results: &[AddressResult]) -> BatchSummary {
    let total_checked = results.len();
    let known_count = results.iter().filter(|r| r.is_known).count();
    let error_count = results.iter().filter(|r| r.error.is_some()).count();

    let mut unique_services = BTreeSet::new();
    let mut unique_regions = BTreeSet::new();
    for result in results.iter().filter(|r| r.is_known) {
        unique_services.extend(result.services.iter().cloned());
        unique_regions.extend(result.regions.iter().cloned());
    }

    BatchSummary {
        total_checked,
        known_count,
        unknown_count: total_checked as i64 - known_count as i64 - error_count as i64,
        error_count,
        unique_services,
        unique_regions,
    }
}
