//! Terminal output of a lookup response.

use crate::models::{AddressResult, LookupResponse};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value = value.to_string();
    let quoted = format!("\"{value}\"");
    format!("{quoted:>width$}")
}

/// One report line for a single address.
pub fn format_result_line(result: &AddressResult) -> String {
    let status = match (&result.error, result.is_known) {
        (Some(error), _) => format!("ERROR {error}").red().to_string(),
        (None, true) => "AWS".green().bold().to_string(),
        (None, false) => "not AWS".yellow().to_string(),
    };
    format!(
        "{address} {status} services=[{services}] regions=[{regions}] ranges=[{ranges}]",
        address = format_field(&result.address, 17),
        services = result.services.iter().join(","),
        regions = result.regions.iter().join(","),
        ranges = result.matched_ranges.iter().join(","),
    )
}

/// Print results, summary and data source details to stdout.
pub fn print_report(response: &LookupResponse) {
    for result in &response.results {
        println!("{}", format_result_line(result));
    }

    let summary = &response.summary;
    println!(
        "#Summary checked={} known={} unknown={} errors={}",
        summary.total_checked, summary.known_count, summary.unknown_count, summary.error_count
    );
    if !summary.unique_services.is_empty() {
        println!("#Services: {}", summary.unique_services.iter().join(", "));
        println!("#Regions:  {}", summary.unique_regions.iter().join(", "));
    }

    let metadata = &response.metadata;
    println!(
        "#Source: {} syncToken={} createDate={} prefixes v4={} v6={}",
        metadata.source.on_blue(),
        metadata.sync_token.as_deref().unwrap_or("-"),
        metadata.create_date.as_deref().unwrap_or("-"),
        metadata
            .total_ipv4_prefixes
            .map_or("-".to_string(), |n| n.to_string()),
        metadata
            .total_ipv6_prefixes
            .map_or("-".to_string(), |n| n.to_string()),
    );
    if let Some(error) = &metadata.error {
        println!("#{}# {error}", "ERROR".on_red());
    }
}
