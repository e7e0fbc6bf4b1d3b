//! CSV export of lookup results.

use crate::models::AddressResult;
use chrono::NaiveDate;
use itertools::Itertools;
use std::error::Error;

/// Column header of the export.
pub const CSV_HEADER: &str = "IP Address,Known,Services,Regions,Ranges,Status";

/// Status text for a valid address outside every range.
pub const NOT_FOUND_STATUS: &str = "Not found in AWS IP ranges";

/// Quote a field if it holds a comma, quote or line break.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains([',', '"', '\n', '\r']) {
        // excel does not like spaces after comma between fields
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Default export name, e.g. `aws-ip-lookup-2024-06-17.csv`.
pub fn default_csv_file_name(date: NaiveDate) -> String {
    format!("aws-ip-lookup-{}.csv", date.format("%Y-%m-%d"))
}

fn status(result: &AddressResult) -> &str {
    match (&result.error, result.is_known) {
        (Some(error), _) => error,
        (None, true) => "Found",
        (None, false) => NOT_FOUND_STATUS,
    }
}

/// One row per address, multi-valued columns joined with `;`.
pub fn results_to_csv(results: &[AddressResult]) -> String {
    let mut rows = vec![CSV_HEADER.to_string()];
    for result in results {
        rows.push(
            [
                result.address.clone(),
                result.is_known.to_string(),
                result.services.iter().join(";"),
                result.regions.iter().join(";"),
                result.matched_ranges.iter().join(";"),
                status(result).to_string(),
            ]
            .iter()
            .map(|field| escape_csv_field(field))
            .join(","),
        );
    }
    rows.join("\n") + "\n"
}

/// Write the CSV export to `path`.
pub fn write_csv(path: &str, results: &[AddressResult]) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, results_to_csv(results))
        .map_err(|e| format!("Error writing CSV file {path}: {e}"))?;
    log::info!("Wrote {} result row(s) to {path}", results.len());
    Ok(())
}
