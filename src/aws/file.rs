//! Loading a provider document from a local file.
//!
//! Used for offline lookups against a previously downloaded `ip-ranges.json`.

use super::fetch::parse_ip_ranges;
use crate::models::IpRangesData;
use std::error::Error;
use std::path::Path;

/// Read and parse a provider document from `path`.
pub fn read_ip_ranges_file(path: &str) -> Result<IpRangesData, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Ranges file does not exist: {path}").into());
    }
    log::info!("Reading IP ranges from file: {path}");

    let json =
        std::fs::read_to_string(path).map_err(|e| format!("Error reading file {path}: {e}"))?;
    parse_ip_ranges(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ip_ranges_file() {
        let data = read_ip_ranges_file("src/tests/test_data/ip_ranges_test_01.json")
            .expect("Error reading ranges file");
        assert_eq!(data.sync_token.as_deref(), Some("1718660000"));
        assert_eq!(data.prefixes.len(), 8);
        assert_eq!(data.ipv6_prefixes.len(), 2);
        assert_eq!(data.prefixes[0].ip_prefix.as_deref(), Some("52.95.110.0/24"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_ip_ranges_file("src/tests/test_data/does_not_exist.json").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
