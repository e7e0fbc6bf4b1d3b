//! In-memory view over one fetched provider dataset.

use super::dataset::IpRangesData;
use super::Ipv4;
use crate::config::UNKNOWN_TAG;

/// One IPv4 CIDR block with its service and region tags.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixRecord {
    /// CIDR text exactly as published.
    pub cidr: String,
    pub service: String,
    pub region: String,
    /// Parsed block, `None` if the published text is malformed.
    pub network: Option<Ipv4>,
}

impl PrefixRecord {
    pub fn new(cidr: &str, service: Option<&str>, region: Option<&str>) -> Self {
        PrefixRecord {
            cidr: cidr.to_string(),
            service: service.unwrap_or(UNKNOWN_TAG).to_string(),
            region: region.unwrap_or(UNKNOWN_TAG).to_string(),
            network: Ipv4::new(cidr).ok(),
        }
    }
}

/// Dataset-level fields carried through to the response. Never used for matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetMetadata {
    pub sync_token: Option<String>,
    pub create_date: Option<String>,
    pub total_ipv4_prefixes: usize,
    pub total_ipv6_prefixes: usize,
}

/// Read-only set of [`PrefixRecord`]s for one lookup batch.
#[derive(Debug, Clone, Default)]
pub struct RangeIndex {
    pub records: Vec<PrefixRecord>,
    pub metadata: DatasetMetadata,
}

impl RangeIndex {
    /// Build the index from the IPv4 list of a provider document.
    ///
    /// Entries without `ip_prefix` are left out of the index but still counted
    /// in `total_ipv4_prefixes`.
    pub fn from_dataset(data: &IpRangesData) -> Self {
        let records: Vec<PrefixRecord> = data
            .prefixes
            .iter()
            .filter_map(|p| {
                let cidr = p.ip_prefix.as_deref()?;
                Some(PrefixRecord::new(
                    cidr,
                    p.service.as_deref(),
                    p.region.as_deref(),
                ))
            })
            .collect();

        let malformed = records.iter().filter(|r| r.network.is_none()).count();
        if malformed > 0 {
            log::debug!("{malformed} prefix record(s) carry a malformed CIDR and never match");
        }
        log::debug!(
            "RangeIndex built: {} usable of {} IPv4 prefixes, {} IPv6 prefixes ignored",
            records.len(),
            data.prefixes.len(),
            data.ipv6_prefixes.len()
        );

        RangeIndex {
            records,
            metadata: DatasetMetadata {
                sync_token: data.sync_token.clone(),
                create_date: data.create_date.clone(),
                total_ipv4_prefixes: data.prefixes.len(),
                total_ipv6_prefixes: data.ipv6_prefixes.len(),
            },
        }
    }
}
