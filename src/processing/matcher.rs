//! Containment matching of one address against a [`RangeIndex`].

use crate::models::RangeIndex;
use std::collections::BTreeSet;
use std::net::Ipv4Addr;

/// Everything in the index that contains one address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpMatches {
    pub services: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    /// Matching CIDR texts in index order, not de-duplicated.
    pub ranges: Vec<String>,
}

/// Find all services, regions, and ranges that contain the given IP.
///
/// Every record is visited so overlapping blocks all contribute. Records whose
/// CIDR failed to parse never match.
pub fn find_ip_matches(ip: Ipv4Addr, index: &RangeIndex) -> IpMatches {
    let mut matches = IpMatches::default();

    for record in &index.records {
        let Some(network) = record.network else {
            continue;
        };
        if network.contains(ip) {
            log::trace!("{ip} in {network} ({})", record.service);
            matches.services.insert(record.service.clone());
            matches.regions.insert(record.region.clone());
            matches.ranges.push(record.cidr.clone());
        }
    }

    log::trace!("{ip} matched {} range(s)", matches.ranges.len());
    matches
}
