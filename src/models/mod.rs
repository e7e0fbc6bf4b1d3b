//! Domain models for the IP range lookup.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 CIDR block with containment support
//! - [`IpRangesData`] - provider document as published
//! - [`PrefixRecord`] and [`RangeIndex`] - the matchable view over one document
//! - [`AddressResult`], [`BatchSummary`], [`LookupResponse`] - lookup output

mod dataset;
mod ipv4;
mod lookup;
mod prefix;

// Re-export public types
pub use dataset::{IpRangesData, RawIpv6Prefix, RawPrefix};
pub use ipv4::{get_cidr_mask, parse_prefix_len, Ipv4, MAX_LENGTH};
pub use lookup::{
    AddressInput, AddressResult, BatchSummary, LookupMetadata, LookupResponse, StatusResponse,
};
pub use prefix::{DatasetMetadata, PrefixRecord, RangeIndex};
