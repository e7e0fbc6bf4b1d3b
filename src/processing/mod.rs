//! Lookup pipeline stages.
//!
//! - [`normalize`] - raw input to candidate strings
//! - [`validate`] - IPv4 syntax check
//! - [`matcher`] - containment against a [`crate::models::RangeIndex`]
//! - [`aggregate`] - per-address results and batch summary

mod aggregate;
mod matcher;
mod normalize;
mod validate;

// Re-export public functions
pub use aggregate::{
    error_batch, format_error_result, format_ip_result, generate_summary, lookup_address,
    lookup_batch, INVALID_IP_ERROR,
};
pub use matcher::{find_ip_matches, IpMatches};
pub use normalize::parse_ip_input;
pub use validate::{is_valid_ip, parse_ip};
