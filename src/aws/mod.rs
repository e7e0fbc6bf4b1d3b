//! AWS IP ranges data source.
//!
//! - [`fetch`] - HTTP retrieval of the published document
//! - [`file`] - the same document read from disk

mod fetch;
mod file;

// Re-export public functions
pub use fetch::{fetch_aws_ip_ranges, parse_ip_ranges};
pub use file::read_ip_ranges_file;
