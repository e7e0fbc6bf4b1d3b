//! Output formatting for lookup responses.
//!
//! - [`csv`] - CSV export
//! - [`terminal`] - coloured terminal report

mod csv;
mod terminal;

pub use csv::{default_csv_file_name, escape_csv_field, results_to_csv, write_csv, CSV_HEADER};
pub use terminal::{format_field, format_result_line, print_report};
