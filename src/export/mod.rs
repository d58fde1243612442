//! Export module for the expense tracker
//!
//! CSV export of the currently filtered month.

pub mod csv;

pub use csv::{export_filename, to_csv, write_csv, CsvExport, CSV_HEADER, CSV_MIME_TYPE};
