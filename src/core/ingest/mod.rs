//! Upload ingestion: tabular parsing and row validation
//!
//! Every accepted file format is decoded by a [`TabularParser`] into the same
//! row shape (header name to cell text), so validation and distribution never
//! see the source format.

mod content_type;
mod delimited;
mod headers;
mod spreadsheet;
mod validator;

pub use content_type::ContentType;
pub use delimited::CsvParser;
pub use spreadsheet::SpreadsheetParser;
pub use validator::{NOTES_COLUMN, REQUIRED_COLUMNS, validate_rows};

use crate::utils::error::Result;
use std::collections::HashMap;
use tracing::debug;

/// One parsed row: column header to cell text
pub type Row = HashMap<String, String>;

/// Decodes raw upload bytes into ordered rows
pub trait TabularParser: Send + Sync {
    /// Parse the whole document; rows come back in source order
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Row>>;

    /// Short format name used in logs
    fn format_name(&self) -> &'static str;
}

/// Parse an upload using the parser registered for its declared content type
pub fn parse_upload(content_type: &str, bytes: &[u8]) -> Result<Vec<Row>> {
    let parser = ContentType::from_mime(content_type)?.parser();
    let rows = parser.parse(bytes)?;
    debug!("Parsed {} rows with the {} parser", rows.len(), parser.format_name());
    Ok(rows)
}
