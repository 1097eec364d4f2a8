//! Comma-delimited text parser

use super::headers::{build_row, unique_headers};
use super::{Row, TabularParser};
use crate::utils::error::Result;

/// Header-row CSV parser; blank lines are skipped, ragged rows are rejected
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl TabularParser for CsvParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(bytes);

        let headers = unique_headers(reader.headers()?.iter().map(str::to_string));

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(row) = build_row(&headers, record.iter().map(str::to_string)) {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }
}
