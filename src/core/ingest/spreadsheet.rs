//! Binary spreadsheet parser (XLS, XLSX)

use super::headers::{build_row, unique_headers};
use super::{CsvParser, Row, TabularParser};
use crate::utils::error::{DispatchError, Result};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;
use tracing::debug;

/// Reads the first worksheet; its first used row holds the headers.
///
/// Browsers on machines with Excel installed declare plain CSV files as
/// `application/vnd.ms-excel`, so text that no workbook reader recognizes is
/// parsed as CSV instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetParser;

impl TabularParser for SpreadsheetParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        let mut workbook = match open_workbook_auto_from_rs(Cursor::new(bytes)) {
            Ok(workbook) => workbook,
            Err(calamine::Error::Msg(_)) if std::str::from_utf8(bytes).is_ok() => {
                debug!("Upload is not a workbook, reading it as delimited text");
                return CsvParser.parse(bytes);
            }
            Err(e) => return Err(e.into()),
        };
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DispatchError::parse("workbook contains no sheets"))??;
        Ok(rows_from_range(&range))
    }

    fn format_name(&self) -> &'static str {
        "spreadsheet"
    }
}

/// Convert a worksheet range into header-keyed rows
pub(super) fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let mut records = range.rows();
    let Some(header_cells) = records.next() else {
        return Vec::new();
    };

    let headers = unique_headers(header_cells.iter().map(cell_text));
    records
        .filter_map(|cells| build_row(&headers, cells.iter().map(cell_text)))
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Integral floats render without a fractional part so numeric phone cells survive
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
