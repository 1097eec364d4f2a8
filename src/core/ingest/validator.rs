//! Row validation and normalization

use super::Row;
use crate::core::models::LeadRow;
use crate::utils::error::{Result, ValidationError};

/// Columns that must be present, matched case-sensitively
pub const REQUIRED_COLUMNS: [&str; 2] = ["FirstName", "Phone"];

/// Optional free-text column
pub const NOTES_COLUMN: &str = "Notes";

/// Check the mandatory columns and turn rows into lead rows.
///
/// Columns are checked once against the first row's keys. Individual cells
/// may still be empty or absent; those become empty strings.
pub fn validate_rows(rows: Vec<Row>) -> Result<Vec<LeadRow>> {
    let Some(first) = rows.first() else {
        return Err(ValidationError::EmptyFile.into());
    };

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !first.contains_key(**column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing).into());
    }

    Ok(rows
        .into_iter()
        .map(|mut row| LeadRow {
            first_name: row.remove(REQUIRED_COLUMNS[0]).unwrap_or_default(),
            phone: row.remove(REQUIRED_COLUMNS[1]).unwrap_or_default(),
            notes: row.remove(NOTES_COLUMN).unwrap_or_default(),
        })
        .collect())
}
