//! Accepted upload content types

use super::{CsvParser, SpreadsheetParser, TabularParser};
use crate::utils::error::{DispatchError, Result};
use std::fmt;

/// Upload formats accepted by the ingestion pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Comma-delimited text
    Csv,
    /// Legacy binary spreadsheet
    Xls,
    /// Office Open XML spreadsheet
    Xlsx,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Csv, ContentType::Xls, ContentType::Xlsx];

    /// Resolve a declared MIME type; parameters such as `charset` are ignored
    pub fn from_mime(mime: &str) -> Result<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.mime().eq_ignore_ascii_case(essence))
            .ok_or_else(|| DispatchError::unsupported_type(mime))
    }

    /// Canonical MIME type
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Csv => "text/csv",
            ContentType::Xls => "application/vnd.ms-excel",
            ContentType::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Parser able to decode this format
    pub fn parser(&self) -> Box<dyn TabularParser> {
        match self {
            ContentType::Csv => Box::new(CsvParser),
            ContentType::Xls | ContentType::Xlsx => Box::new(SpreadsheetParser),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}
