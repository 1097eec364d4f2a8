//! Header and row normalization shared by every parser

use super::Row;
use std::collections::HashSet;

/// Normalize a header row.
///
/// Blank header cells yield `None` and their column is dropped. Repeated names
/// get a numeric suffix (`Phone`, `Phone_1`, `Phone_2`) so no column silently
/// overwrites another.
pub(super) fn unique_headers<I>(raw: I) -> Vec<Option<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|header| {
            let header = header.trim_start_matches('\u{feff}').to_string();
            if header.is_empty() {
                return None;
            }
            let mut candidate = header.clone();
            let mut suffix = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}_{}", header, suffix);
                suffix += 1;
            }
            Some(candidate)
        })
        .collect()
}

/// Zip a record with the headers; `None` when every cell is empty.
///
/// Delimiter-only lines such as `,,` count as empty and are dropped, not kept
/// as rows of blank cells.
pub(super) fn build_row<I>(headers: &[Option<String>], cells: I) -> Option<Row>
where
    I: IntoIterator<Item = String>,
{
    let mut cells = cells.into_iter();
    let mut row = Row::with_capacity(headers.len());
    let mut has_content = false;

    for header in headers {
        let value = cells.next().unwrap_or_default();
        if let Some(header) = header {
            has_content |= !value.is_empty();
            row.insert(header.clone(), value);
        }
    }

    has_content.then_some(row)
}
