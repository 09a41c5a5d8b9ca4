//! Turns the first line of an uploaded file into a provisional descriptor list.
//!
//! The header is split on plain commas. Quoted fields and escaped delimiters
//! are not understood: `"last, first",age` yields three tokens. The service
//! reads the same file, so a header it parses differently will surface there
//! as a "column not found" error.

use common::model::column::ColumnDescriptor;
use std::collections::HashSet;

const DELIMITER: char = ',';

/// Extracts descriptors from raw file bytes. Bytes that are not UTF-8 yield an
/// empty list, which the UI shows as "no columns detected".
pub fn extract_columns_from_bytes(bytes: &[u8]) -> Vec<ColumnDescriptor> {
    match std::str::from_utf8(bytes) {
        Ok(content) => extract_columns(content),
        Err(_) => Vec::new(),
    }
}

/// One unclassified descriptor per non-blank header token, in file order.
/// Repeated names keep their first occurrence.
pub fn extract_columns(content: &str) -> Vec<ColumnDescriptor> {
    let content = content.trim_start_matches('\u{feff}');
    let Some(header) = content.split('\n').next() else {
        return Vec::new();
    };
    let header = header.strip_suffix('\r').unwrap_or(header);

    let mut seen = HashSet::new();
    header
        .split(DELIMITER)
        .filter(|token| !token.trim().is_empty())
        .filter(|token| seen.insert(*token))
        .map(ColumnDescriptor::unclassified)
        .collect()
}
