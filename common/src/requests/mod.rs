//! Request side of the anonymization service contract.
//!
//! - `POST /api/anonymize/text/` with a JSON body `{"text": ...}`.
//! - `POST /api/anonymize/csv` with a multipart body holding the raw file under
//!   `file` and the JSON-encoded descriptor list under `column_metadata`.

use crate::model::column::ColumnDescriptor;
use serde::{Deserialize, Serialize};

pub const TEXT_ENDPOINT: &str = "/api/anonymize/text/";
pub const CSV_ENDPOINT: &str = "/api/anonymize/csv";

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the serialized descriptor list.
pub const COLUMN_METADATA_FIELD: &str = "column_metadata";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// JSON body of the text endpoint.
pub struct TextAnonymizationRequest {
    pub text: String,
}

/// Encodes the descriptor list for the `column_metadata` part, keeping order.
pub fn encode_column_metadata(columns: &[ColumnDescriptor]) -> serde_json::Result<String> {
    serde_json::to_string(columns)
}

pub fn decode_column_metadata(raw: &str) -> serde_json::Result<Vec<ColumnDescriptor>> {
    serde_json::from_str(raw)
}

/// Joins an endpoint path onto a configured base address without doubling or
/// dropping the separating slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::{DataType, SensitivityType};

    #[test]
    fn endpoint_url_normalizes_the_separator() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:5000/", TEXT_ENDPOINT),
            "http://127.0.0.1:5000/api/anonymize/text/"
        );
        assert_eq!(
            endpoint_url("http://localhost:8080", CSV_ENDPOINT),
            "http://localhost:8080/api/anonymize/csv"
        );
    }

    #[test]
    fn column_metadata_keeps_list_order() {
        let columns = vec![
            ColumnDescriptor {
                name: "id".to_string(),
                data_type: Some(DataType::Number),
                sensitivity_type: Some(SensitivityType::Identifier),
            },
            ColumnDescriptor::unclassified("dob"),
        ];

        let raw = encode_column_metadata(&columns).unwrap();
        assert!(raw.find("\"id\"").unwrap() < raw.find("\"dob\"").unwrap());
        assert_eq!(decode_column_metadata(&raw).unwrap(), columns);
    }
}
