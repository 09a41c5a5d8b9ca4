use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::model::column::ColumnDescriptor;
use common::requests::{decode_column_metadata, COLUMN_METADATA_FIELD, FILE_FIELD};
use common::responses::ResultRow;
use futures_util::StreamExt;
use serde_json::Value;

use super::StubError;

/// Parts of the CSV request, collected in whatever order they arrive.
#[derive(Default)]
struct CsvUpload {
    file_name: Option<String>,
    bytes: Vec<u8>,
    column_metadata: Option<String>,
}

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the rows as a JSON array of objects.
/// - On failure: `400 Bad Request` with `{"error": message}`.
pub async fn process(payload: Multipart) -> impl Responder {
    let result = match read_upload(payload).await {
        Ok(upload) => anonymize_csv(upload),
        Err(e) => Err(e),
    };
    match result {
        Ok(rows) => {
            log::info!("Stub anonymized {} CSV rows", rows.len());
            HttpResponse::Ok().json(rows)
        }
        Err(e) => {
            log::warn!("Rejected CSV upload: {}", e);
            HttpResponse::from_error(e)
        }
    }
}

async fn read_upload(mut payload: Multipart) -> Result<CsvUpload, StubError> {
    let mut upload = CsvUpload::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| StubError::Upload(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(|e| StubError::Upload(e.to_string()))?);
        }

        match name.as_deref() {
            Some(FILE_FIELD) => {
                upload.file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()));
                upload.bytes = bytes;
            }
            Some(COLUMN_METADATA_FIELD) => {
                upload.column_metadata = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            _ => {}
        }
    }
    Ok(upload)
}

fn anonymize_csv(upload: CsvUpload) -> Result<Vec<ResultRow>, StubError> {
    let is_csv = upload
        .file_name
        .as_deref()
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".csv"));
    if !is_csv {
        return Err(StubError::InvalidFileFormat);
    }

    let raw_metadata = upload
        .column_metadata
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(StubError::MissingColumnMetadata)?;
    let columns = decode_column_metadata(&raw_metadata).map_err(StubError::InvalidColumnMetadata)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(upload.bytes.as_slice());
    let headers = reader.headers()?.clone();
    check_columns(&columns, &headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: ResultRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn check_columns(columns: &[ColumnDescriptor], headers: &csv::StringRecord) -> Result<(), StubError> {
    match columns
        .iter()
        .find(|column| !headers.iter().any(|header| header == column.name))
    {
        Some(missing) => Err(StubError::UnknownColumn(missing.name.clone())),
        None => Ok(()),
    }
}
