//! Local stand-in for the anonymization service.
//!
//! It speaks the same contract as the real service so the frontend can be
//! exercised end to end without it, but performs no anonymization: text comes
//! back unchanged and CSV uploads come back as their rows, after the same
//! validation the real service applies to the request.
//!
//! - `POST /api/anonymize/text/` (with or without the trailing slash)
//! - `POST /api/anonymize/csv`
//!
//! Every failure is answered with `400 Bad Request` and `{"error": message}`.

mod text;
mod upload;

use actix_web::web::{post, scope, JsonConfig};
use actix_web::{HttpResponse, ResponseError, Scope};
use serde_json::json;
use thiserror::Error;

const API_PATH: &str = "/api/anonymize";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(
            JsonConfig::default()
                .limit(10 * 1024 * 1024)
                .error_handler(|err, _req| StubError::InvalidBody(err.to_string()).into()),
        )
        .route("/text/", post().to(text::process))
        .route("/text", post().to(text::process))
        .route("/csv", post().to(upload::process))
}

#[derive(Debug, Error)]
pub enum StubError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Text is empty")]
    EmptyText,
    #[error("Invalid file format. Please upload a CSV file")]
    InvalidFileFormat,
    #[error("Column metadata is required for anonymization")]
    MissingColumnMetadata,
    #[error("Invalid column metadata: {0}")]
    InvalidColumnMetadata(#[source] serde_json::Error),
    #[error("Column '{0}' not found in the CSV file")]
    UnknownColumn(String),
    #[error("Could not read the CSV file: {0}")]
    UnreadableCsv(#[from] csv::Error),
    #[error("Could not read the upload: {0}")]
    Upload(String),
}

impl ResponseError for StubError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "error": self.to_string() }))
    }
}
