//! Assembles the payload sent to the anonymization service from the current
//! workflow state. Building never fails on missing input: callers only build
//! once a file or non-empty text is present.

use std::rc::Rc;

use common::model::column::ColumnDescriptor;
use common::requests::{
    encode_column_metadata, TextAnonymizationRequest, COLUMN_METADATA_FIELD, CSV_ENDPOINT,
    FILE_FIELD, TEXT_ENDPOINT,
};

/// A file chosen by the user, read fully into memory once at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnonymizationRequest {
    Text(TextAnonymizationRequest),
    Csv {
        file: Rc<SelectedFile>,
        column_metadata: Vec<ColumnDescriptor>,
    },
}

/// Transport-neutral view of a request body.
#[derive(Debug, PartialEq)]
pub enum Payload<'a> {
    Json(&'a TextAnonymizationRequest),
    Multipart(Vec<FormPart<'a>>),
}

#[derive(Debug, PartialEq)]
pub struct FormPart<'a> {
    pub name: &'static str,
    pub value: FormValue<'a>,
}

#[derive(Debug, PartialEq)]
pub enum FormValue<'a> {
    Text(String),
    File { file_name: &'a str, bytes: &'a [u8] },
}

impl AnonymizationRequest {
    pub fn text(text: &str) -> Self {
        AnonymizationRequest::Text(TextAnonymizationRequest {
            text: text.to_string(),
        })
    }

    /// Snapshots `columns` as they are right now, so the request always matches
    /// the list on screen at the moment of submission.
    pub fn csv(file: Rc<SelectedFile>, columns: &[ColumnDescriptor]) -> Self {
        AnonymizationRequest::Csv {
            file,
            column_metadata: columns.to_vec(),
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            AnonymizationRequest::Text(_) => TEXT_ENDPOINT,
            AnonymizationRequest::Csv { .. } => CSV_ENDPOINT,
        }
    }

    pub fn payload(&self) -> serde_json::Result<Payload<'_>> {
        match self {
            AnonymizationRequest::Text(body) => Ok(Payload::Json(body)),
            AnonymizationRequest::Csv {
                file,
                column_metadata,
            } => Ok(Payload::Multipart(vec![
                FormPart {
                    name: FILE_FIELD,
                    value: FormValue::File {
                        file_name: &file.name,
                        bytes: &file.bytes,
                    },
                },
                FormPart {
                    name: COLUMN_METADATA_FIELD,
                    value: FormValue::Text(encode_column_metadata(column_metadata)?),
                },
            ])),
        }
    }
}
