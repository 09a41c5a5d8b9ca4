//! Response side of the anonymization service contract.
//!
//! The service answers with one of three shapes: a bare JSON string (text
//! endpoint), a JSON array of row objects (CSV endpoint), or an object carrying
//! an `error` message. [`ServiceResponse`] decodes the body once, at the
//! boundary, so nothing downstream inspects raw JSON.

use serde_json::{Map, Value};
use thiserror::Error;

/// One anonymized record: original column name -> anonymized value.
/// Key order is the order the service sent.
pub type ResultRow = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    /// The service rejected the request; the message is meant for the user.
    Error(String),
    TextResult(String),
    TableResult(Vec<ResultRow>),
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl ServiceResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, ResponseError> {
        Self::from_value(serde_json::from_slice(body)?)
    }

    pub fn parse(body: &str) -> Result<Self, ResponseError> {
        Self::from_value(serde_json::from_str(body)?)
    }

    pub fn from_value(value: Value) -> Result<Self, ResponseError> {
        match value {
            Value::String(text) => Ok(ServiceResponse::TextResult(text)),
            Value::Array(items) => rows_from(items).map(ServiceResponse::TableResult),
            Value::Object(mut object) => {
                if let Some(error) = object.remove("error").filter(is_truthy) {
                    return Ok(ServiceResponse::Error(message_from(error)));
                }
                // Envelopes produced by the FastAPI flavour of the service.
                if let Some(detail) = object.remove("detail").filter(is_truthy) {
                    return Ok(ServiceResponse::Error(message_from(detail)));
                }
                match (object.remove("text"), object.remove("data")) {
                    (Some(Value::String(text)), _) => Ok(ServiceResponse::TextResult(text)),
                    (_, Some(Value::Array(items))) => {
                        rows_from(items).map(ServiceResponse::TableResult)
                    }
                    _ => Err(ResponseError::UnexpectedShape(
                        "object without error, text or data".to_string(),
                    )),
                }
            }
            other => Err(ResponseError::UnexpectedShape(format!(
                "{} at top level",
                kind_of(&other)
            ))),
        }
    }
}

fn rows_from(items: Vec<Value>) -> Result<Vec<ResultRow>, ResponseError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(ResponseError::UnexpectedShape(format!(
                "row {} is {}, expected an object",
                index,
                kind_of(&other)
            ))),
        })
        .collect()
}

/// Empty strings, `null`, `false` and zero do not count as an error.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_from(value: Value) -> String {
    match value {
        Value::String(message) => message,
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_string_is_a_text_result() {
        let response = ServiceResponse::parse("\"<PERSON> lives in <LOCATION>\"").unwrap();
        assert_eq!(
            response,
            ServiceResponse::TextResult("<PERSON> lives in <LOCATION>".to_string())
        );
    }

    #[test]
    fn error_field_wins_over_everything_else() {
        let response =
            ServiceResponse::from_value(json!({ "error": "bad column", "data": [] })).unwrap();
        assert_eq!(response, ServiceResponse::Error("bad column".to_string()));
    }

    #[test]
    fn falsy_error_field_is_ignored() {
        let response =
            ServiceResponse::from_value(json!({ "error": "", "text": "fine" })).unwrap();
        assert_eq!(response, ServiceResponse::TextResult("fine".to_string()));
    }

    #[test]
    fn rows_keep_the_key_order_sent_by_the_service() {
        let response = ServiceResponse::parse(r#"[{"zeta": 1, "alpha": "x"}]"#).unwrap();
        let ServiceResponse::TableResult(rows) = response else {
            panic!("expected a table result");
        };
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn envelopes_are_unwrapped() {
        assert_eq!(
            ServiceResponse::from_value(json!({ "status_code": 200, "text": "ok" })).unwrap(),
            ServiceResponse::TextResult("ok".to_string())
        );
        assert_eq!(
            ServiceResponse::from_value(json!({ "status_code": 500, "detail": "Text is empty" }))
                .unwrap(),
            ServiceResponse::Error("Text is empty".to_string())
        );
        assert!(matches!(
            ServiceResponse::from_value(json!({ "status_code": 200, "data": [{"a": 1}] })),
            Ok(ServiceResponse::TableResult(rows)) if rows.len() == 1
        ));
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(matches!(
            ServiceResponse::parse("<html>502</html>"),
            Err(ResponseError::InvalidJson(_))
        ));
        assert!(matches!(
            ServiceResponse::from_value(json!([1, 2])),
            Err(ResponseError::UnexpectedShape(_))
        ));
        assert!(matches!(
            ServiceResponse::from_value(json!(42)),
            Err(ResponseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn empty_array_is_an_empty_table() {
        assert_eq!(
            ServiceResponse::parse("[]").unwrap(),
            ServiceResponse::TableResult(Vec::new())
        );
    }
}
