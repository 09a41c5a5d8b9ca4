//! Browser transport for the anonymization service and the client
//! configuration, built on `gloo-net`.

use gloo_net::http::{Request, Response};
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, FormData};

use common::model::config::ClientConfig;
use common::requests::endpoint_url;
use common::responses::ServiceResponse;

use crate::workflow::controller::{AnonymizationService, TransportError};
use crate::workflow::request::{AnonymizationRequest, FormPart, FormValue, Payload};

const CONFIG_PATH: &str = "/api/config";

/// Talks to the service at a configured base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAnonymizationService {
    base_url: String,
}

impl HttpAnonymizationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl AnonymizationService for HttpAnonymizationService {
    async fn send(
        &self,
        request: &AnonymizationRequest,
    ) -> Result<ServiceResponse, TransportError> {
        let url = endpoint_url(&self.base_url, request.endpoint());
        let payload = request
            .payload()
            .map_err(|err| TransportError::Encoding(err.to_string()))?;

        let prepared = match payload {
            Payload::Json(body) => Request::post(&url).json(body),
            Payload::Multipart(parts) => Request::post(&url).body(form_data(&parts)?),
        }
        .map_err(|err| TransportError::Encoding(err.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        decode(response).await
    }
}

async fn decode(response: Response) -> Result<ServiceResponse, TransportError> {
    let body = response
        .text()
        .await
        .map_err(|err| TransportError::Network(err.to_string()))?;
    classify(response.status(), response.ok(), &body)
}

/// Error bodies are honoured whatever the status; anything else needs a 2xx.
fn classify(status: u16, ok: bool, body: &str) -> Result<ServiceResponse, TransportError> {
    match ServiceResponse::parse(body) {
        Ok(error @ ServiceResponse::Error(_)) => Ok(error),
        Ok(_) | Err(_) if !ok => Err(TransportError::UnexpectedStatus { status }),
        Ok(decoded) => Ok(decoded),
        Err(err) => Err(TransportError::Malformed(err)),
    }
}

fn form_data(parts: &[FormPart<'_>]) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(js_error)?;
    for part in parts {
        let appended = match &part.value {
            FormValue::Text(value) => form.append_with_str(part.name, value),
            FormValue::File { file_name, bytes } => {
                let chunks = Array::of1(&Uint8Array::from(*bytes));
                let blob = Blob::new_with_u8_array_sequence(&chunks).map_err(js_error)?;
                form.append_with_blob_and_filename(part.name, &blob, file_name)
            }
        };
        appended.map_err(js_error)?;
    }
    Ok(form)
}

fn js_error(value: wasm_bindgen::JsValue) -> TransportError {
    TransportError::Encoding(format!("{:?}", value))
}

/// Loads the configuration published by the backend. Any failure falls back
/// to the defaults so the client stays usable without it.
pub async fn fetch_client_config() -> ClientConfig {
    let loaded = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response
            .json::<ClientConfig>()
            .await
            .map_err(|err| err.to_string()),
        Ok(response) => Err(format!("status {}", response.status())),
        Err(err) => Err(err.to_string()),
    };

    match loaded {
        Ok(config) => config,
        Err(reason) => {
            gloo_console::warn!(format!(
                "Could not load {}, using defaults: {}",
                CONFIG_PATH, reason
            ));
            ClientConfig::default()
        }
    }
}
