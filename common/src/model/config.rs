use serde::{Deserialize, Serialize};

/// Base address of the anonymization service when no configuration is available.
pub const DEFAULT_SERVICE_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration document published by the backend at `GET /api/config` and
/// loaded by the frontend on its first render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Scheme, host and optional port of the anonymization service. Endpoint
    /// paths are appended with [`crate::requests::endpoint_url`].
    pub service_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_base_url: DEFAULT_SERVICE_BASE_URL.to_string(),
        }
    }
}
