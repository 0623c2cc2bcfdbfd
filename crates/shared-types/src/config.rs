use serde::{Deserialize, Serialize};

/// Path the page posts submissions to.
pub const DEFAULT_ENDPOINT: &str = "/predict";

/// Static label shown in front of the prediction ("species/kind").
pub const DEFAULT_RESULT_LABEL: &str = "Gatunek";

/// Id of the element whose text shows the prediction.
pub const DEFAULT_RESULT_ELEMENT_ID: &str = "result";

/// Largest request body accepted by the server (50 MB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_result_label() -> String {
    DEFAULT_RESULT_LABEL.to_string()
}

fn default_result_element_id() -> String {
    DEFAULT_RESULT_ELEMENT_ID.to_string()
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

/// The `[predict]` section of `config.toml`.
///
/// `upstream_url` and `max_upload_bytes` only matter to the server; the
/// client receives the whole struct through a server function and uses the
/// endpoint and display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_result_label")]
    pub result_label: String,
    #[serde(default = "default_result_element_id")]
    pub result_element_id: String,
    /// Classifier that `/predict` is forwarded to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_url: Option<String>,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            result_label: default_result_label(),
            result_element_id: default_result_element_id(),
            upstream_url: None,
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl PredictConfig {
    /// Copy of this config with server-only settings removed, safe to hand
    /// to the browser.
    pub fn client_view(&self) -> Self {
        Self {
            upstream_url: None,
            ..self.clone()
        }
    }
}
