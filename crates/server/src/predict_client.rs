use reqwest::multipart::{Form, Part};
use shared_types::{
    AppError, FieldValue, FormField, FormPayload, PredictError, PredictionResponse,
};

/// Sends a form submission to the classifier and returns its answer.
///
/// The page only depends on this trait, so tests can substitute a transport
/// that resolves whenever they choose.
#[allow(async_fn_in_trait)]
pub trait PredictTransport {
    async fn predict(&self, payload: FormPayload) -> Result<PredictionResponse, PredictError>;
}

/// Join a base URL and an absolute endpoint path without doubling slashes.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// `reqwest`-backed transport posting `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    url: String,
}

impl HttpPredictor {
    pub fn new(base_url: &str, endpoint: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, endpoint)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, endpoint: &str) -> Self {
        Self {
            client,
            url: endpoint_url(base_url, endpoint),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Build the multipart body in payload order. Only the content type given by
/// the file input is attached; no other headers are set.
fn multipart_form(payload: FormPayload) -> Result<Form, PredictError> {
    let mut form = Form::new();
    for FormField { name, value } in payload {
        form = match value {
            FieldValue::Text(text) => form.text(name, text),
            FieldValue::File(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(ct) = file.content_type.filter(|ct| !ct.is_empty()) {
                    part = part.mime_str(&ct).map_err(|e| {
                        PredictError::FormRead(format!("invalid content type {ct:?}: {e}"))
                    })?;
                }
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

impl PredictTransport for HttpPredictor {
    async fn predict(&self, payload: FormPayload) -> Result<PredictionResponse, PredictError> {
        let form = multipart_form(payload)?;

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).trim().to_string();
            // Errors raised by our own forwarding route arrive as AppError JSON.
            let body = AppError::from_server_error(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        PredictionResponse::from_json(&body)
    }
}
