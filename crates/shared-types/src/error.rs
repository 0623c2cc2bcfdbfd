use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of server-side errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    BadGateway,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::BadGateway => write!(f, "BadGateway"),
        }
    }
}

/// Structured error returned by the server's own routes and server functions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadGateway, message)
    }

    /// Parse an AppError out of a `ServerFnError` string (client-side).
    ///
    /// The server function layer wraps the payload like
    /// `error running server function: {"kind":"BadGateway",...} (details: None)`,
    /// so the JSON object between the first `{` and the last `}` is tried
    /// when the whole string is not JSON.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::BadRequest => 400,
            AppErrorKind::BadGateway => 502,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

/// Everything that can end a prediction request without a result.
///
/// Every variant is handled the same way by the page: one diagnostic, no
/// change to the result element.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The bytes of a selected file could not be read.
    FormRead(String),
    /// The request never produced a response.
    Transport(String),
    /// The server answered with a non-success status.
    Status { status: u16, body: String },
    /// The body was not JSON or had no string `prediction` field.
    Decode(String),
}

impl PredictError {
    /// Short machine-friendly name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::FormRead(_) => "form_read",
            PredictError::Transport(_) => "transport",
            PredictError::Status { .. } => "status",
            PredictError::Decode(_) => "decode",
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::FormRead(msg) => write!(f, "failed to read form field: {msg}"),
            PredictError::Transport(msg) => write!(f, "request failed: {msg}"),
            PredictError::Status { status, body } if body.is_empty() => {
                write!(f, "server responded with status {status}")
            }
            PredictError::Status { status, body } => {
                write!(f, "server responded with status {status}: {body}")
            }
            PredictError::Decode(msg) => write!(f, "malformed prediction response: {msg}"),
        }
    }
}

impl std::error::Error for PredictError {}
