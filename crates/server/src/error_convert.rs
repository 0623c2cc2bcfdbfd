use shared_types::AppError;

/// Convert a failed call to the upstream classifier into an AppError.
pub fn upstream_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::bad_gateway("Prediction service timed out")
    } else if err.is_connect() {
        AppError::bad_gateway("Prediction service is unreachable")
    } else {
        AppError::bad_gateway(format!("Prediction service request failed: {err}"))
    }
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait UpstreamErrorExt {
    fn into_app_error(self) -> AppError;
}

impl UpstreamErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        upstream_to_app_error(self)
    }
}
