use dioxus::prelude::*;
use shared_types::PredictConfig;

/// Page settings for the prediction form. The upstream classifier address
/// stays on the server.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_predict_config() -> Result<PredictConfig, ServerFnError> {
    Ok(crate::config::predict_config().client_view())
}
