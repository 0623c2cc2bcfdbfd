use shared_types::{AppConfig, FeatureFlags, PredictConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, apply environment overrides, and store the result in
/// the global `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable every setting falls back to its
/// default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(config, |key| std::env::var(key).ok());

        tracing::info!(
            features = ?config.features,
            endpoint = %config.predict.endpoint,
            upstream = config.predict.upstream_url.as_deref().unwrap_or("<none>"),
            "Configuration loaded"
        );
        config
    })
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config file, using defaults");
        AppConfig::default()
    })
}

/// Overlay `PREDICT_UPSTREAM_URL` and `MAX_UPLOAD_BYTES` from the
/// environment. Unparseable or empty values are ignored.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(url) = lookup("PREDICT_UPSTREAM_URL").filter(|v| !v.trim().is_empty()) {
        config.predict.upstream_url = Some(url.trim().to_string());
    }
    if let Some(max) = lookup("MAX_UPLOAD_BYTES").and_then(|v| v.trim().parse().ok()) {
        config.predict.max_upload_bytes = max;
    }
    config
}

fn current() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

/// Loaded feature flags, or all-off defaults before `load_config()` runs.
pub fn feature_flags() -> &'static FeatureFlags {
    &current().features
}

/// Loaded `[predict]` settings, or defaults before `load_config()` runs.
pub fn predict_config() -> &'static PredictConfig {
    &current().predict
}
