pub mod api;

pub mod predict_client;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod forward;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod router;

#[cfg(feature = "server")]
pub mod telemetry;
