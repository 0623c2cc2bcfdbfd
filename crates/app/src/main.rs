use dioxus::prelude::*;
use shared_types::PredictConfig;

mod predict;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        if config.predict.upstream_url.is_none() {
            tracing::warn!(
                endpoint = %config.predict.endpoint,
                "No prediction upstream configured; submissions will fail with 502"
            );
        }

        let mut router =
            dioxus::server::router(App).merge(server::router::api_router(&config.predict));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch page settings once and provide via context (defaults on error)
    let config_resource =
        use_server_future(move || async move { server::api::get_predict_config().await })?;

    let config = config_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(PredictConfig::default()))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default prediction settings");
            PredictConfig::default()
        });

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "container",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
