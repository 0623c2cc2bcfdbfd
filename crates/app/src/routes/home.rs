use dioxus::prelude::*;
use server::predict_client::HttpPredictor;
use shared_types::PredictConfig;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FileInput,
    PageHeader, PageTitle,
};

use crate::predict::{server_base_url, SubmitInterceptor, SubmitOutcome};

/// Id of the one form this page renders; the submit handler is bound to it
/// directly rather than looked up in the document.
pub const FORM_ID: &str = "predict-form";

/// Upload page: one form, one result line.
#[component]
pub fn PredictPage() -> Element {
    let config = use_context::<PredictConfig>();
    let result_text = use_signal(String::new);
    let result_id = config.result_element_id.clone();

    let interceptor = use_hook(|| {
        let predictor = HttpPredictor::new(&server_base_url(), &config.endpoint);
        SubmitInterceptor::new(predictor, result_text, config.result_label.clone())
    });

    let handle_submit = move |evt: Event<FormData>| {
        let pending = interceptor.intercept(&evt);
        spawn(async move {
            if let SubmitOutcome::Updated(text) = pending.await {
                tracing::debug!(%text, "Prediction shown");
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Music Genre Prediction" }
            }

            Card {
                CardHeader {
                    CardTitle { "Upload a recording" }
                    CardDescription { "The classifier listens to the file and names its genre." }
                }
                CardContent {
                    form { id: FORM_ID, class: "predict-form", onsubmit: handle_submit,
                        FileInput {
                            name: "file",
                            label: "Audio file",
                            accept: "audio/*",
                        }
                        Button { variant: ButtonVariant::Primary, button_type: "submit", "Predict" }
                    }

                    div {
                        id: "{result_id}",
                        class: "predict-result",
                        "{result_text}"
                    }
                }
            }
        }
    }
}
