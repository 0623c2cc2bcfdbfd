//! Submit handling for the prediction form.
//!
//! [`SubmitInterceptor::intercept`] does its synchronous part (suppress the
//! browser's navigation, snapshot the fields) before returning, and hands
//! back a future holding the single network suspension. The caller decides
//! where that future runs: `spawn` on the page, a test executor in tests.
//!
//! Overlapping submissions are independent. Whichever response resolves
//! last is what the result element shows.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use dioxus::html::FormValue;
use dioxus::prelude::*;
use server::predict_client::PredictTransport;
use shared_types::{FilePart, FormPayload, PredictError};

/// A form submission as seen by the interceptor.
pub trait SubmitEvent {
    /// Owns everything it reads, so it can outlive the event.
    type Snapshot: Future<Output = Result<FormPayload, PredictError>> + 'static;

    /// Stop the browser's own navigation for this submission.
    fn suppress_default(&self);

    /// Capture the form's fields as they are right now. File contents may be
    /// read by the returned future, but which fields and files are sent is
    /// fixed at call time.
    fn snapshot(&self) -> Self::Snapshot;
}

/// The element whose text shows the prediction.
pub trait ResultSurface {
    fn show(&mut self, text: String);
}

/// Where failed submissions are reported.
pub trait Diagnostics {
    fn report(&self, error: &PredictError);
}

/// Reports failures on the `tracing` error stream (the browser console on
/// the web target).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &PredictError) {
        tracing::error!(kind = error.kind(), error = %error, "Prediction request failed");
    }
}

/// How one submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The result element now shows this text.
    Updated(String),
    /// Nothing was shown; the error went to diagnostics.
    Failed(PredictError),
}

/// Turns one form submission into one prediction request and, on success,
/// one update of the result element.
pub struct SubmitInterceptor<T, S, D = TracingDiagnostics> {
    transport: Rc<T>,
    surface: S,
    diagnostics: Rc<D>,
    label: Rc<str>,
}

impl<T, S: Clone, D> Clone for SubmitInterceptor<T, S, D> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            surface: self.surface.clone(),
            diagnostics: Rc::clone(&self.diagnostics),
            label: Rc::clone(&self.label),
        }
    }
}

impl<T, S> SubmitInterceptor<T, S, TracingDiagnostics> {
    pub fn new(transport: T, surface: S, label: impl Into<String>) -> Self {
        Self {
            transport: Rc::new(transport),
            surface,
            diagnostics: Rc::new(TracingDiagnostics),
            label: Rc::from(label.into()),
        }
    }
}

impl<T, S, D> SubmitInterceptor<T, S, D> {
    /// Replace the diagnostics sink.
    pub fn with_diagnostics<D2>(self, diagnostics: D2) -> SubmitInterceptor<T, S, D2> {
        SubmitInterceptor {
            transport: self.transport,
            surface: self.surface,
            diagnostics: Rc::new(diagnostics),
            label: self.label,
        }
    }
}

impl<T, S, D> SubmitInterceptor<T, S, D>
where
    T: PredictTransport + 'static,
    S: ResultSurface + Clone + 'static,
    D: Diagnostics + 'static,
{
    /// Handle a submit event.
    ///
    /// Navigation is suppressed before this returns, whatever the request
    /// later does.
    pub fn intercept<E: SubmitEvent>(&self, event: &E) -> impl Future<Output = SubmitOutcome> + 'static {
        event.suppress_default();
        let snapshot = event.snapshot();
        let this = self.clone();

        async move {
            match snapshot.await {
                Ok(payload) => this.submit(payload).await,
                Err(e) => this.fail(e),
            }
        }
    }

    /// Send an already captured payload and render the answer.
    pub async fn submit(&self, payload: FormPayload) -> SubmitOutcome {
        tracing::debug!(fields = payload.len(), "Submitting prediction request");

        match self.transport.predict(payload).await {
            Ok(response) => {
                let text = response.display_text(&self.label);
                let mut surface = self.surface.clone();
                surface.show(text.clone());
                SubmitOutcome::Updated(text)
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&self, error: PredictError) -> SubmitOutcome {
        self.diagnostics.report(&error);
        SubmitOutcome::Failed(error)
    }
}

// ── Dioxus bindings ─────────────────────────────────────────────────

impl SubmitEvent for Event<FormData> {
    type Snapshot = Pin<Box<dyn Future<Output = Result<FormPayload, PredictError>>>>;

    fn suppress_default(&self) {
        self.prevent_default();
    }

    fn snapshot(&self) -> Self::Snapshot {
        Box::pin(read_form_values(self.values()))
    }
}

/// Materialize the submitted values, reading selected files into memory.
///
/// A file input with nothing selected is sent as an empty, unnamed file,
/// which is what a browser puts in the multipart body for it.
async fn read_form_values(values: Vec<(String, FormValue)>) -> Result<FormPayload, PredictError> {
    let mut payload = FormPayload::new();
    for (name, value) in values {
        match value {
            FormValue::Text(text) => payload.push_text(name, text),
            FormValue::File(Some(file)) => {
                let file_name = file.name();
                let bytes = file
                    .read_bytes()
                    .await
                    .map_err(|e| PredictError::FormRead(format!("{file_name}: {e}")))?;
                payload.push_file(
                    name,
                    FilePart {
                        file_name,
                        content_type: file.content_type(),
                        bytes: bytes.to_vec(),
                    },
                );
            }
            FormValue::File(None) => payload.push_file(
                name,
                FilePart {
                    file_name: String::new(),
                    content_type: None,
                    bytes: Vec::new(),
                },
            ),
        }
    }
    Ok(payload)
}

impl ResultSurface for Signal<String> {
    fn show(&mut self, text: String) {
        self.set(text);
    }
}

/// Origin the page was served from, used to resolve the endpoint path.
///
/// Native builds have no page origin and fall back to
/// `PREDICT_SERVER_URL` (compile time) or the local dev server.
pub fn server_base_url() -> String {
    #[cfg(feature = "web")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    option_env!("PREDICT_SERVER_URL")
        .unwrap_or("http://127.0.0.1:8080")
        .to_string()
}
