use dioxus::prelude::*;

/// A themed file picker. `name` is the form field the selected file is
/// submitted under.
#[component]
pub fn FileInput(
    name: String,
    #[props(default)] label: String,
    /// Comma-separated list of accepted types, e.g. `audio/*`.
    #[props(default)]
    accept: String,
    #[props(default = false)] multiple: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input file-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let input_id = format!("file-input-{name}");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{input_id}", "{label}" }
            }
            input {
                id: "{input_id}",
                r#type: "file",
                name: name,
                accept: accept,
                multiple: multiple,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &on_change {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
        }
    }
}
