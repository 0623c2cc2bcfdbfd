use serde::{Deserialize, Serialize};

use crate::PredictError;

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File(FilePart),
}

/// A file selected in a file input, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// One named entry of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
}

/// Form fields in document order, as they were when the form was submitted.
///
/// Names may repeat (e.g. a multi-file input); order is preserved so the
/// multipart body matches what a browser would send.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<FormField>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        });
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: FilePart) {
        self.fields.push(FormField {
            name: name.into(),
            value: FieldValue::File(file),
        });
    }

    /// Builder-style variant of [`push_text`](Self::push_text).
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    /// Builder-style variant of [`push_file`](Self::push_file).
    pub fn with_file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.push_file(name, file);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for FormPayload {
    type Item = FormField;
    type IntoIter = std::vec::IntoIter<FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Body returned by the classifier. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub prediction: String,
}

impl PredictionResponse {
    /// Decode a response body. Anything other than a JSON object with a
    /// string `prediction` is a [`PredictError::Decode`].
    pub fn from_json(body: &[u8]) -> Result<Self, PredictError> {
        serde_json::from_slice(body).map_err(|e| PredictError::Decode(e.to_string()))
    }

    /// Text written into the result element, e.g. `Gatunek: Rock`.
    pub fn display_text(&self, label: &str) -> String {
        format!("{label}: {}", self.prediction)
    }
}
