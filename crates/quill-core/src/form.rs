//! Form results - the error report handed back to whoever submitted a form.

use serde::{Deserialize, Serialize};

/// Field name for errors that don't belong to a single input.
pub const FORM_FIELD: &str = "_form";

/// Per-field error messages for a rejected submission.
///
/// Serialized with the keys `title`, `content` and `_form`; absent keys are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,

    #[serde(rename = "_form", default, skip_serializing_if = "Option::is_none")]
    pub form: Option<Vec<String>>,
}

impl FormResult {
    /// A result carrying a single form-level message.
    pub fn form_error(message: impl Into<String>) -> Self {
        Self {
            form: Some(vec![message.into()]),
            ..Self::default()
        }
    }

    /// Append a message under `field`. Unknown fields land in `_form`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let slot = match field {
            "title" => &mut self.title,
            "content" => &mut self.content,
            _ => &mut self.form,
        };
        slot.get_or_insert_with(Vec::new).push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.form.is_none()
    }
}
