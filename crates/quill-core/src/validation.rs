//! Schema validation for submitted post forms.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::PostFields;
use crate::form::FormResult;

/// Raw post submission, exactly as it arrives from a form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostInput {
    #[validate(required, length(min = 3, max = 255))]
    pub title: Option<String>,

    #[validate(required, length(min = 10, max = 4000))]
    pub content: Option<String>,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    fn trimmed(self) -> Self {
        Self {
            title: self.title.map(|t| t.trim().to_string()),
            content: self.content.map(|c| c.trim().to_string()),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }
}

/// Validate a submission.
///
/// Values are trimmed before the length checks and the trimmed values are
/// what the returned [`PostFields`] carry. Failures list every violated rule
/// per field, in rule order.
pub fn validate_post(input: PostInput) -> Result<PostFields, FormResult> {
    let input = input.trimmed();

    let mut result = FormResult::default();
    if let Err(errors) = input.validate() {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, field_errors) in fields {
            let value = input.field(&field);
            for error in field_errors {
                result.push(&field, describe(error, value));
            }
        }
    }
    if !result.is_empty() {
        return Err(result);
    }

    match (input.title, input.content) {
        (Some(title), Some(content)) => Ok(PostFields { title, content }),
        _ => Err(FormResult::form_error("Required")),
    }
}

fn describe(error: &ValidationError, value: Option<&str>) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let bound = |name: &str| error.params.get(name).and_then(serde_json::Value::as_u64);

    match &*error.code {
        "required" => "Required".to_string(),
        "length" => {
            let len = value.map(|v| v.chars().count() as u64).unwrap_or(0);
            match (bound("min"), bound("max")) {
                (Some(min), _) if len < min => {
                    format!("String must contain at least {min} character(s)")
                }
                (_, Some(max)) if len > max => {
                    format!("String must contain at most {max} character(s)")
                }
                _ => "Invalid length".to_string(),
            }
        }
        code => format!("Invalid value ({code})"),
    }
}
