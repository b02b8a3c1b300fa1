//! Write-time validation helpers.
//!
//! DTOs derive [`validator::Validate`]; this module turns the resulting
//! [`ValidationErrors`] into a single readable [`CoreError::Validation`]
//! message and hosts the checks that do not fit a derive.

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Flatten validation errors into one `"; "`-separated message.
///
/// Custom messages are used verbatim, so they should name the field as the
/// client spells it. Errors without one fall back to `"field: code"`.
/// Parts are sorted so the message is stable regardless of map order.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field}: {}", e.code),
                })
                .collect::<Vec<_>>(),
            ValidationErrorsKind::Struct(inner) => vec![format!("{field}: {}", describe(inner))],
            ValidationErrorsKind::List(items) => items
                .iter()
                .map(|(index, inner)| format!("{field}[{index}]: {}", describe(inner)))
                .collect(),
        })
        .collect();

    parts.sort();
    parts.join("; ")
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(describe(&errors))
    }
}

/// Normalize an upload file name into an object-store key.
///
/// Leading slashes are stripped so the key never escapes the bucket root.
pub fn object_key(file_name: Option<&str>) -> Result<String, CoreError> {
    let key = file_name
        .map(|name| name.trim().trim_start_matches('/'))
        .unwrap_or_default();

    if key.is_empty() {
        return Err(CoreError::Validation(
            "imageFileName: a non-empty file name is required".into(),
        ));
    }
    if key.chars().any(char::is_control) {
        return Err(CoreError::Validation(
            "imageFileName: must not contain control characters".into(),
        ));
    }
    Ok(key.to_string())
}
