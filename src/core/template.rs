//! Template rendering
//!
//! Looks an operation up in the catalog, checks that every declared field has
//! a value and then substitutes `{field}` placeholders in a single pass.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::core::catalog::{self, Operation};
use crate::core::data::Fields;
use crate::utils::error::{AppError, AppResult};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// Parse placeholder names from a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Render the named operation with the given fields
pub fn render(operation: &str, fields: &Fields) -> AppResult<String> {
    let op = catalog::find(operation)
        .ok_or_else(|| AppError::UnknownOperation(operation.to_string()))?;
    render_operation(op, fields)
}

/// Render an already resolved operation
pub fn render_operation(op: &Operation, fields: &Fields) -> AppResult<String> {
    if let Some(missing) = op.fields.iter().find(|name| !fields.contains(name)) {
        return Err(AppError::MissingField {
            operation: op.name.to_string(),
            field: missing.to_string(),
        });
    }

    let rendered = PLACEHOLDER.replace_all(op.template, |caps: &Captures| {
        let name = &caps[1];
        // Undeclared placeholders are left as-is; the catalog tests keep them in sync.
        fields.get(name).unwrap_or(&caps[0]).to_string()
    });

    Ok(rendered.into_owned())
}
