//! `--set NAME=VALUE` parsing into a [`FormInput`]

use thiserror::Error;
use trihealth_domain::{Condition, DomainError, FormInput};

/// Errors in command-line field assignments
#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("'{0}' is not a NAME=VALUE assignment")]
    Malformed(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Split `NAME=VALUE`, trimming whitespace around both sides
pub fn parse_assignment(raw: &str) -> Result<(&str, &str), AssignmentError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AssignmentError::Malformed(raw.to_string()))?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return Err(AssignmentError::Malformed(raw.to_string()));
    }
    Ok((name, value))
}

/// Start from the condition's defaults and apply each assignment in order.
///
/// Later assignments to the same field win.
pub fn build_form<S: AsRef<str>>(
    condition: Condition,
    assignments: &[S],
) -> Result<FormInput, AssignmentError> {
    let mut form = FormInput::defaults(condition);
    for raw in assignments {
        let (name, value) = parse_assignment(raw.as_ref())?;
        form.set_text(name, value)?;
    }
    Ok(form)
}
