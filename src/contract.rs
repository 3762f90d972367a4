//! Precondition, class-invariant and postcondition checks shared by the name types.
//!
//! Each name method calls the checks it needs directly; a failed check is returned as
//! the matching [`NameError`] variant and logged.

use log::{debug, error};

use crate::{error::NameError, parser};

pub(crate) fn ensure_argument(
    condition: bool,
    message: impl FnOnce() -> String,
) -> Result<(), NameError> {
    if condition {
        return Ok(());
    }
    let message = message();
    debug!("rejected argument: {}", message);
    Err(NameError::IllegalArgument(message))
}

pub(crate) fn ensure_state(
    condition: bool,
    message: impl FnOnce() -> String,
) -> Result<(), NameError> {
    if condition {
        return Ok(());
    }
    let message = message();
    error!("class invariant violated: {}", message);
    Err(NameError::InvalidState(message))
}

pub(crate) fn ensure_postcondition(
    condition: bool,
    message: impl FnOnce() -> String,
) -> Result<(), NameError> {
    if condition {
        return Ok(());
    }
    let message = message();
    error!("postcondition violated: {}", message);
    Err(NameError::MethodFailed(message))
}

/// `i` must address an existing component.
pub(crate) fn ensure_index(i: usize, no_components: usize) -> Result<(), NameError> {
    ensure_argument(i < no_components, || {
        format!(
            "index {} out of range for name with {} components",
            i, no_components
        )
    })
}

/// `i` may also be one past the last component.
pub(crate) fn ensure_insert_index(i: usize, no_components: usize) -> Result<(), NameError> {
    ensure_argument(i <= no_components, || {
        format!(
            "insert index {} out of range for name with {} components",
            i, no_components
        )
    })
}

/// Validates a caller-supplied component and returns it in canonical spelling.
///
/// Under the escape delimiter `\.` is accepted for a literal `.` before the check.
pub(crate) fn masked_argument(component: &str, delimiter: char) -> Result<String, NameError> {
    let canonical = parser::canonical(component, delimiter);
    ensure_argument(parser::is_properly_masked(&canonical, delimiter, true), || {
        format!(
            "component '{}' is not properly masked for delimiter '{}'",
            component, delimiter
        )
    })?;
    Ok(canonical)
}

/// Every stored component must be properly masked.
pub(crate) fn ensure_stored_components<S: AsRef<str>>(
    components: &[S],
    delimiter: char,
) -> Result<(), NameError> {
    for (i, component) in components.iter().enumerate() {
        let component = component.as_ref();
        ensure_state(parser::is_properly_masked(component, delimiter, true), || {
            format!(
                "stored component {} '{}' is not properly masked for delimiter '{}'",
                i, component, delimiter
            )
        })?;
    }
    Ok(())
}

pub(crate) fn ensure_count(
    operation: &str,
    expected: usize,
    actual: usize,
) -> Result<(), NameError> {
    ensure_postcondition(expected == actual, || {
        format!(
            "{} left {} components, expected {}",
            operation, actual, expected
        )
    })
}

pub(crate) fn ensure_component_at(
    operation: &str,
    i: usize,
    expected: &str,
    actual: &str,
) -> Result<(), NameError> {
    ensure_postcondition(expected == actual, || {
        format!(
            "{} stored '{}' at index {}, expected '{}'",
            operation, actual, i, expected
        )
    })
}
