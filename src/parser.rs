//! Escape-aware masking, unmasking, remasking and splitting of name components.
//!
//! Every function takes the delimiter it works under explicitly, so components coming
//! from names with different delimiters can be combined without any shared state.

use std::borrow::Borrow;

use log::{debug, error};

use crate::error::NameError;

/// Marks the following delimiter or escape character as a literal.
pub const ESCAPE_CHARACTER: char = '\\';

/// Delimiter of data strings and of names built without an explicit delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// Characters that may follow an escape inside a component masked under `delimiter`.
fn is_escapable(ch: char, delimiter: char) -> bool {
    ch == ESCAPE_CHARACTER || ch == delimiter
}

fn ensure_masked(component: &str, delimiter: char) -> Result<(), NameError> {
    if is_properly_masked(component, delimiter, true) {
        return Ok(());
    }
    debug!(
        "component '{}' is not properly masked for delimiter '{}'",
        component, delimiter
    );
    Err(NameError::MalformedInput(format!(
        "component '{}' is not properly masked for delimiter '{}'",
        component, delimiter
    )))
}

/// Parses delimiter text, which must be exactly one character.
pub fn delimiter_from_str(delimiter: &str) -> Result<char, NameError> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(NameError::IllegalArgument(format!(
            "delimiter must be a single character, got '{}'",
            delimiter
        ))),
    }
}

/// Escapes every literal delimiter and escape character in `component`.
pub fn mask(component: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(component.len() * 2);

    for ch in component.chars() {
        if ch == ESCAPE_CHARACTER || ch == delimiter {
            result.push(ESCAPE_CHARACTER);
        }
        result.push(ch);
    }

    result
}

/// Strips the escape prefixes from a component masked under `delimiter`.
pub fn unmask(component: &str, delimiter: char) -> Result<String, NameError> {
    ensure_masked(component, delimiter)?;
    Ok(unescape(component))
}

/// Unmasks a component that is already known to be properly masked.
///
/// A dangling escape is kept as a literal, which makes this total.
pub(crate) fn unescape(component: &str) -> String {
    let mut result = String::with_capacity(component.len());
    let mut chars = component.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            if let Some(next) = chars.next() {
                result.push(next);
                continue;
            }
        }
        result.push(ch);
    }

    result
}

/// Converts a component masked under `from` into one masked under `to`.
///
/// Escaped escape characters are carried over untouched. Every other escaped or bare
/// character is a literal and gets an escape only if it is `to`.
pub fn remask(component: &str, to: char, from: char) -> Result<String, NameError> {
    ensure_masked(component, from)?;

    if to == from {
        return Ok(component.to_string());
    }

    let result = transcode(component, to);

    if !is_properly_masked(&result, to, true) {
        error!(
            "remasking '{}' from '{}' to '{}' produced '{}'",
            component, from, to, result
        );
        return Err(NameError::MethodFailed(format!(
            "remasked component '{}' is not properly masked for delimiter '{}'",
            result, to
        )));
    }

    Ok(result)
}

/// Remasks a component that is already known to be properly masked, towards `to`.
pub(crate) fn transcode(component: &str, to: char) -> String {
    let mut result = String::with_capacity(component.len() + 2);
    let mut chars = component.chars();

    while let Some(ch) = chars.next() {
        let literal = match ch {
            ESCAPE_CHARACTER => match chars.next() {
                Some(ESCAPE_CHARACTER) | None => {
                    result.push(ESCAPE_CHARACTER);
                    result.push(ESCAPE_CHARACTER);
                    continue;
                }
                Some(next) => next,
            },
            other => other,
        };

        if literal == to && to != ESCAPE_CHARACTER {
            result.push(ESCAPE_CHARACTER);
        }
        result.push(literal);
    }

    result
}

/// Rewrites the alternate spelling `\.` of a literal default delimiter into a bare `.`
/// when `delimiter` is the escape character. Doubled escapes are left alone and every
/// other component is returned unchanged. The result is not validated.
pub fn canonical(component: &str, delimiter: char) -> String {
    if delimiter != ESCAPE_CHARACTER {
        return component.to_string();
    }

    let mut result = String::with_capacity(component.len());
    let mut chars = component.chars();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE_CHARACTER {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some(DEFAULT_DELIMITER) => result.push(DEFAULT_DELIMITER),
            Some(next) => {
                result.push(ESCAPE_CHARACTER);
                result.push(next);
            }
            None => result.push(ESCAPE_CHARACTER),
        }
    }

    result
}

/// Splits `source` at every unescaped delimiter. Components are returned masked.
pub fn split(source: &str, delimiter: char) -> Result<Vec<String>, NameError> {
    if !is_properly_masked(source, delimiter, false) {
        debug!(
            "cannot split '{}': not properly masked for delimiter '{}'",
            source, delimiter
        );
        return Err(NameError::MalformedInput(format!(
            "'{}' is not properly masked for delimiter '{}'",
            source, delimiter
        )));
    }

    Ok(scan(source, delimiter))
}

/// Splits a source that is already known to be properly masked.
pub(crate) fn scan(source: &str, delimiter: char) -> Vec<String> {
    if delimiter == ESCAPE_CHARACTER {
        return split_on_escape(source);
    }

    let mut components = Vec::new();
    let mut component = String::new();
    let mut escaped = false;

    for ch in source.chars() {
        if escaped {
            component.push(ch);
            escaped = false;
        } else if ch == ESCAPE_CHARACTER {
            component.push(ch);
            escaped = true;
        } else if ch == delimiter {
            components.push(std::mem::take(&mut component));
        } else {
            component.push(ch);
        }
    }
    components.push(component);

    components
}

// Pairwise scan: a doubled escape is one literal escape (kept masked), a single one
// is a separator.
fn split_on_escape(source: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut component = String::new();
    let mut boundary = false;

    for ch in source.chars() {
        if boundary {
            boundary = false;
            if ch == ESCAPE_CHARACTER {
                component.push(ESCAPE_CHARACTER);
                component.push(ESCAPE_CHARACTER);
                continue;
            }
            components.push(std::mem::take(&mut component));
        }

        if ch == ESCAPE_CHARACTER {
            boundary = true;
        } else {
            component.push(ch);
        }
    }

    components.push(component);
    if boundary {
        components.push(String::new());
    }

    components
}

/// Joins masked components with `delimiter`.
pub fn join<S: Borrow<str>>(components: &[S], delimiter: char) -> String {
    let mut buf = [0u8; 4];
    components.join(&*delimiter.encode_utf8(&mut buf))
}

/// Checks for dangling escapes and escapes of ordinary characters. With
/// `is_component`, an unescaped delimiter is rejected too.
pub fn is_properly_masked(source: &str, delimiter: char, is_component: bool) -> bool {
    // Pairwise splitting accepts any text.
    if delimiter == ESCAPE_CHARACTER && !is_component {
        return true;
    }

    let mut escaped = false;

    for ch in source.chars() {
        if escaped {
            if !is_escapable(ch, delimiter) {
                return false;
            }
            escaped = false;
        } else if ch == ESCAPE_CHARACTER {
            escaped = true;
        } else if is_component && ch == delimiter {
            return false;
        }
    }

    !escaped
}

/// True if masking `unmasked` gives back exactly `masked`.
pub fn is_properly_unmasked(unmasked: &str, masked: &str, delimiter: char) -> bool {
    mask(unmasked, delimiter) == masked
}
