use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    contract,
    error::NameError,
    name::{impl_name_traits, remasked_components, Name},
    parser::{self, DEFAULT_DELIMITER, ESCAPE_CHARACTER},
    string_array_name::StringArrayName,
    types::NameRecord,
};

/// Delimiter the joined string is kept under.
///
/// Pairwise splitting on the escape character cannot tell an empty interior component
/// or a component starting with an escaped escape from a literal, so names delimited by
/// the escape character keep their string under the default delimiter instead.
fn storage_delimiter(delimiter: char) -> char {
    if delimiter == ESCAPE_CHARACTER {
        DEFAULT_DELIMITER
    } else {
        delimiter
    }
}

/// Name backed by a single joined, masked string.
///
/// Every access splits the string and every mutation joins it back, so operations cost
/// time proportional to the length of the name.
///
/// A name delimited by the escape character keeps its string under the default
/// delimiter, remasking components on the way in and out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NameRecord", into = "NameRecord")]
pub struct StringName {
    delimiter: char,
    name: String,
    // An empty string is either no component or one empty component.
    no_components: usize,
}

impl StringName {
    /// Splits `source`, masked under `delimiter`, into a new name.
    pub fn new(source: &str, delimiter: char) -> Result<Self, NameError> {
        let components =
            parser::split(source, delimiter).map_err(NameError::into_argument_error)?;
        Self::from_components(components, delimiter)
    }

    /// Builds a name from components masked under `delimiter`.
    pub fn from_components<I, S>(components: I, delimiter: char) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = components
            .into_iter()
            .map(|c| contract::masked_argument(c.as_ref(), delimiter))
            .collect::<Result<Vec<_>, _>>()?;

        let name = Self::from_masked(delimiter, &components);
        name.check_invariants()?;
        Ok(name)
    }

    /// Parses a data string; the result uses the default delimiter.
    pub fn from_data_string(data: &str) -> Result<Self, NameError> {
        Self::new(data, DEFAULT_DELIMITER)
    }

    pub fn empty(delimiter: char) -> Self {
        Self {
            delimiter,
            name: String::new(),
            no_components: 0,
        }
    }

    // Components must already be canonical under `delimiter`.
    fn from_masked(delimiter: char, components: &[String]) -> Self {
        let storage = storage_delimiter(delimiter);
        let name = if storage == delimiter {
            parser::join(components, storage)
        } else {
            let stored: Vec<String> = components
                .iter()
                .map(|c| parser::transcode(c, storage))
                .collect();
            parser::join(&stored, storage)
        };

        Self {
            delimiter,
            name,
            no_components: components.len(),
        }
    }

    fn check_invariants(&self) -> Result<(), NameError> {
        let storage = storage_delimiter(self.delimiter);
        contract::ensure_state(parser::is_properly_masked(&self.name, storage, false), || {
            format!(
                "stored name '{}' is not properly masked for delimiter '{}'",
                self.name, storage
            )
        })?;

        let stored = if self.no_components == 0 {
            contract::ensure_state(self.name.is_empty(), || {
                format!("name '{}' has text but no components", self.name)
            })?;
            0
        } else {
            parser::scan(&self.name, storage).len()
        };
        contract::ensure_state(stored == self.no_components, || {
            format!(
                "name '{}' holds {} components but counts {}",
                self.name, stored, self.no_components
            )
        })?;

        contract::ensure_stored_components(&self.components(), self.delimiter)
    }
}

impl Default for StringName {
    fn default() -> Self {
        Self::empty(DEFAULT_DELIMITER)
    }
}

impl Name for StringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.no_components
    }

    fn component(&self, i: usize) -> Result<String, NameError> {
        contract::ensure_index(i, self.no_components)?;
        let count = self.no_components;
        self.components().into_iter().nth(i).ok_or_else(|| {
            NameError::InvalidState(format!(
                "component {} missing from name with {} components",
                i, count
            ))
        })
    }

    fn components(&self) -> Vec<String> {
        if self.no_components == 0 {
            return Vec::new();
        }

        let storage = storage_delimiter(self.delimiter);
        let components = parser::scan(&self.name, storage);
        if storage == self.delimiter {
            components
        } else {
            components
                .iter()
                .map(|c| parser::transcode(c, self.delimiter))
                .collect()
        }
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self, NameError> {
        self.check_invariants()?;
        contract::ensure_index(i, self.no_components)?;
        let c = contract::masked_argument(c, self.delimiter)?;

        let mut components = self.components();
        components[i] = c.clone();
        let result = Self::from_masked(self.delimiter, &components);

        result.check_invariants()?;
        contract::ensure_count("set_component", self.no_components, result.no_components)?;
        contract::ensure_component_at("set_component", i, &c, &result.component(i)?)?;
        trace!("set component {} of '{}' to '{}'", i, self, c);
        Ok(result)
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self, NameError> {
        self.check_invariants()?;
        contract::ensure_insert_index(i, self.no_components)?;
        let c = contract::masked_argument(c, self.delimiter)?;

        let mut components = self.components();
        components.insert(i, c.clone());
        let result = Self::from_masked(self.delimiter, &components);

        result.check_invariants()?;
        contract::ensure_count("insert", self.no_components + 1, result.no_components)?;
        contract::ensure_component_at("insert", i, &c, &result.component(i)?)?;
        trace!("inserted '{}' at {} of '{}'", c, i, self);
        Ok(result)
    }

    fn remove(&self, i: usize) -> Result<Self, NameError> {
        self.check_invariants()?;
        contract::ensure_index(i, self.no_components)?;

        let mut components = self.components();
        let removed = components.remove(i);
        let result = Self::from_masked(self.delimiter, &components);

        result.check_invariants()?;
        contract::ensure_count("remove", self.no_components - 1, result.no_components)?;
        trace!("removed '{}' at {} of '{}'", removed, i, self);
        Ok(result)
    }

    fn concat(&self, other: &dyn Name) -> Result<Self, NameError> {
        self.check_invariants()?;
        let appended = remasked_components(other, self.delimiter)?;

        let mut components = self.components();
        components.extend(appended);
        let result = Self::from_masked(self.delimiter, &components);

        result.check_invariants()?;
        contract::ensure_count(
            "concat",
            self.no_components + other.no_components(),
            result.no_components,
        )?;
        trace!("concatenated '{}' onto '{}'", other.as_data_string(), self);
        Ok(result)
    }
}

impl_name_traits!(StringName);

impl PartialEq<StringArrayName> for StringName {
    fn eq(&self, other: &StringArrayName) -> bool {
        self.is_equal(other)
    }
}

impl From<&StringArrayName> for StringName {
    fn from(name: &StringArrayName) -> Self {
        Self::from_masked(name.delimiter(), &name.components())
    }
}

impl From<StringArrayName> for StringName {
    fn from(name: StringArrayName) -> Self {
        Self::from(&name)
    }
}
