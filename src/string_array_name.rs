use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    contract,
    error::NameError,
    name::{impl_name_traits, remasked_components, Name},
    parser::{self, DEFAULT_DELIMITER},
    string_name::StringName,
    types::NameRecord,
};

/// Name backed by a vector of masked components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NameRecord", into = "NameRecord")]
pub struct StringArrayName {
    delimiter: char,
    components: Vec<String>,
}

impl StringArrayName {
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

        let name = Self {
            delimiter,
            components,
        };
        name.check_invariants()?;
        Ok(name)
    }

    /// Splits `source`, masked under `delimiter`, into a new name.
    pub fn parse(source: &str, delimiter: char) -> Result<Self, NameError> {
        let components =
            parser::split(source, delimiter).map_err(NameError::into_argument_error)?;
        Self::from_components(components, delimiter)
    }

    /// Parses a data string; the result uses the default delimiter.
    pub fn from_data_string(data: &str) -> Result<Self, NameError> {
        Self::parse(data, DEFAULT_DELIMITER)
    }

    pub fn empty(delimiter: char) -> Self {
        Self {
            delimiter,
            components: Vec::new(),
        }
    }

    fn with_components(&self, components: Vec<String>) -> Self {
        Self {
            delimiter: self.delimiter,
            components,
        }
    }

    fn check_invariants(&self) -> Result<(), NameError> {
        contract::ensure_stored_components(&self.components, self.delimiter)
    }
}

impl Default for StringArrayName {
    fn default() -> Self {
        Self::empty(DEFAULT_DELIMITER)
    }
}

impl Name for StringArrayName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.components.len()
    }

    fn component(&self, i: usize) -> Result<String, NameError> {
        contract::ensure_index(i, self.components.len())?;
        Ok(self.components[i].clone())
    }

    fn components(&self) -> Vec<String> {
        self.components.clone()
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self, NameError> {
        self.check_invariants()?;
        contract::ensure_index(i, self.components.len())?;
        let c = contract::masked_argument(c, self.delimiter)?;

        let mut components = self.components.clone();
        components[i] = c.clone();
        let result = self.with_components(components);

        result.check_invariants()?;
        contract::ensure_count("set_component", self.no_components(), result.no_components())?;
        contract::ensure_component_at("set_component", i, &c, &result.components[i])?;
        trace!("set component {} of '{}' to '{}'", i, self, c);
        Ok(result)
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self, NameError> {
        self.check_invariants()?;
        contract::ensure_insert_index(i, self.components.len())?;
        let c = contract::masked_argument(c, self.delimiter)?;

        let mut components = self.components.clone();
        components.insert(i, c.clone());
        let result = self.with_components(components);

        result.check_invariants()?;
        contract::ensure_count("insert", self.no_components() + 1, result.no_components())?;
        contract::ensure_component_at("insert", i, &c, &result.components[i])?;
        trace!("inserted '{}' at {} of '{}'", c, i, self);
        Ok(result)
    }

    fn append(&self, c: &str) -> Result<Self, NameError> {
        self.check_invariants()?;
        let c = contract::masked_argument(c, self.delimiter)?;

        let mut components = Vec::with_capacity(self.components.len() + 1);
        components.extend_from_slice(&self.components);
        components.push(c.clone());
        let result = self.with_components(components);

        result.check_invariants()?;
        contract::ensure_count("append", self.no_components() + 1, result.no_components())?;
        let last = self.no_components();
        contract::ensure_component_at("append", last, &c, &result.components[last])?;
        trace!("appended '{}' to '{}'", c, self);
        Ok(result)
    }

    fn remove(&self, i: usize) -> Result<Self, NameError> {
        self.check_invariants()?;
        contract::ensure_index(i, self.components.len())?;

        let mut components = self.components.clone();
        let removed = components.remove(i);
        let result = self.with_components(components);

        result.check_invariants()?;
        contract::ensure_count("remove", self.no_components() - 1, result.no_components())?;
        trace!("removed '{}' at {} of '{}'", removed, i, self);
        Ok(result)
    }

    fn concat(&self, other: &dyn Name) -> Result<Self, NameError> {
        self.check_invariants()?;
        let appended = remasked_components(other, self.delimiter)?;

        let mut components = self.components.clone();
        components.extend(appended);
        let result = self.with_components(components);

        result.check_invariants()?;
        contract::ensure_count(
            "concat",
            self.no_components() + other.no_components(),
            result.no_components(),
        )?;
        trace!("concatenated '{}' onto '{}'", other.as_data_string(), self);
        Ok(result)
    }
}

impl_name_traits!(StringArrayName);

impl PartialEq<StringName> for StringArrayName {
    fn eq(&self, other: &StringName) -> bool {
        self.is_equal(other)
    }
}

impl From<&StringName> for StringArrayName {
    fn from(name: &StringName) -> Self {
        Self {
            delimiter: name.delimiter(),
            components: name.components(),
        }
    }
}

impl From<StringName> for StringArrayName {
    fn from(name: StringName) -> Self {
        Self::from(&name)
    }
}
