use std::fmt;

use crate::{
    error::NameError,
    parser::{self, DEFAULT_DELIMITER},
    utils,
};

/// An ordered sequence of masked components joined by a single delimiter.
///
/// Names are values: mutators take `&self` and return a new name, leaving the receiver
/// untouched. Accessors hand out owned copies of the masked components.
///
/// Every component passed in must be properly masked under the name's delimiter, i.e.
/// literal delimiters and escape characters are prefixed with
/// [`ESCAPE_CHARACTER`](crate::ESCAPE_CHARACTER).
pub trait Name: fmt::Debug {
    fn delimiter(&self) -> char;

    fn no_components(&self) -> usize;

    /// Masked component at `i`, for `i` in `0..no_components()`.
    fn component(&self, i: usize) -> Result<String, NameError>;

    /// All masked components, in order.
    fn components(&self) -> Vec<String>;

    /// Replaces the component at `i`, for `i` in `0..no_components()`.
    fn set_component(&self, i: usize, c: &str) -> Result<Self, NameError>
    where
        Self: Sized;

    /// Inserts a component so it ends up at `i`, for `i` in `0..=no_components()`.
    fn insert(&self, i: usize, c: &str) -> Result<Self, NameError>
    where
        Self: Sized;

    fn append(&self, c: &str) -> Result<Self, NameError>
    where
        Self: Sized,
    {
        self.insert(self.no_components(), c)
    }

    /// Removes the component at `i`. Fails on an empty name, which has no valid index.
    fn remove(&self, i: usize) -> Result<Self, NameError>
    where
        Self: Sized;

    /// Appends every component of `other`, remasked from its delimiter to ours.
    fn concat(&self, other: &dyn Name) -> Result<Self, NameError>
    where
        Self: Sized;

    fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// Human-readable form: unmasked components joined by the name's own delimiter.
    fn as_string(&self) -> String {
        self.as_string_with(self.delimiter())
    }

    /// Unmasked components joined by `delimiter`. Not meant to be parsed back.
    fn as_string_with(&self, delimiter: char) -> String {
        let unmasked: Vec<String> = self
            .components()
            .iter()
            .map(|c| parser::unescape(c))
            .collect();
        parser::join(&unmasked, delimiter)
    }

    /// Canonical form: components remasked to the default delimiter and joined by it.
    fn as_data_string(&self) -> String {
        let data: Vec<String> = self
            .components()
            .iter()
            .map(|c| parser::transcode(c, DEFAULT_DELIMITER))
            .collect();
        parser::join(&data, DEFAULT_DELIMITER)
    }

    fn is_equal(&self, other: &dyn Name) -> bool {
        self.delimiter() == other.delimiter()
            && self.no_components() == other.no_components()
            && self.as_data_string() == other.as_data_string()
    }

    fn hash_code(&self) -> i32 {
        utils::hash_code(&self.as_data_string())
    }
}

/// Remasks the components of `other` for a name delimited by `delimiter`.
pub(crate) fn remasked_components(
    other: &dyn Name,
    delimiter: char,
) -> Result<Vec<String>, NameError> {
    let from = other.delimiter();
    other
        .components()
        .iter()
        .map(|c| {
            let remasked =
                parser::remask(c, delimiter, from).map_err(NameError::into_argument_error)?;
            crate::contract::masked_argument(&remasked, delimiter)
        })
        .collect()
}

/// Implements the std traits every name representation shares.
macro_rules! impl_name_traits {
    ($name:ident) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::name::Name::is_equal(self, other)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::name::Name::hash_code(self));
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::name::Name::as_data_string(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::NameError;

            fn from_str(data: &str) -> Result<Self, Self::Err> {
                Self::from_data_string(data)
            }
        }

        impl From<$name> for $crate::types::NameRecord {
            fn from(name: $name) -> Self {
                $crate::types::NameRecord {
                    delimiter: $crate::name::Name::delimiter(&name).to_string(),
                    components: $crate::name::Name::components(&name),
                }
            }
        }

        impl TryFrom<$crate::types::NameRecord> for $name {
            type Error = $crate::error::NameError;

            fn try_from(record: $crate::types::NameRecord) -> Result<Self, Self::Error> {
                let delimiter = $crate::parser::delimiter_from_str(&record.delimiter)?;
                Self::from_components(&record.components, delimiter)
            }
        }
    };
}

pub(crate) use impl_name_traits;
