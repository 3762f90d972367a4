#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod contract;

pub mod error;
pub use error::NameError;

pub mod parser;
pub use parser::{DEFAULT_DELIMITER, ESCAPE_CHARACTER};

pub mod name;
pub use name::Name;

mod string_array_name;
pub use string_array_name::StringArrayName;

mod string_name;
pub use string_name::StringName;

pub mod types;

mod utils;
pub use utils::hash_code;
