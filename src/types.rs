use serde::{Deserialize, Serialize};

/// Serialized form shared by every name representation. Components are stored masked
/// under `delimiter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub delimiter: String,
    pub components: Vec<String>,
}
