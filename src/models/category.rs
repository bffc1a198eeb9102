use serde::{Deserialize, Serialize};

/// A category for a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
