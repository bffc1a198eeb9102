use serde::{Deserialize, Serialize};

/// A tag for a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Tag ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
