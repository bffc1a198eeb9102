//! Pet model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Category, Tag};

/// The status of a pet in the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Available for sale.
    Available,
    /// Sale pending.
    Pending,
    /// Sold.
    Sold,
}

impl PetStatus {
    /// Returns the wire name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pet in the store.
///
/// `name` and `photo_urls` are required by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Server-assigned pet ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The pet's category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// The pet's name.
    pub name: String,

    /// Photo URLs.
    #[serde(default)]
    pub photo_urls: Vec<String>,

    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Pet status in the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl Pet {
    /// Creates a pet with the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, photo_urls: Vec<String>) -> Self {
        Self {
            name: name.into(),
            photo_urls,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pet_serializes_wire_names() {
        let pet = Pet {
            id: Some(7),
            category: Some(Category {
                id: Some(1),
                name: Some("Dogs".to_string()),
            }),
            status: Some(PetStatus::Available),
            ..Pet::new("doggie", vec!["http://example.com/dog.png".to_string()])
        };

        assert_eq!(
            serde_json::to_value(&pet).unwrap(),
            json!({
                "id": 7,
                "category": {"id": 1, "name": "Dogs"},
                "name": "doggie",
                "photoUrls": ["http://example.com/dog.png"],
                "status": "available"
            })
        );
    }

    #[test]
    fn test_pet_deserializes_with_tags() {
        let pet: Pet = serde_json::from_value(json!({
            "id": 1,
            "name": "Rex",
            "photoUrls": [],
            "tags": [{"id": 2, "name": "friendly"}],
            "status": "sold"
        }))
        .unwrap();

        assert_eq!(pet.tags.len(), 1);
        assert_eq!(pet.tags[0].name.as_deref(), Some("friendly"));
        assert_eq!(pet.status, Some(PetStatus::Sold));
    }

    #[test]
    fn test_pet_requires_name() {
        let result: Result<Pet, _> = serde_json::from_value(json!({"photoUrls": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_display_matches_wire_name() {
        assert_eq!(PetStatus::Pending.to_string(), "pending");
        assert_eq!(
            serde_json::to_value(PetStatus::Pending).unwrap(),
            json!(PetStatus::Pending.as_str())
        );
    }
}
