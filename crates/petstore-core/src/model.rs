//! The [`Pet`] record and the value types it is built from.
//!
//! Only `id` and `name` are required on the wire. Every other field has a
//! serde default so a minimal `{"id":1,"name":"rex"}` body is a valid pet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::PetId;

/// Name given to pets synthesized for ids that have no stored record.
pub const PLACEHOLDER_NAME: &str = "dog";

/// Lifecycle status of a pet in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    #[default]
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    /// All statuses in declaration order.
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| CoreError::InvalidStatus {
                value: value.to_string(),
            })
    }
}

/// Grouping a pet belongs to (e.g. "Dogs").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// Free-form label attached to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// A pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Caller-assigned identifier. Not checked for uniqueness.
    pub id: PetId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub status: PetStatus,
}

impl Pet {
    /// Creates an available pet with no category, photos, or tags.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Pet {
            id: PetId(id),
            name: name.into(),
            category: None,
            photo_urls: Vec::new(),
            tags: Vec::new(),
            status: PetStatus::Available,
        }
    }

    /// The stand-in record returned for an id with nothing stored.
    pub fn placeholder(id: PetId) -> Self {
        Pet::new(id.0, PLACEHOLDER_NAME)
    }

    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        self.category = Some(Category {
            id,
            name: name.into(),
        });
        self
    }

    /// Appends tags by name, numbering them in order from 1.
    pub fn with_tags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let id = self.tags.len() as i64 + 1;
            self.tags.push(Tag {
                id,
                name: name.into(),
            });
        }
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_urls.push(url.into());
        self
    }

    /// Whether any of this pet's tags has exactly the given name.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    /// Checks the invariants a stored pet must satisfy.
    ///
    /// The name must contain at least one non-whitespace character.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidPet {
                reason: format!("pet {} has a blank name", self.id),
            });
        }
        Ok(())
    }
}
