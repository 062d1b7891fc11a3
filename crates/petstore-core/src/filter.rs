//! Comma-separated query filters for the find endpoints.
//!
//! Both filters split on `,`, trim each entry, and skip blank entries.
//! [`StatusFilter`] falls back to `available` when nothing is given;
//! [`TagFilter`] requires at least one tag.

use smallvec::SmallVec;

use crate::error::CoreError;
use crate::model::{Pet, PetStatus};

/// Set of statuses a pet must be in to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    statuses: SmallVec<[PetStatus; 3]>,
}

impl StatusFilter {
    /// Parses a raw `status` query value.
    ///
    /// `None`, an empty string, or only blank entries yield the default
    /// filter (`available`). Any unknown entry is an error.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let mut statuses: SmallVec<[PetStatus; 3]> = SmallVec::new();
        for entry in split_entries(raw.unwrap_or_default()) {
            let status = entry.parse::<PetStatus>()?;
            if !statuses.contains(&status) {
                statuses.push(status);
            }
        }
        if statuses.is_empty() {
            return Ok(StatusFilter::default());
        }
        Ok(StatusFilter { statuses })
    }

    pub fn statuses(&self) -> &[PetStatus] {
        &self.statuses
    }

    pub fn matches(&self, pet: &Pet) -> bool {
        self.statuses.contains(&pet.status)
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        let mut statuses = SmallVec::new();
        statuses.push(PetStatus::Available);
        StatusFilter { statuses }
    }
}

/// Set of tag names; a pet matches when it carries any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    /// Parses a raw `tags` query value.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let raw = raw.ok_or_else(|| CoreError::InvalidTag {
            reason: "the tags parameter is required".to_string(),
        })?;
        let mut tags: Vec<String> = Vec::new();
        for entry in split_entries(raw) {
            if !tags.iter().any(|t| t == entry) {
                tags.push(entry.to_string());
            }
        }
        if tags.is_empty() {
            return Err(CoreError::InvalidTag {
                reason: format!("no tag names in '{raw}'"),
            });
        }
        Ok(TagFilter { tags })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn matches(&self, pet: &Pet) -> bool {
        self.tags.iter().any(|tag| pet.has_tag(tag))
    }
}

fn split_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}
