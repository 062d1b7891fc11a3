//! PetService: the single coordinator between HTTP handlers and the store.
//!
//! Handlers parse requests and delegate here; lookup policy and validation
//! live in [`PetService`], storage details behind [`PetStore`].

use std::fmt;
use std::str::FromStr;

use petstore_core::{Pet, PetId, StatusFilter, TagFilter};
use petstore_storage::{InMemoryStore, PetStore, StorageError};

use crate::error::ApiError;

/// What `get_pet` returns for an id with no stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Synthesize a pet named "dog" with the requested id.
    #[default]
    Placeholder,
    /// Report the id as not found.
    Strict,
}

impl LookupMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupMode::Placeholder => "placeholder",
            LookupMode::Strict => "strict",
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "placeholder" => Ok(LookupMode::Placeholder),
            "strict" => Ok(LookupMode::Strict),
            other => Err(format!("unknown lookup mode '{other}'")),
        }
    }
}

/// Pet operations over an owned, injectable store.
pub struct PetService {
    store: Box<dyn PetStore + Send>,
    lookup: LookupMode,
}

impl PetService {
    /// Creates a service over the given store.
    pub fn new(store: impl PetStore + Send + 'static, lookup: LookupMode) -> Self {
        PetService {
            store: Box::new(store),
            lookup,
        }
    }

    /// Creates a service over an empty in-memory store.
    pub fn in_memory(lookup: LookupMode) -> Self {
        PetService::new(InMemoryStore::new(), lookup)
    }

    /// Fetches a pet, applying the lookup mode on a miss.
    pub fn get_pet(&self, id: PetId) -> Result<Pet, ApiError> {
        match self.store.get_pet(id) {
            Ok(pet) => Ok(pet),
            Err(StorageError::PetNotFound(_)) if self.lookup == LookupMode::Placeholder => {
                tracing::debug!(pet_id = %id, "no stored pet, returning placeholder");
                Ok(Pet::placeholder(id))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Validates and stores a pet, overwriting any record with the same id.
    ///
    /// Returns `true` when an existing record was replaced.
    pub fn put_pet(&mut self, pet: Pet) -> Result<bool, ApiError> {
        pet.validate()?;
        let id = pet.id;
        let replaced = self.store.put_pet(pet)?.is_some();
        tracing::info!(pet_id = %id, replaced, "stored pet");
        Ok(replaced)
    }

    pub fn find_by_status(&self, filter: &StatusFilter) -> Result<Vec<Pet>, ApiError> {
        Ok(self.store.find_pets_by_status(filter)?)
    }

    pub fn find_by_tags(&self, filter: &TagFilter) -> Result<Vec<Pet>, ApiError> {
        Ok(self.store.find_pets_by_tags(filter)?)
    }

    /// Number of stored pets.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
