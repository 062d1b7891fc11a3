//! In-memory implementation of [`PetStore`].
//!
//! [`InMemoryStore`] keeps pets in an `IndexMap` so listings come back in
//! first-insert order. Overwriting an id keeps its original position.

use indexmap::IndexMap;

use petstore_core::{Pet, PetId, StatusFilter, TagFilter};

use crate::error::StorageError;
use crate::traits::PetStore;

/// Process-lifetime pet collection with no persistence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pets: IndexMap<PetId, Pet>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Creates a store holding the given pets, later ids overwriting earlier.
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        InMemoryStore {
            pets: pets.into_iter().map(|pet| (pet.id, pet)).collect(),
        }
    }

    fn collect_matching(&self, predicate: impl Fn(&Pet) -> bool) -> Vec<Pet> {
        self.pets
            .values()
            .filter(|pet| predicate(pet))
            .cloned()
            .collect()
    }
}

impl PetStore for InMemoryStore {
    fn put_pet(&mut self, pet: Pet) -> Result<Option<Pet>, StorageError> {
        Ok(self.pets.insert(pet.id, pet))
    }

    fn get_pet(&self, id: PetId) -> Result<Pet, StorageError> {
        self.pets
            .get(&id)
            .cloned()
            .ok_or(StorageError::PetNotFound(id))
    }

    fn list_pets(&self) -> Result<Vec<Pet>, StorageError> {
        Ok(self.pets.values().cloned().collect())
    }

    fn find_pets_by_status(&self, filter: &StatusFilter) -> Result<Vec<Pet>, StorageError> {
        Ok(self.collect_matching(|pet| filter.matches(pet)))
    }

    fn find_pets_by_tags(&self, filter: &TagFilter) -> Result<Vec<Pet>, StorageError> {
        Ok(self.collect_matching(|pet| filter.matches(pet)))
    }

    fn len(&self) -> usize {
        self.pets.len()
    }
}
