//! The [`PetStore`] trait defining the storage contract for pets.
//!
//! The trait is synchronous. Callers that share a store across tasks wrap
//! the owner in a mutex; implementations need no interior locking.

use petstore_core::{Pet, PetId, StatusFilter, TagFilter};

use crate::error::StorageError;

/// The storage contract for pet records.
pub trait PetStore {
    /// Inserts or overwrites the pet keyed by its id.
    ///
    /// Returns the record that was replaced, if any.
    fn put_pet(&mut self, pet: Pet) -> Result<Option<Pet>, StorageError>;

    /// Retrieves a pet by id.
    fn get_pet(&self, id: PetId) -> Result<Pet, StorageError>;

    /// Lists every stored pet in store order.
    fn list_pets(&self) -> Result<Vec<Pet>, StorageError>;

    /// Finds pets whose status is in the filter.
    fn find_pets_by_status(&self, filter: &StatusFilter) -> Result<Vec<Pet>, StorageError> {
        Ok(self
            .list_pets()?
            .into_iter()
            .filter(|pet| filter.matches(pet))
            .collect())
    }

    /// Finds pets carrying at least one of the filter's tags.
    fn find_pets_by_tags(&self, filter: &TagFilter) -> Result<Vec<Pet>, StorageError> {
        Ok(self
            .list_pets()?
            .into_iter()
            .filter(|pet| filter.matches(pet))
            .collect())
    }

    /// Number of stored pets.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
