//! Sample pets a new store can be populated with.

use petstore_core::{Pet, PetStatus};

const PHOTO_URLS: [&str; 2] = ["url1", "url2"];

/// The ten demo pets across four categories.
///
/// Each pet carries two adjacent tags out of `tag1`..`tag4`, so every tag
/// filter used in manual testing returns a non-trivial subset.
pub fn sample_pets() -> Vec<Pet> {
    use PetStatus::{Available, Pending, Sold};

    let rows: [(i64, (i64, &str), &str, [&str; 2], PetStatus); 10] = [
        (1, (2, "Cats"), "Cat 1", ["tag1", "tag2"], Available),
        (2, (2, "Cats"), "Cat 2", ["tag2", "tag3"], Available),
        (3, (2, "Cats"), "Cat 3", ["tag3", "tag4"], Pending),
        (4, (1, "Dogs"), "Dog 1", ["tag1", "tag2"], Available),
        (5, (1, "Dogs"), "Dog 2", ["tag2", "tag3"], Sold),
        (6, (1, "Dogs"), "Dog 3", ["tag3", "tag4"], Pending),
        (7, (4, "Lions"), "Lion 1", ["tag1", "tag2"], Available),
        (8, (4, "Lions"), "Lion 2", ["tag2", "tag3"], Available),
        (9, (4, "Lions"), "Lion 3", ["tag3", "tag4"], Available),
        (10, (3, "Rabbits"), "Rabbit 1", ["tag3", "tag4"], Available),
    ];

    rows.into_iter()
        .map(|(id, (category_id, category), name, tags, status)| {
            PHOTO_URLS
                .iter()
                .fold(Pet::new(id, name), |pet, url| pet.with_photo_url(*url))
                .with_category(category_id, category)
                .with_tags(tags)
                .with_status(status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique_and_valid() {
        let pets = sample_pets();
        assert_eq!(pets.len(), 10);
        for (index, pet) in pets.iter().enumerate() {
            assert_eq!(pet.id.0, index as i64 + 1);
            assert!(pet.validate().is_ok());
            assert_eq!(pet.tags.len(), 2);
        }
    }
}
