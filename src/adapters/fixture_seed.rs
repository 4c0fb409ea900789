use crate::core::{Breed, DogId, PersonId, SeedData, SeedProvider};
use crate::domain::model::{DogSeed, PersonSeed};
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct FixtureDog {
    pub name: String,
    pub breed: Breed,
    /// Index into the provider's people list.
    pub owner: usize,
}

impl FixtureDog {
    pub fn new(name: &str, breed: Breed, owner: usize) -> Self {
        Self {
            name: name.to_string(),
            breed,
            owner,
        }
    }
}

/// Deterministic seed data with ids `person-N` and `dog-N` (1-based).
#[derive(Debug, Clone)]
pub struct FixtureSeedProvider {
    people: Vec<(String, String)>,
    dogs: Vec<FixtureDog>,
}

impl FixtureSeedProvider {
    pub fn new(people: Vec<(String, String)>, dogs: Vec<FixtureDog>) -> Self {
        Self { people, dogs }
    }

    /// Two owners and three dogs: dog-1 and dog-3 belong to person-1,
    /// dog-2 belongs to person-2.
    pub fn scenario() -> Self {
        Self::new(
            vec![
                ("Ada".to_string(), "Lovelace".to_string()),
                ("Alan".to_string(), "Turing".to_string()),
            ],
            vec![
                FixtureDog::new("Dr. Biscuit", Breed::Labrador, 0),
                FixtureDog::new("Mrs. Noodle", Breed::Poodle, 1),
                FixtureDog::new("Mr. Pickles", Breed::Labrador, 0),
            ],
        )
    }

    /// Fixed data of the requested size, owners assigned round-robin.
    pub fn sized(people_count: usize, dog_count: usize) -> Self {
        let people = (1..=people_count)
            .map(|n| (format!("Owner{}", n), format!("Fixture{}", n)))
            .collect();
        let dogs = (0..dog_count)
            .map(|i| FixtureDog {
                name: format!("Dog {}", i + 1),
                breed: if i % 2 == 0 { Breed::Labrador } else { Breed::Poodle },
                owner: if people_count == 0 { 0 } else { i % people_count },
            })
            .collect();
        Self::new(people, dogs)
    }

    pub fn person_id(index: usize) -> PersonId {
        PersonId(format!("person-{}", index + 1))
    }

    pub fn dog_id(index: usize) -> DogId {
        DogId(format!("dog-{}", index + 1))
    }
}

#[async_trait]
impl SeedProvider for FixtureSeedProvider {
    async fn generate(&self) -> Result<SeedData> {
        let people = self
            .people
            .iter()
            .enumerate()
            .map(|(i, (first_name, last_name))| PersonSeed {
                id: Self::person_id(i),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            })
            .collect();

        let dogs = self
            .dogs
            .iter()
            .enumerate()
            .map(|(i, dog)| {
                let breed_path = match dog.breed {
                    Breed::Labrador => "labrador",
                    Breed::Poodle => "poodle-standard",
                };
                DogSeed {
                    id: Self::dog_id(i),
                    name: dog.name.clone(),
                    breed: dog.breed,
                    photo: format!(
                        "https://images.dog.ceo/breeds/{}/fixture-{}.jpg",
                        breed_path,
                        i + 1
                    ),
                    owner: Self::person_id(dog.owner),
                }
            })
            .collect();

        Ok(SeedData { people, dogs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scenario_shape() {
        let seed = FixtureSeedProvider::scenario().generate().await.unwrap();

        assert_eq!(seed.people.len(), 2);
        assert_eq!(seed.dogs.len(), 3);
        let owners: Vec<&str> = seed.dogs.iter().map(|d| d.owner.as_str()).collect();
        assert_eq!(owners, vec!["person-1", "person-2", "person-1"]);
    }

    #[tokio::test]
    async fn test_sized_is_deterministic() {
        let first = FixtureSeedProvider::sized(3, 7).generate().await.unwrap();
        let second = FixtureSeedProvider::sized(3, 7).generate().await.unwrap();

        let ids = |seed: &SeedData| -> Vec<String> {
            seed.dogs
                .iter()
                .map(|d| format!("{}:{}:{}", d.id, d.owner, d.photo))
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.dogs[3].owner.as_str(), "person-1");
    }
}
