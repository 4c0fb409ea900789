use crate::domain::model::{Dog, DogId, DogSeed, Person, PersonId, PersonSeed, SeedData};
use crate::utils::error::{EntityKind, ParkError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide handle to the store. Mutations take the write guard, so a
/// like is a single read-modify-write.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// In-memory arena of people and dogs.
///
/// Entities are kept in insertion order; each collection has an id index
/// pointing at the arena slot. Ownership is stored as ids on both sides
/// (`Dog::owner` and `Person::dogs`), so navigation is an index lookup.
#[derive(Debug, Default)]
pub struct EntityStore {
    people: Vec<Person>,
    dogs: Vec<Dog>,
    person_index: HashMap<PersonId, usize>,
    dog_index: HashMap<DogId, usize>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Builds a store from seed data. People are inserted first, then each
    /// dog is appended to its owner's `dogs` in seed order.
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        let mut store = Self::new();
        for person in seed.people {
            store.insert_person(person)?;
        }
        for dog in seed.dogs {
            store.insert_dog(dog)?;
        }
        store.check_links()?;
        Ok(store)
    }

    fn insert_person(&mut self, seed: PersonSeed) -> Result<()> {
        if self.person_index.contains_key(&seed.id) {
            return Err(ParkError::DuplicateId {
                kind: EntityKind::Person,
                id: seed.id.0,
            });
        }

        self.person_index.insert(seed.id.clone(), self.people.len());
        self.people.push(Person {
            id: seed.id,
            first_name: seed.first_name,
            last_name: seed.last_name,
            dogs: Vec::new(),
        });
        Ok(())
    }

    fn insert_dog(&mut self, seed: DogSeed) -> Result<()> {
        if self.dog_index.contains_key(&seed.id) {
            return Err(ParkError::DuplicateId {
                kind: EntityKind::Dog,
                id: seed.id.0,
            });
        }
        let owner_slot =
            *self
                .person_index
                .get(&seed.owner)
                .ok_or_else(|| ParkError::UnknownOwner {
                    dog: seed.id.0.clone(),
                    owner: seed.owner.0.clone(),
                })?;

        self.people[owner_slot].dogs.push(seed.id.clone());
        self.dog_index.insert(seed.id.clone(), self.dogs.len());
        self.dogs.push(Dog {
            id: seed.id,
            name: seed.name,
            breed: seed.breed,
            photo: seed.photo,
            likes: 0,
            owner: seed.owner,
        });
        Ok(())
    }

    pub fn list_people(&self) -> &[Person] {
        &self.people
    }

    pub fn find_person(&self, id: &str) -> Option<&Person> {
        self.person_slot(id).map(|slot| &self.people[slot])
    }

    pub fn list_dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn find_dog(&self, id: &str) -> Option<&Dog> {
        self.dog_slot(id).map(|slot| &self.dogs[slot])
    }

    pub fn owner_of(&self, dog: &Dog) -> Option<&Person> {
        self.find_person(dog.owner.as_str())
    }

    pub fn dogs_of(&self, person: &Person) -> Vec<&Dog> {
        person
            .dogs
            .iter()
            .filter_map(|id| self.find_dog(id.as_str()))
            .collect()
    }

    /// Updates the supplied name parts. `None` and empty strings leave the
    /// field as it was.
    pub fn rename_person(
        &mut self,
        id: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<&Person> {
        let slot = self
            .person_slot(id)
            .ok_or_else(|| ParkError::not_found(EntityKind::Person, id))?;
        let person = &mut self.people[slot];

        if let Some(first_name) = first_name.filter(|name| !name.is_empty()) {
            person.first_name = first_name;
        }
        if let Some(last_name) = last_name.filter(|name| !name.is_empty()) {
            person.last_name = last_name;
        }

        tracing::debug!(person = %person.id, "renamed person");
        Ok(&*person)
    }

    pub fn rename_dog(&mut self, id: &str, name: String) -> Result<&Dog> {
        let slot = self
            .dog_slot(id)
            .ok_or_else(|| ParkError::not_found(EntityKind::Dog, id))?;
        let dog = &mut self.dogs[slot];
        dog.name = name;

        tracing::debug!(dog = %dog.id, "renamed dog");
        Ok(&*dog)
    }

    /// Adds one like. Callers serialise access through `&mut self`.
    pub fn like_dog(&mut self, id: &str) -> Result<&Dog> {
        let slot = self
            .dog_slot(id)
            .ok_or_else(|| ParkError::not_found(EntityKind::Dog, id))?;
        let dog = &mut self.dogs[slot];
        dog.likes = dog.likes.saturating_add(1);

        tracing::debug!(dog = %dog.id, likes = dog.likes, "liked dog");
        Ok(&*dog)
    }

    /// Verifies that ownership links agree in both directions.
    pub fn check_links(&self) -> Result<()> {
        for dog in &self.dogs {
            let owner = self.owner_of(dog).ok_or_else(|| ParkError::UnknownOwner {
                dog: dog.id.0.clone(),
                owner: dog.owner.0.clone(),
            })?;
            let listed = owner.dogs.iter().filter(|id| **id == dog.id).count();
            if listed != 1 {
                return Err(ParkError::BrokenLink {
                    dog: dog.id.0.clone(),
                    reason: format!("listed {} times by owner {}", listed, owner.id),
                });
            }
        }

        for person in &self.people {
            for dog_id in &person.dogs {
                match self.find_dog(dog_id.as_str()) {
                    Some(dog) if dog.owner == person.id => {}
                    Some(dog) => {
                        return Err(ParkError::BrokenLink {
                            dog: dog_id.0.clone(),
                            reason: format!(
                                "listed by {} but owned by {}",
                                person.id, dog.owner
                            ),
                        })
                    }
                    None => {
                        return Err(ParkError::BrokenLink {
                            dog: dog_id.0.clone(),
                            reason: format!("listed by {} but not stored", person.id),
                        })
                    }
                }
            }
        }

        Ok(())
    }

    fn person_slot(&self, id: &str) -> Option<usize> {
        self.person_index.get(&PersonId(id.to_string())).copied()
    }

    fn dog_slot(&self, id: &str) -> Option<usize> {
        self.dog_index.get(&DogId(id.to_string())).copied()
    }
}
