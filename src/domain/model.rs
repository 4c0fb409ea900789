use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DogId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DogId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breed {
    Labrador,
    Poodle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    /// Back-references in the order the dogs were assigned.
    pub dogs: Vec<DogId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub breed: Breed,
    pub photo: String,
    pub likes: u32,
    pub owner: PersonId,
}

/// Everything a seed provider hands to the store at startup.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub people: Vec<PersonSeed>,
    pub dogs: Vec<DogSeed>,
}

#[derive(Debug, Clone)]
pub struct PersonSeed {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct DogSeed {
    pub id: DogId,
    pub name: String,
    pub breed: Breed,
    pub photo: String,
    pub owner: PersonId,
}
