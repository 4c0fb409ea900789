pub mod seeder;
pub mod store;

pub use crate::domain::model::{Breed, Dog, DogId, Person, PersonId, SeedData};
pub use crate::domain::ports::{ConfigProvider, PhotoSource, SeedProvider};
pub use crate::utils::error::Result;
pub use store::{EntityStore, SharedStore};
