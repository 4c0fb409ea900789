// Adapters layer: concrete implementations of the domain ports.

pub mod dog_ceo;
pub mod fixture_seed;
pub mod random_seed;

pub use dog_ceo::DogCeoClient;
pub use fixture_seed::{FixtureDog, FixtureSeedProvider};
pub use random_seed::RandomSeedProvider;
