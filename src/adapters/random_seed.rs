use crate::core::{Breed, DogId, PersonId, PhotoSource, SeedData, SeedProvider};
use crate::domain::model::{DogSeed, PersonSeed};
use crate::utils::error::{ParkError, Result};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

pub const FALLBACK_PHOTO: &str = "https://images.dog.ceo/breeds/labrador/n02099712_100.jpg";

const NAME_PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

const FIRST_NAMES: &[&str] = &[
    "Abigail", "Arlo", "Beatrice", "Boris", "Clara", "Dmitri", "Elena", "Felix", "Greta",
    "Hugo", "Ingrid", "Jasper", "Kira", "Leon", "Maya", "Nico", "Olive", "Pablo", "Quinn",
    "Rosa", "Soren", "Talia", "Uma", "Victor", "Wren", "Yusuf", "Zora",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Becker", "Castillo", "Dalton", "Eriksen", "Fischer", "Gallagher", "Hayes",
    "Ibarra", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Sandoval", "Thornton", "Vance", "Whitaker",
];

/// Random owners and dogs, with photos pulled from a [`PhotoSource`].
pub struct RandomSeedProvider<P: PhotoSource> {
    photos: P,
    people_count: usize,
    dog_count: usize,
    concurrent_requests: usize,
    rng_seed: Option<u64>,
}

impl<P: PhotoSource> RandomSeedProvider<P> {
    pub fn new(photos: P, people_count: usize, dog_count: usize) -> Self {
        Self {
            photos,
            people_count,
            dog_count,
            concurrent_requests: 5,
            rng_seed: None,
        }
    }

    pub fn with_concurrency(mut self, concurrent_requests: usize) -> Self {
        self.concurrent_requests = concurrent_requests.max(1);
        self
    }

    /// Fixes the RNG so names, breeds and owners repeat between runs.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    async fn fetch_photo(&self) -> String {
        match self.photos.random_photo().await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Photo fetch failed, using fallback image: {}", e);
                FALLBACK_PHOTO.to_string()
            }
        }
    }
}

fn pick<'a>(rng: &mut StdRng, names: &[&'a str]) -> &'a str {
    names.choose(rng).copied().unwrap_or_default()
}

#[async_trait]
impl<P: PhotoSource> SeedProvider for RandomSeedProvider<P> {
    async fn generate(&self) -> Result<SeedData> {
        if self.people_count == 0 && self.dog_count > 0 {
            return Err(ParkError::ConfigValidationError {
                field: "seed.people".to_string(),
                message: "dogs need at least one owner".to_string(),
            });
        }

        tracing::debug!(
            "Fetching {} photos with up to {} concurrent requests",
            self.dog_count,
            self.concurrent_requests
        );
        let photos: Vec<String> = stream::iter(0..self.dog_count)
            .map(|_| self.fetch_photo())
            .buffered(self.concurrent_requests)
            .collect()
            .await;

        let mut rng = self.rng();
        let people: Vec<PersonSeed> = (0..self.people_count)
            .map(|_| PersonSeed {
                id: PersonId(Uuid::new_v4().to_string()),
                first_name: pick(&mut rng, FIRST_NAMES).to_string(),
                last_name: pick(&mut rng, LAST_NAMES).to_string(),
            })
            .collect();

        let dogs = photos
            .into_iter()
            .map(|photo| {
                let breed = if rng.gen_bool(0.5) {
                    Breed::Labrador
                } else {
                    Breed::Poodle
                };
                let name = format!(
                    "{} {}",
                    pick(&mut rng, NAME_PREFIXES),
                    pick(&mut rng, FIRST_NAMES)
                );
                let owner = people[rng.gen_range(0..people.len())].id.clone();
                DogSeed {
                    id: DogId(Uuid::new_v4().to_string()),
                    name,
                    breed,
                    photo,
                    owner,
                }
            })
            .collect();

        Ok(SeedData { people, dogs })
    }
}
