use crate::core::store::EntityStore;
use crate::core::SeedProvider;
use crate::utils::error::Result;

pub struct Seeder<P: SeedProvider> {
    provider: P,
}

impl<P: SeedProvider> Seeder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn run(&self) -> Result<EntityStore> {
        tracing::info!("Generating seed data...");
        let seed = self.provider.generate().await?;
        tracing::info!(
            "Generated {} people and {} dogs",
            seed.people.len(),
            seed.dogs.len()
        );

        let store = EntityStore::from_seed(seed)?;
        for person in store.list_people() {
            tracing::debug!(
                "{} {} ({}) owns {} dogs",
                person.first_name,
                person.last_name,
                person.id,
                person.dogs.len()
            );
        }

        Ok(store)
    }
}
