use crate::core::{Dog, Person};
use crate::schema::shared_store;
use async_graphql::{Context, Enum, Error, Object, Result, ID};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "Breed", remote = "crate::domain::model::Breed")]
pub enum BreedType {
    Labrador,
    Poodle,
}

/// Snapshot of a person taken under the store lock.
pub struct PersonObject(pub Person);

#[Object(name = "Person")]
impl PersonObject {
    async fn id(&self) -> ID {
        ID(self.0.id.0.clone())
    }

    async fn first_name(&self) -> &str {
        &self.0.first_name
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    async fn dogs(&self, ctx: &Context<'_>) -> Result<Vec<DogObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .dogs_of(&self.0)
            .into_iter()
            .cloned()
            .map(DogObject)
            .collect())
    }
}

pub struct DogObject(pub Dog);

#[Object(name = "Dog")]
impl DogObject {
    async fn id(&self) -> ID {
        ID(self.0.id.0.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn breed(&self) -> BreedType {
        self.0.breed.into()
    }

    async fn photo(&self) -> &str {
        &self.0.photo
    }

    async fn likes(&self) -> i32 {
        i32::try_from(self.0.likes).unwrap_or(i32::MAX)
    }

    async fn owner(&self, ctx: &Context<'_>) -> Result<PersonObject> {
        let store = shared_store(ctx)?.read().await;
        let owner = store.owner_of(&self.0).ok_or_else(|| {
            Error::new(format!("Owner {} of dog {} is missing", self.0.owner, self.0.id))
        })?;
        Ok(PersonObject(owner.clone()))
    }
}
