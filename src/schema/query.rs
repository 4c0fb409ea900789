use crate::schema::shared_store;
use crate::schema::types::{DogObject, PersonObject};
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn people(&self, ctx: &Context<'_>) -> Result<Vec<PersonObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.list_people().iter().cloned().map(PersonObject).collect())
    }

    /// Null when no person has this id.
    async fn person(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PersonObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.find_person(&id).cloned().map(PersonObject))
    }

    async fn dogs(&self, ctx: &Context<'_>) -> Result<Vec<DogObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.list_dogs().iter().cloned().map(DogObject).collect())
    }

    /// Null when no dog has this id.
    async fn dog(&self, ctx: &Context<'_>, id: ID) -> Result<Option<DogObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.find_dog(&id).cloned().map(DogObject))
    }
}
