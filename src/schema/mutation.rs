use crate::schema::types::{DogObject, PersonObject};
use crate::schema::{into_graphql_error, shared_store};
use async_graphql::{Context, Object, Result, ID};

/// Unlike the single-entity queries, every mutation fails on an unknown id.
/// The result fields stay nullable, so a miss resolves to `null` next to the
/// error.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn rename_dog(
        &self,
        ctx: &Context<'_>,
        dog_id: ID,
        new_name: String,
    ) -> Result<Option<DogObject>> {
        let mut store = shared_store(ctx)?.write().await;
        let dog = store
            .rename_dog(&dog_id, new_name)
            .map_err(into_graphql_error)?;
        Ok(Some(DogObject(dog.clone())))
    }

    async fn like_dog(&self, ctx: &Context<'_>, dog_id: ID) -> Result<Option<DogObject>> {
        let mut store = shared_store(ctx)?.write().await;
        let dog = store.like_dog(&dog_id).map_err(into_graphql_error)?;
        Ok(Some(DogObject(dog.clone())))
    }

    async fn rename_owner(
        &self,
        ctx: &Context<'_>,
        person_id: ID,
        new_first_name: Option<String>,
        new_last_name: Option<String>,
    ) -> Result<Option<PersonObject>> {
        let mut store = shared_store(ctx)?.write().await;
        let person = store
            .rename_person(&person_id, new_first_name, new_last_name)
            .map_err(into_graphql_error)?;
        Ok(Some(PersonObject(person.clone())))
    }
}
