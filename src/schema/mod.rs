//! GraphQL schema over the entity store.
//!
//! - [`query`] - `people`, `person`, `dogs`, `dog`
//! - [`mutation`] - `renameDog`, `likeDog`, `renameOwner`
//! - [`types`] - the `Person`, `Dog` and `Breed` output types
//!
//! Single-entity queries return null for unknown ids; mutations return an
//! error carrying `extensions.code = "NOT_FOUND"`.

mod mutation;
mod query;
mod types;

use crate::core::SharedStore;
use crate::utils::error::ParkError;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{BreedType, DogObject, PersonObject};

pub type DogparkSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the store handle as context data.
pub fn build_schema(store: SharedStore) -> DogparkSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// SDL of the schema, without needing a store.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub(crate) fn shared_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub(crate) fn into_graphql_error(err: ParkError) -> async_graphql::Error {
    let code = if err.is_not_found() {
        "NOT_FOUND"
    } else {
        "INTERNAL_SERVER_ERROR"
    };
    tracing::debug!("Mutation failed: {}", err);
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
