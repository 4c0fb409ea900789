pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod schema;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{DogCeoClient, FixtureSeedProvider, RandomSeedProvider};
pub use crate::core::{seeder::Seeder, EntityStore, SharedStore};
pub use schema::{build_schema, schema_sdl, DogparkSchema};
pub use server::GraphqlServer;
pub use utils::error::{ParkError, Result};
