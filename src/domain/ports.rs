use crate::domain::model::SeedData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn latency_ms(&self) -> u64;
    fn people_count(&self) -> usize;
    fn dog_count(&self) -> usize;
    fn photo_endpoint(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn use_fixtures(&self) -> bool;
    fn json_logs(&self) -> bool;
}

/// Produces the entities the store is populated with at startup.
#[async_trait]
pub trait SeedProvider: Send + Sync {
    async fn generate(&self) -> Result<SeedData>;
}

/// Source of display photo URLs for generated dogs.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn random_photo(&self) -> Result<String>;
}
