use crate::adapters::dog_ceo::DEFAULT_PHOTO_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_settings, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dogpark")]
#[command(about = "In-memory GraphQL API for dogs and their owners")]
pub struct CliConfig {
    #[arg(long, default_value = super::DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = super::DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value_t = super::DEFAULT_LATENCY_MS, help = "Artificial delay per request")]
    pub latency_ms: u64,

    #[arg(long, default_value_t = super::DEFAULT_PEOPLE)]
    pub people: usize,

    #[arg(long, default_value_t = super::DEFAULT_DOGS)]
    pub dogs: usize,

    #[arg(long, default_value = DEFAULT_PHOTO_ENDPOINT)]
    pub photo_endpoint: String,

    #[arg(long, default_value_t = super::DEFAULT_CONCURRENT_REQUESTS)]
    pub concurrent_requests: usize,

    #[arg(long, help = "Seed deterministic fixtures instead of random data")]
    pub fixtures: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Only `--verbose` may be combined with a config file.
    #[arg(
        long,
        help = "Read settings from a TOML file instead of flags",
        conflicts_with_all = [
            "host",
            "port",
            "latency_ms",
            "people",
            "dogs",
            "photo_endpoint",
            "concurrent_requests",
            "fixtures",
            "json_logs",
        ]
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the GraphQL schema and exit")]
    pub print_schema: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn latency_ms(&self) -> u64 {
        self.latency_ms
    }

    fn people_count(&self) -> usize {
        self.people
    }

    fn dog_count(&self) -> usize {
        self.dogs
    }

    fn photo_endpoint(&self) -> &str {
        &self.photo_endpoint
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn use_fixtures(&self) -> bool {
        self.fixtures
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
