#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_LATENCY_MS: u64 = 500;
pub const DEFAULT_PEOPLE: usize = 2;
pub const DEFAULT_DOGS: usize = 20;
pub const DEFAULT_CONCURRENT_REQUESTS: usize = 5;
