use crate::adapters::dog_ceo::DEFAULT_PHOTO_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{ParkError, Result};
use crate::utils::validation::{validate_settings, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    pub people: Option<usize>,
    pub dogs: Option<usize>,
    pub photo_endpoint: Option<String>,
    pub concurrent_requests: Option<usize>,
    pub fixtures: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` with environment values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ParkError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ParkError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format) {
                return Err(ParkError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        validate_settings(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(super::DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(super::DEFAULT_PORT)
    }

    fn latency_ms(&self) -> u64 {
        self.server.latency_ms.unwrap_or(super::DEFAULT_LATENCY_MS)
    }

    fn people_count(&self) -> usize {
        self.seed.people.unwrap_or(super::DEFAULT_PEOPLE)
    }

    fn dog_count(&self) -> usize {
        self.seed.dogs.unwrap_or(super::DEFAULT_DOGS)
    }

    fn photo_endpoint(&self) -> &str {
        self.seed
            .photo_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_PHOTO_ENDPOINT)
    }

    fn concurrent_requests(&self) -> usize {
        self.seed
            .concurrent_requests
            .unwrap_or(super::DEFAULT_CONCURRENT_REQUESTS)
    }

    fn use_fixtures(&self) -> bool {
        self.seed.fixtures.unwrap_or(false)
    }

    fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|format| format == "json")
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080
latency_ms = 0

[seed]
people = 3
dogs = 12
concurrent_requests = 2
fixtures = true

[logging]
format = "json"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.latency_ms(), 0);
        assert_eq!(config.people_count(), 3);
        assert_eq!(config.dog_count(), 12);
        assert_eq!(config.concurrent_requests(), 2);
        assert!(config.use_fixtures());
        assert!(config.json_logs());
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 4000);
        assert_eq!(config.latency_ms(), 500);
        assert_eq!(config.people_count(), 2);
        assert_eq!(config.dog_count(), 20);
        assert_eq!(config.photo_endpoint(), DEFAULT_PHOTO_ENDPOINT);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DOGPARK_TEST_PHOTO_ENDPOINT", "https://photos.test/random");

        let toml_content = r#"
[seed]
photo_endpoint = "${DOGPARK_TEST_PHOTO_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.photo_endpoint(), "https://photos.test/random");

        std::env::remove_var("DOGPARK_TEST_PHOTO_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[seed]
photo_endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[logging]
format = "xml"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[server\nport = 1");
        assert!(matches!(
            result,
            Err(ParkError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 4100\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 4100);
    }
}
