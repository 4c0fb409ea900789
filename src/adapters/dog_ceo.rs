use crate::core::PhotoSource;
use crate::utils::error::{ParkError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_PHOTO_ENDPOINT: &str = "https://dog.ceo/api/breeds/image/random";

#[derive(Debug, Deserialize)]
struct RandomImageResponse {
    message: String,
    status: Option<String>,
}

/// Client for the dog.ceo random image API.
#[derive(Debug, Clone)]
pub struct DogCeoClient {
    client: Client,
    endpoint: String,
}

impl DogCeoClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for DogCeoClient {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_ENDPOINT)
    }
}

#[async_trait]
impl PhotoSource for DogCeoClient {
    async fn random_photo(&self) -> Result<String> {
        tracing::debug!("Requesting dog photo from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Photo API response status: {}", response.status());
        let response = response.error_for_status()?;
        let body: RandomImageResponse = response.json().await?;

        match body.status.as_deref() {
            None | Some("success") => {}
            Some(status) => {
                return Err(ParkError::PhotoError {
                    message: format!("unexpected status '{}'", status),
                })
            }
        }
        if body.message.is_empty() {
            return Err(ParkError::PhotoError {
                message: "empty image url".to_string(),
            });
        }

        Ok(body.message)
    }
}
