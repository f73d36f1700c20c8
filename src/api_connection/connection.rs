use log::debug;
use reqwest::Client;
use std::error::Error;
use std::fmt;

use super::endpoints::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GenAiConfig;

#[derive(Debug)]
pub enum GenAiError {
    MissingCredential(String),
    Network(reqwest::Error),
    TransportFailure {
        status: reqwest::StatusCode,
        error_body: String,
    },
    InvalidResponseShape(serde_json::Error),
    EmptyGeneration,
    MalformedPayload(serde_json::Error),
}

impl fmt::Display for GenAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenAiError::MissingCredential(key_name) => {
                write!(f, "API key not found in environment: {}", key_name)
            }
            GenAiError::Network(err) => write!(f, "Network error: {}", err),
            GenAiError::TransportFailure { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
            GenAiError::InvalidResponseShape(err) => {
                write!(f, "Response body is not a valid generation envelope: {}", err)
            }
            GenAiError::EmptyGeneration => {
                write!(f, "Model response contained no generated text")
            }
            GenAiError::MalformedPayload(err) => {
                write!(f, "Generated text is not valid JSON: {}", err)
            }
        }
    }
}

impl Error for GenAiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenAiError::Network(err) => Some(err),
            GenAiError::InvalidResponseShape(err) => Some(err),
            GenAiError::MalformedPayload(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        GenAiError::Network(err)
    }
}

/// Transport client for the generative-text endpoint. Holds its configuration
/// explicitly; the API key is resolved once at construction time, never looked
/// up mid-call. Issues exactly one POST per `send` with no retries.
pub struct GenAiClient {
    http: Client,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn send(&self, prompt: &str) -> Result<GenerateContentResponse, GenAiError> {
        let url = format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let request =
            GenerateContentRequest::from_prompt(prompt, self.config.generation_config.clone());

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.text().await?;
            debug!("Raw generation envelope:\n{}", body);
            serde_json::from_str(&body).map_err(GenAiError::InvalidResponseShape)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(GenAiError::TransportFailure { status, error_body })
        }
    }
}
