use log::warn;
use std::env;

use crate::api_connection::connection::GenAiError;
use crate::api_connection::endpoints::GenerationConfig;

pub const GENAI_API_KEY_ENV_VAR: &str = "GENAI_API_KEY";
pub const GENAI_BASE_URL_ENV_VAR: &str = "GENAI_BASE_URL";
pub const GENAI_MODEL_ENV_VAR: &str = "GENAI_MODEL";
pub const BILLING_API_KEY_ENV_VAR: &str = "BILLING_API_KEY";
pub const PAYWALL_API_KEY_ENV_VAR: &str = "PAYWALL_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Everything the transport client needs, resolved up front. Constructed once
/// at startup and handed to `GenAiClient::new`.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub generation_config: GenerationConfig,
}

impl GenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            generation_config: GenerationConfig::default(),
        }
    }

    /// Reads the key (required) and base-URL/model overrides (optional) from
    /// the environment. Call `dotenv::dotenv().ok()` before this in binaries.
    pub fn from_env() -> Result<Self, GenAiError> {
        let api_key = env::var(GENAI_API_KEY_ENV_VAR)
            .map_err(|_| GenAiError::MissingCredential(GENAI_API_KEY_ENV_VAR.to_string()))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(GENAI_BASE_URL_ENV_VAR) {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var(GENAI_MODEL_ENV_VAR) {
            config.model = model;
        }
        Ok(config)
    }
}

/// Optional subsystem keys. A missing key disables only that subsystem and is
/// reported as a warning, never an error.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub billing_api_key: Option<String>,
    pub paywall_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let billing_api_key = env::var(BILLING_API_KEY_ENV_VAR).ok();
        if billing_api_key.is_none() {
            warn!(
                "{} not set; subscription billing is disabled",
                BILLING_API_KEY_ENV_VAR
            );
        }
        let paywall_api_key = env::var(PAYWALL_API_KEY_ENV_VAR).ok();
        if paywall_api_key.is_none() {
            warn!(
                "{} not set; paywall presentation is disabled",
                PAYWALL_API_KEY_ENV_VAR
            );
        }
        Self {
            billing_api_key,
            paywall_api_key,
        }
    }
}
