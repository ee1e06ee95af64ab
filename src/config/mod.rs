#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use std::path::Path;
use toml_config::AppConfig;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5678/webhook/review-ingest";
pub const ENDPOINT_ENV_VAR: &str = "REVIEW_SEO_WEBHOOK_URL";
pub const DEFAULT_CONFIG_FILE: &str = "review-seo.toml";

/// Settings after merging flags, environment, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub output_directory: Option<String>,
}

impl ResolvedConfig {
    /// Precedence: explicit flag, then `REVIEW_SEO_WEBHOOK_URL`, then the
    /// config file, then the built-in default.
    pub fn resolve(
        endpoint_flag: Option<&str>,
        output_flag: Option<&str>,
        file: &AppConfig,
    ) -> Self {
        let env_endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
        Self::resolve_with(endpoint_flag, env_endpoint.as_deref(), output_flag, file)
    }

    pub fn resolve_with(
        endpoint_flag: Option<&str>,
        env_endpoint: Option<&str>,
        output_flag: Option<&str>,
        file: &AppConfig,
    ) -> Self {
        let endpoint = endpoint_flag
            .or(env_endpoint.filter(|e| !e.is_empty()))
            .or(file.webhook.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        let output_directory = output_flag
            .map(str::to_string)
            .or_else(|| file.output.directory.clone());

        Self {
            endpoint,
            output_directory,
        }
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        if let Some(directory) = &self.output_directory {
            validate_path("output", directory)?;
        }
        Ok(())
    }
}

impl ConfigProvider for ResolvedConfig {
    fn webhook_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_directory(&self) -> Option<&str> {
        self.output_directory.as_deref()
    }
}

/// Loads `path`, or `review-seo.toml` from the working directory if present.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            AppConfig::from_file(path)?
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            AppConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
