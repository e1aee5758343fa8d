//! LLM configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::CompletionParams;

/// Config for the OpenRouter completion client, loaded from the environment.
/// A missing `OPENROUTER_API_KEY` is startup-fatal.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u16,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl EnvLlmConfig {
    /// Load from environment variables. Load `.env` (dotenvy) before calling.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .context("OPENROUTER_API_KEY not set. Set it in .env or environment.")?;
        let base_url = env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| openrouter_client::OPENROUTER_API_BASE.to_string());
        let defaults = CompletionParams::default();
        let model = env::var("CHAYSH_MODEL").unwrap_or(defaults.model);
        let max_tokens = parse_env_or("CHAYSH_MAX_TOKENS", defaults.max_tokens);
        let temperature = parse_env_or("CHAYSH_TEMPERATURE", defaults.temperature);
        let timeout_secs = parse_env_or(
            "CHAYSH_TIMEOUT_SECS",
            openrouter_client::DEFAULT_TIMEOUT_SECS,
        );
        Ok(Self {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout_secs,
        })
    }

    pub fn params(&self) -> CompletionParams {
        CompletionParams {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Builds the OpenRouter client described by this config.
    pub fn client(&self) -> crate::OpenRouterCompletion {
        crate::OpenRouterCompletion::with_base_url(self.api_key.clone(), self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Reads and parses an env var, falling back to `default` when unset.
/// A set-but-unparsable value is reported, not silently replaced.
fn parse_env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(var = name, value = %raw, "unparsable value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: set-but-malformed numeric variables fall back to defaults
    /// instead of being dropped silently mid-expression; valid values parse.**
    #[test]
    fn from_env_reports_and_defaults_malformed_values() {
        env::set_var("OPENROUTER_API_KEY", "sk-or-test");
        env::set_var("CHAYSH_MAX_TOKENS", "lots");
        env::set_var("CHAYSH_TEMPERATURE", "0.2");
        env::remove_var("CHAYSH_TIMEOUT_SECS");

        let config = EnvLlmConfig::from_env().unwrap();
        assert_eq!(config.max_tokens, CompletionParams::default().max_tokens);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(
            config.timeout_secs,
            openrouter_client::DEFAULT_TIMEOUT_SECS
        );

        env::remove_var("OPENROUTER_API_KEY");
        env::remove_var("CHAYSH_MAX_TOKENS");
        env::remove_var("CHAYSH_TEMPERATURE");
    }
}
