use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Conversion
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
                Err(_) => 8080,
            },

            // Conversion - falls back to the registry default
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(&code).context("DEFAULT_LANGUAGE is invalid")?,
                Err(_) => Language::default_language(),
            },
        })
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_language: Language::default_language(),
        }
    }
}
