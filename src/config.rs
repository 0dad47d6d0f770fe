use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Dashboard API
    pub api_url: String,

    // Localization
    pub default_language: String,

    // Site-wide variables exposed to token substitution
    pub website_name: String,
    pub website_slogan: String,

    // Optional directory of per-language content bundles.
    // When unset, the embedded bundles are used.
    pub content_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Dashboard API base URL (no trailing slash)
            api_url: std::env::var("API_URL").context("API_URL not set")?,

            // Localization
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            // Site variables
            website_name: std::env::var("WEBSITE_NAME").unwrap_or_else(|_| "DELVE".to_string()),
            website_slogan: std::env::var("WEBSITE_SLOGAN").unwrap_or_else(|_| {
                "A global platform for artisanal and small-scale mining data".to_string()
            }),

            // Content bundles
            content_dir: std::env::var("CONTENT_DIR").ok(),
        })
    }
}
