use crate::preferences::FilePreferenceStore;
use crate::theme::DEFAULT_STORAGE_KEY;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:5000/api/chat";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Bundled defaults for builds without a `.env` next to them
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

/// Loads `.env` if present, otherwise the bundled defaults. Variables
/// already set in the environment are never overridden.
pub fn load_env() -> Result<(), dotenvy::Error> {
    if dotenvy::dotenv().is_ok() {
        return Ok(());
    }
    dotenvy::from_read(BUNDLED_CONFIG.as_bytes())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub chat_endpoint: String,
    pub theme_storage_key: String,
    pub data_dir: PathBuf,
    pub prefers_dark: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            theme_storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: FilePreferenceStore::default_dir(),
            prefers_dark: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source; unset or blank values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let chat_endpoint = get("PAYDESK_CHAT_ENDPOINT").unwrap_or(defaults.chat_endpoint);
        reqwest::Url::parse(&chat_endpoint)
            .with_context(|| format!("PAYDESK_CHAT_ENDPOINT is not a valid URL: {chat_endpoint}"))?;

        Ok(Self {
            chat_endpoint,
            theme_storage_key: get("PAYDESK_THEME_KEY").unwrap_or(defaults.theme_storage_key),
            data_dir: get("PAYDESK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            prefers_dark: get("PAYDESK_PREFERS_DARK")
                .map(|value| is_truthy(&value))
                .unwrap_or(defaults.prefers_dark),
            log_filter: get("PAYDESK_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
