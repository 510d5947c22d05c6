//! Process configuration, read once at startup.

use std::fmt;

/// Environment variable holding the FRED API key.
pub const API_KEY_VAR: &str = "FRED_API_KEY";
/// Environment variable overriding the FRED host (tests, proxies).
pub const BASE_URL_VAR: &str = "FRED_BASE_URL";
/// Key used when none is configured. FRED rejects it, but startup does not fail.
pub const PLACEHOLDER_API_KEY: &str = "demo-key";

/// Settings handed to the CPI provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: fred_api::DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Reads `FRED_API_KEY` and `FRED_BASE_URL`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = non_empty(lookup(API_KEY_VAR)).unwrap_or_else(|| {
            tracing::warn!(
                "{} is not set, using placeholder key '{}'",
                API_KEY_VAR,
                PLACEHOLDER_API_KEY
            );
            PLACEHOLDER_API_KEY.to_string()
        });
        let base_url = non_empty(lookup(BASE_URL_VAR))
            .unwrap_or_else(|| fred_api::DEFAULT_BASE_URL.to_string());
        Self { api_key, base_url }
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PLACEHOLDER_API_KEY)
    }
}

// The key never appears in logs or debug output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
