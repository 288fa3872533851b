//! Configuration management
//!
//! Settings live in `settings.json` in the folio directory:
//! ```json
//! {
//!   "app": {
//!     "apiBaseUrl": "http://localhost:5678/api/",
//!     "language": "fr",
//!     "confirmLogout": false,
//!     "timeoutSecs": 30
//!   }
//! }
//! ```
//! Fields this crate does not manage are kept as-is when saving.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default)]
    confirm_logout: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Folio configuration (resolved view of settings and environment)
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Preferred language; None means "detect from the environment"
    pub language: Option<String>,
    /// Ask before logging out
    pub confirm_logout: bool,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            language: None,
            confirm_logout: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from the folio directory
    ///
    /// Environment overrides:
    /// - FOLIO_API_URL for the API base URL
    /// - FOLIO_LANG for the message language
    pub fn load(folio_dir: &Path) -> Result<Self> {
        let raw = read_settings(&folio_dir.join("settings.json"))?;

        let api_base_url = non_empty_env("FOLIO_API_URL")
            .or(raw.app.api_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let language = non_empty_env("FOLIO_LANG").or(raw.app.language);

        Ok(Self {
            api_base_url,
            language,
            confirm_logout: raw.app.confirm_logout,
            timeout_secs: raw
                .app
                .timeout_secs
                .filter(|s| *s > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Save config to the folio directory
    /// Preserves other settings this crate doesn't manage
    pub fn save(&self, folio_dir: &Path) -> Result<()> {
        let settings_path = folio_dir.join("settings.json");
        let mut settings = read_settings(&settings_path)?;

        settings.app.api_base_url = Some(self.api_base_url.clone());
        settings.app.language = self.language.clone();
        settings.app.confirm_logout = self.confirm_logout;
        settings.app.timeout_secs = Some(self.timeout_secs);

        std::fs::create_dir_all(folio_dir)
            .with_context(|| format!("Failed to create {}", folio_dir.display()))?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {}", settings_path.display()))?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Malformed files fall back to defaults
fn read_settings(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
