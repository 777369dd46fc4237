use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::shared::error::{AppError, AppResult};

/// Environment variables checked (in order) before the stored API key.
pub const API_KEY_ENV_VARS: &[&str] = &["SUTRADHAAR_GEMINI_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings/")]
pub struct AppSettings {
    pub extraction: ExtractionSettings,
    pub preferences: UnitPreferences,
}

/// Where natural-language queries are sent for value/unit extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings/")]
pub struct ExtractionSettings {
    /// "gemini" or "rules"
    pub provider: String,
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings/")]
pub struct UnitPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
    pub significant_digits: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            extraction: ExtractionSettings::default(),
            preferences: UnitPreferences::default(),
        }
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self {
            default_category: "Length".to_string(),
            default_from_unit: "Meters".to_string(),
            default_to_unit: "Feet".to_string(),
            significant_digits: 5,
        }
    }
}

impl ExtractionSettings {
    /// API key from the environment, falling back to the stored one.
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .chain(std::iter::once(self.api_key.clone()))
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "sutradhaar", "sutradhaar")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::System("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing defaults there if it does not exist yet.
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Validation(format!("Failed to parse settings: {}", e)))
    }

    pub async fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path).await
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
