//! Application settings.
//!
//! One value matters: the migration-engine endpoint. Loaded from
//! `settings.toml` in the platform config directory; a missing or
//! unreadable file falls back to the default local engine. The UI never
//! writes settings back — nothing else is persisted either.

use serde::Deserialize;

/// Engine endpoint used when no settings file overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Persistent application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the migration engine.
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from disk, falling back to defaults.
    pub fn load() -> Self {
        let Some(proj_dirs) = directories::ProjectDirs::from("", "", "Vault Migration Studio")
        else {
            return Self::default();
        };
        let path = proj_dirs.config_dir().join("settings.toml");
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parses a settings file, falling back to defaults on invalid TOML.
    fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_the_local_engine() {
        assert_eq!(Settings::default().endpoint, "http://127.0.0.1:5000");
    }

    #[test]
    fn endpoint_override_is_read() {
        let settings = Settings::parse("endpoint = \"https://engine.example.org\"\n");
        assert_eq!(settings.endpoint, "https://engine.example.org");
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let settings = Settings::parse("endpoint = [not toml");
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let settings = Settings::parse("");
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }
}
