//! Runtime settings loaded with figment.
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. `sectionfield.yaml` / `sectionfield.toml` in the search directory
//! 3. Environment variables with the `SECTIONFIELD_` prefix

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "SECTIONFIELD_";

/// Label of the empty choice offered by single-select relationship widgets.
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "...";

/// Settings shared by the registry and the form field types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Directory holding `sections/` and `fields/`.
    pub config_dir: PathBuf,
    /// Label mapped to "no selection" in single-select relationship widgets.
    pub placeholder_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(".sectionfield"),
            placeholder_label: DEFAULT_PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Loads `Settings`. No caching; every call reads the sources again.
pub struct SettingsProvider {
    search_dir: PathBuf,
}

impl SettingsProvider {
    /// Look for settings files in the current directory.
    pub fn new() -> Self {
        Self {
            search_dir: PathBuf::from("."),
        }
    }

    /// Look for settings files in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: dir.into(),
        }
    }

    pub fn load(&self) -> Result<Settings> {
        let settings: Settings = self.build_figment().extract()?;
        debug!(
            config_dir = %settings.config_dir.display(),
            placeholder = %settings.placeholder_label,
            "settings loaded"
        );
        Ok(settings)
    }

    fn build_figment(&self) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(self.settings_files())
            .merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }

    fn settings_files(&self) -> Figment {
        let mut figment = Figment::new();
        for path in self.candidate_files() {
            if path.exists() {
                trace!(path = %path.display(), "loading settings file");
                figment = match path.extension().and_then(|e| e.to_str()) {
                    Some("toml") => figment.merge(Toml::file(&path)),
                    _ => figment.merge(Yaml::file(&path)),
                };
            }
        }
        figment
    }

    fn candidate_files(&self) -> Vec<PathBuf> {
        let dir: &Path = &self.search_dir;
        vec![
            dir.join("sectionfield.toml"),
            dir.join("sectionfield.yaml"),
        ]
    }
}

impl Default for SettingsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn defaults_apply_without_sources() {
        let tmp = TempDir::new().unwrap();
        let settings = SettingsProvider::in_dir(tmp.path()).load().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.placeholder_label, "...");
    }

    #[test]
    #[serial]
    fn yaml_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("sectionfield.yaml"),
            "config_dir: /srv/content\nplaceholder_label: '-- none --'\n",
        )
        .unwrap();

        let settings = SettingsProvider::in_dir(tmp.path()).load().unwrap();
        assert_eq!(settings.config_dir, PathBuf::from("/srv/content"));
        assert_eq!(settings.placeholder_label, "-- none --");
    }

    #[test]
    #[serial]
    fn yaml_overrides_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("sectionfield.toml"),
            "placeholder_label = \"toml\"\nconfig_dir = \"from-toml\"\n",
        )
        .unwrap();
        fs::write(tmp.path().join("sectionfield.yaml"), "placeholder_label: yaml\n").unwrap();

        let settings = SettingsProvider::in_dir(tmp.path()).load().unwrap();
        assert_eq!(settings.placeholder_label, "yaml");
        assert_eq!(settings.config_dir, PathBuf::from("from-toml"));
    }

    #[test]
    #[serial]
    fn environment_overrides_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("sectionfield.yaml"), "placeholder_label: file\n").unwrap();

        std::env::set_var("SECTIONFIELD_PLACEHOLDER_LABEL", "env");
        let settings = SettingsProvider::in_dir(tmp.path()).load();
        std::env::remove_var("SECTIONFIELD_PLACEHOLDER_LABEL");

        assert_eq!(settings.unwrap().placeholder_label, "env");
    }
}
