//! Shared configuration loader for the bazaar tools.
//!
//! `defaults/bazaar.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BazaarConfig`].

use bazaar_market::{Session, Theme};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/bazaar.default.toml");

/// Top-level configuration consumed by bazaar applications.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BazaarConfig {
    pub api: ApiConfig,
    pub links: LinkConfig,
    pub listings: ListingsConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Attributes written onto rendered links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkConfig {
    pub target: String,
    pub rel: String,
    pub class: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingsConfig {
    pub placeholder_image: String,
}

/// Startup values for the user session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub theme: Theme,
    pub user_id: String,
}

impl SessionConfig {
    /// Build the session the application runs with. An empty `user_id` is anonymous.
    pub fn to_session(&self) -> Session {
        Session::new(self.theme, Some(self.user_id.clone()))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BazaarConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BazaarConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.links.target, "_blank");
        assert_eq!(config.links.rel, "noopener noreferrer");
        assert_eq!(config.session.theme, Theme::Light);
        assert_eq!(config.session.to_session().user_id(), None);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("session.theme", "dark")
            .expect("override to apply")
            .set_override("session.user_id", "42")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let session = config.session.to_session();
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.user_id(), Some("42"));
    }

    #[test]
    fn user_file_is_layered_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[api]\nbase_url = \"https://market.example\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.api.base_url, "https://market.example");
        // Untouched sections keep their defaults.
        assert_eq!(
            config.listings.placeholder_image,
            "https://via.placeholder.com/800x450?text=No+Image"
        );
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/bazaar.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/bazaar.toml")
            .build()
            .unwrap();
        assert_eq!(config.session.theme, Theme::Light);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result = Loader::new()
            .set_override("session.theme", "sepia")
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
