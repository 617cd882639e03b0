use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_SLUG_SUFFIX;
use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub naming: NamingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// Highest collision counter the bounded slug resolver will try
    pub max_slug_suffix: u32,
    /// Prefix for generated identifiers when none is given explicitly
    pub default_prefix: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `cdav.toml`
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("cdav.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CDAV")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document does not parse, does not deserialize,
    /// or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks invariants serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the slug counter ceiling is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.naming.max_slug_suffix == 0 {
            return Err(CoreError::InvalidConfiguration(
                "naming.max_slug_suffix must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("naming.max_slug_suffix", DEFAULT_MAX_SLUG_SUFFIX)?
            .set_default("logging.level", "warn")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_defaults_apply_without_sources() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings.naming.max_slug_suffix, DEFAULT_MAX_SLUG_SUFFIX);
        assert_eq!(settings.naming.default_prefix, None);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [naming]
            max_slug_suffix = 25
            default_prefix = "nc"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.naming.max_slug_suffix, 25);
        assert_eq!(settings.naming.default_prefix.as_deref(), Some("nc"));
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_zero_ceiling_is_rejected() {
        let err = Settings::from_toml_str("[naming]\nmax_slug_suffix = 0\n").unwrap_err();

        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidConfiguration(
                "naming.max_slug_suffix must be at least 1".to_string()
            ))
        );
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        assert!(Settings::from_toml_str("[naming]\nmax_slug_suffix = \"many\"\n").is_err());
    }
}
