//! Application configuration management.
//!
//! Configuration is layered from default values, an optional TOML file and
//! environment variables, in increasing order of precedence.

use authseq_core::models::{Map, ProductCatalog, ProductName};
use serde::{Deserialize, Serialize};
use std::path::Path;
use time::{Date, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// The day statuses are classified against
    #[serde(default)]
    pub clock: ClockConfig,

    /// Product names layered over the built-in catalog
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Pins the reference day, e.g. to replay a report as of a past date
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ClockConfig {
    /// A `YYYY-MM-DD` day; the current UTC day when absent
    #[serde(default, with = "iso_date::option")]
    pub reference_date: Option<Date>,
}

impl ClockConfig {
    /// The configured day, or today
    pub fn today(&self) -> Date {
        self.reference_date
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }
}

/// Extra or replacement product names, keyed by product code
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CatalogConfig {
    /// Names by code, e.g. `{ long = "ETHANOL", short = "ETH" }`
    #[serde(default)]
    pub products: Map<String, ProductName>,
}

impl CatalogConfig {
    /// The standard catalog with the configured entries merged in.
    ///
    /// Codes are upper-cased, since the configuration layer may fold key case.
    pub fn catalog(&self) -> ProductCatalog {
        let mut catalog = ProductCatalog::standard();
        catalog.extend(
            self.products
                .iter()
                .map(|(code, name)| (code.to_uppercase(), name.clone())),
        );
        catalog
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `AUTHSEQ_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Replay statuses as of the day the dataset was captured
    /// export AUTHSEQ_CLOCK__REFERENCE_DATE="2026-02-25"
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // AUTHSEQ_CLOCK__REFERENCE_DATE maps to clock.reference_date
        config = config.add_source(
            config::Environment::with_prefix("AUTHSEQ")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, path::PathBuf};
    use time::macros::date;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("authseq-{}-{name}.toml", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert!(config.clock.reference_date.is_none());
        assert_eq!(config.catalog.catalog(), ProductCatalog::standard());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = env::temp_dir().join("authseq-does-not-exist.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let path = write_config(
            "file",
            r#"
            [clock]
            reference_date = "2026-02-25"

            [catalog.products.ZZ]
            long = "TEST PRODUCT"

            [catalog.products.E]
            long = "DENATURED ETHANOL"
            short = "ETH"
            "#,
        );
        let config = AppConfig::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.clock.today(), date!(2026 - 02 - 25));
        let catalog = config.catalog.catalog();
        assert_eq!(catalog.long_name("ZZ"), "TEST PRODUCT");
        assert_eq!(catalog.short_name("ZZ"), "TEST PRODUCT");
        assert_eq!(catalog.short_name("E"), "ETH");
        assert_eq!(catalog.long_name("A"), "91 OCTANE w/o 10% ETH");
    }
}
