//! Configuration
//!
//! `clap` argument groups shared by the CLI. Every option can also be set through the
//! environment.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::{
    catalog::Catalog,
    fixtures::{BUILTIN_SET, Fixture, FixtureError},
};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Where the catalog comes from.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Directory holding `events/`, `shop/` and `rentals/` fixture files.
    /// The bundled catalog is used when omitted.
    #[arg(long, env = "PESQUEIRO_FIXTURES", global = true)]
    pub fixtures: Option<PathBuf>,

    /// Fixture set name
    #[arg(long, env = "PESQUEIRO_SET", default_value = BUILTIN_SET, global = true)]
    pub set: String,
}

impl CatalogConfig {
    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the fixtures cannot be read or don't form a valid catalog.
    pub fn load(&self) -> Result<Catalog, FixtureError> {
        match &self.fixtures {
            Some(dir) => {
                info!(dir = %dir.display(), set = %self.set, "loading catalog fixtures");
                Fixture::from_dir(dir, &self.set)?.catalog()
            }
            None => Catalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        logging: LoggingConfig,

        #[command(flatten)]
        catalog: CatalogConfig,
    }

    #[test]
    fn defaults_use_builtin_catalog() -> TestResult {
        let cli = TestCli::try_parse_from(["pesqueiro"])?;

        assert_eq!(cli.logging.log_format, LogFormat::Compact);
        assert_eq!(cli.catalog.set, BUILTIN_SET);

        if cli.catalog.fixtures.is_none() {
            assert_eq!(cli.catalog.load()?.events().len(), 4);
        }

        Ok(())
    }

    #[test]
    fn json_format_is_selectable() -> TestResult {
        let cli = TestCli::try_parse_from(["pesqueiro", "--log-format", "json"])?;

        assert_eq!(cli.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn fixtures_directory_is_loaded() -> TestResult {
        let dir = TempDir::new()?;

        for kind in ["events", "shop", "rentals"] {
            let kind_dir = dir.path().join(kind);
            fs::create_dir_all(&kind_dir)?;

            let contents = if kind == "events" {
                "events: []\n"
            } else if kind == "shop" {
                "items:\n  - id: 1\n    name: Bait\n    price: \"1.00 EUR\"\n    stock: 1\n"
            } else {
                "items: []\n"
            };

            fs::write(kind_dir.join("tiny.yml"), contents)?;
        }

        let dir_arg = dir.path().to_string_lossy().to_string();
        let cli = TestCli::try_parse_from(["pesqueiro", "--fixtures", &dir_arg, "--set", "tiny"])?;
        let catalog = cli.catalog.load()?;

        assert!(catalog.events().is_empty());
        assert_eq!(catalog.shop_items().len(), 1);

        Ok(())
    }
}
