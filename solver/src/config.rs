//! Layers `fruitbox.toml`, `FRUITBOX_*` environment variables and command line flags over the defaults.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use fruitbox::SearchConfig;
use tracing::debug;

use crate::cli::{Cli, DEFAULT_CONFIG};
use crate::error::AppError;

pub fn load(cli: &Cli) -> Result<SearchConfig, AppError> {
    if !cli.config.exists() {
        if cli.config != Path::new(DEFAULT_CONFIG) {
            return Err(AppError::MissingConfig(cli.config.clone()));
        }
        debug!(path = %cli.config.display(), "no configuration file, using defaults");
    }

    let mut config: SearchConfig = Figment::from(Serialized::defaults(SearchConfig::default()))
        .merge(Toml::file(&cli.config))
        // nested keys as in FRUITBOX_ADJACENCY__THRESHOLD
        .merge(Env::prefixed("FRUITBOX_").split("__"))
        .extract()?;

    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(threshold) = cli.threshold {
        config.adjacency.threshold = threshold;
    }
    if let Some(factor) = cli.manhattan_factor {
        config.adjacency.manhattan_factor = factor;
    }
    if let Some(policy) = cli.validation {
        config.validation = policy;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use figment::Jail;
    use fruitbox::{SearchConfig, ValidationPolicy};

    use super::load;
    use crate::cli::Cli;
    use crate::error::AppError;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("solver").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_| {
            assert_eq!(load(&cli(&[])).unwrap(), SearchConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("fruitbox.toml", r#"
                target = 9
                validation = "reject"

                [adjacency]
                threshold = 70
            "#)?;

            let config = load(&cli(&[])).unwrap();
            assert_eq!(config.target, 9.0);
            assert_eq!(config.validation, ValidationPolicy::Reject);
            assert_eq!(config.adjacency.threshold, 70.0);
            assert_eq!(config.adjacency.manhattan_factor, 1.5);
            assert_eq!(config.grid, SearchConfig::default().grid);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("fruitbox.toml", "[adjacency]\nthreshold = 70\nmanhattan_factor = 2\n")?;
            jail.set_env("FRUITBOX_ADJACENCY__THRESHOLD", "80");
            jail.set_env("FRUITBOX_VALIDATION", "skip");

            let config = load(&cli(&[])).unwrap();
            assert_eq!(config.adjacency.threshold, 80.0);
            assert_eq!(config.adjacency.manhattan_factor, 2.0);
            assert_eq!(config.validation, ValidationPolicy::Skip);
            Ok(())
        });
    }

    #[test]
    fn flags_override_env() {
        Jail::expect_with(|jail| {
            jail.create_file("fruitbox.toml", "target = 9\n[adjacency]\nthreshold = 70\n")?;
            jail.set_env("FRUITBOX_ADJACENCY__THRESHOLD", "80");

            let config = load(&cli(&["--threshold", "90", "--validation", "abort"])).unwrap();
            assert_eq!(config.adjacency.threshold, 90.0);
            assert_eq!(config.validation, ValidationPolicy::Abort);
            assert_eq!(config.target, 9.0);
            Ok(())
        });
    }

    #[test]
    fn other_config_must_exist() {
        Jail::expect_with(|jail| {
            assert!(matches!(load(&cli(&["--config", "fruitbx.toml"])), Err(AppError::MissingConfig(_))));

            jail.create_file("custom.toml", "target = 12\n")?;
            assert_eq!(load(&cli(&["--config", "custom.toml"])).unwrap().target, 12.0);
            Ok(())
        });
    }
}
