use std::path::PathBuf;

use crate::configuration::Configuration;
use crate::storage::{ConfigError, TablePrefix};

pub struct Context {
    pub config: Configuration,
}

impl Context {
    /// Validate command line settings into a `Configuration`.
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self, ConfigError> {
        let cfg = Configuration {
            db_path: PathBuf::from(&cli.db),
            table_prefix: TablePrefix::new(cli.table_prefix.clone())?,
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        };
        Ok(Self { config: cfg })
    }
}
