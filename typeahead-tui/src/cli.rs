//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use simplelog::LevelFilter;
use typeahead::{ConfigError, Dataset, DatasetError, SearchConfig};

/// Used when no `--dataset` is given.
pub const DEFAULT_DATASET: [&str; 5] = ["Apple", "Banana", "Orange", "Mango", "Pineapple"];

/// Type to search a list of strings; matches are shown below the input.
#[derive(Debug, Parser)]
#[command(name = "typeahead", version)]
pub struct Cli {
    /// Dataset to search: a JSON array of strings (.json) or one entry per line
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// JSON search config ({"delay_ms": .., "placeholder": ..}); flags below override it
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delay before results for a query appear [default: 100]
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Text shown while the input is empty [default: "Start typing..."]
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Log level for the log file
    #[arg(long, value_name = "LEVEL", default_value = "debug")]
    pub log_level: LevelFilter,

    /// Directory for log files [default: platform cache dir]
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Load the dataset named on the command line, or the built-in one.
    pub fn load_dataset(&self) -> Result<Dataset, DatasetError> {
        match &self.dataset {
            Some(path) => Dataset::load(path),
            None => Ok(Dataset::new(DEFAULT_DATASET)),
        }
    }

    /// The config file, if any, with command-line overrides applied.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };
        if let Some(ms) = self.delay_ms {
            config = config.with_delay(Duration::from_millis(ms));
        }
        if let Some(placeholder) = &self.placeholder {
            config = config.with_placeholder(placeholder);
        }
        Ok(config)
    }
}
