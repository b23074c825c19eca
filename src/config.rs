//! Configuration for the quotes seeder.

use serde::{Deserialize, Serialize};

/// Input source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: String,
}

fn default_source_path() -> String {
    "data/scrapped_quotes2.csv".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

/// Output artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_output_path() -> String {
    "database/quotes_import.sql".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// Selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Maximum quotes retained per category in the output
    #[serde(default = "default_per_category_cap")]
    pub per_category_cap: usize,
}

fn default_per_category_cap() -> usize {
    100
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            per_category_cap: default_per_category_cap(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

impl AppConfig {
    /// Load configuration from environment and config file
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Add config file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (QUOTEVAULT_OUTPUT_PATH, etc.)
            .add_source(
                config::Environment::with_prefix("QUOTEVAULT")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
