// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{IndexerError, Result};
use crate::indexer::DEFAULT_PROGRESS_INTERVAL;
use crate::report::{DEFAULT_OUTPUT_PATH, ReportFormat};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub index: IndexConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexConfig {
    pub keywords: Vec<String>,
    /// One keyword per line; blank lines and `#` comments are ignored.
    pub keywords_file: Option<PathBuf>,
    /// Page list with ranges, e.g. `"1, 5, 37-99"`.
    pub skip_pages: String,
    pub progress_interval: u32,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            keywords: vec![],
            keywords_file: None,
            skip_pages: String::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: ReportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ReportFormat::Text,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PDF_KEYWORD_INDEX")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| IndexerError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| IndexerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.index.progress_interval == 0 {
            return Err(IndexerError::Config(
                "progress_interval must be greater than 0".to_string(),
            ));
        }

        Validator::parse_page_spec(&self.index.skip_pages)
            .map_err(|e| IndexerError::Config(format!("skip_pages: {}", e)))?;

        Ok(())
    }

    /// Inline keywords followed by the contents of `keywords_file`, if any.
    pub fn resolve_keywords(&self) -> Result<Vec<String>> {
        let mut keywords = self.index.keywords.clone();

        if let Some(file) = &self.index.keywords_file {
            let content =
                std::fs::read_to_string(file).map_err(|source| IndexerError::FileOperation {
                    path: file.clone(),
                    source,
                })?;
            keywords.extend(Validator::parse_keyword_lines(&content));
        }

        if keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(IndexerError::Config(
                "No keywords configured; pass --keywords or --keywords-file".to_string(),
            ));
        }

        Ok(keywords)
    }
}
