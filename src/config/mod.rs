// src/config/mod.rs
pub mod types;

pub use self::types::{
    validate_alpha, DiagnosticPolicy, ExperimentConfig, LinkRankToml, RankConfig,
};

use std::fs;
use std::path::Path;

use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "linkrank.toml";

/// Effective configuration: file values first, CLI overrides on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub rank: RankConfig,
    pub diagnostics: DiagnosticPolicy,
    pub experiment: ExperimentConfig,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `linkrank.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load_from(path)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    /// Returns `Io` if the file is missing or unreadable and `Parse` for
    /// malformed TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns `Parse` for malformed TOML.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let file: LinkRankToml = toml::from_str(content)?;
        Ok(Self {
            rank: file.rank,
            diagnostics: file.diagnostics,
            experiment: file.experiment,
            verbose: false,
        })
    }

    /// Validates all sections.
    ///
    /// # Errors
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;
        self.experiment.validate()
    }

    /// Serializes the file-backed sections back to TOML.
    ///
    /// # Errors
    /// Returns `Parse` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        let file = LinkRankToml {
            rank: self.rank,
            diagnostics: self.diagnostics,
            experiment: self.experiment.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| RankError::Parse(e.to_string()))
    }
}
