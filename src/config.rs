//! Configuration Module
//! Optional `dashboard.toml` naming the data directory, per-source file names
//! and per-view constants.

use crate::data::{Source, SourcePaths};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory the source file names are resolved against.
    pub data_dir: PathBuf,
    pub sources: SourceFiles,
    pub views: ViewConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub discipline: String,
    pub player_stats: String,
    pub nationalities: String,
    pub fixtures: String,
    pub standings: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per Top Performers chart.
    pub top_performers: usize,
    /// Players shown on the Goal Contribution scatter.
    pub goal_contribution_top: usize,
    /// Axis order of the player comparison radar.
    pub radar_metrics: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            sources: SourceFiles::default(),
            views: ViewConfig::default(),
        }
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            discipline: Source::Discipline.default_file_name().to_string(),
            player_stats: Source::PlayerStats.default_file_name().to_string(),
            nationalities: Source::Nationalities.default_file_name().to_string(),
            fixtures: Source::Fixtures.default_file_name().to_string(),
            standings: Source::Standings.default_file_name().to_string(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            top_performers: 10,
            goal_contribution_top: 20,
            radar_metrics: ["Gls", "Ast", "G+A", "xG", "PrgP"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl DashboardConfig {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, or fall
    /// back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    info!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.views.top_performers == 0 {
            return Err(ConfigError::Validation {
                field: "views.top_performers".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.views.goal_contribution_top == 0 {
            return Err(ConfigError::Validation {
                field: "views.goal_contribution_top".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.views.radar_metrics.is_empty() {
            return Err(ConfigError::Validation {
                field: "views.radar_metrics".into(),
                message: "needs at least one metric".into(),
            });
        }
        Ok(())
    }

    /// Source paths resolved against `data_dir`.
    pub fn source_paths(&self) -> SourcePaths {
        let dir = &self.data_dir;
        SourcePaths::in_dir(dir)
            .with_path(Source::Discipline, dir.join(&self.sources.discipline))
            .with_path(Source::PlayerStats, dir.join(&self.sources.player_stats))
            .with_path(Source::Nationalities, dir.join(&self.sources.nationalities))
            .with_path(Source::Fixtures, dir.join(&self.sources.fixtures))
            .with_path(Source::Standings, dir.join(&self.sources.standings))
    }
}
