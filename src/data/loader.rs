//! CSV Data Loader Module
//! Reads the five league sources with Polars and applies per-source cleanup.

use super::schema::{self, NATIONALITY_KEYS, WEEK};
use super::source::{Source, SourcePaths};
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Rows sampled when inferring column types.
const INFER_SCHEMA_ROWS: usize = 10000;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{table} source not found at {}", path.display())]
    NotFound { table: Source, path: PathBuf },
    #[error("failed to read {table} CSV {}: {error}", path.display())]
    Read {
        table: Source,
        path: PathBuf,
        #[source]
        error: PolarsError,
    },
    #[error("{table} CSV is missing required column `{column}`")]
    MissingColumn { table: Source, column: String },
    #[error("{table} CSV column `{column}` could not be converted: {message}")]
    Coercion {
        table: Source,
        column: String,
        message: String,
    },
}

impl LoadError {
    /// The source that failed.
    pub fn source_table(&self) -> Source {
        match self {
            LoadError::NotFound { table, .. }
            | LoadError::Read { table, .. }
            | LoadError::MissingColumn { table, .. }
            | LoadError::Coercion { table, .. } => *table,
        }
    }
}

/// All tables of a session, immutable after load.
#[derive(Debug, Clone)]
pub struct LeagueTables {
    pub standings: DataFrame,
    pub fixtures: DataFrame,
    pub player_stats: DataFrame,
    pub discipline: DataFrame,
    pub nationalities: DataFrame,
}

/// Loads the league sources from disk.
#[derive(Debug, Clone)]
pub struct LeagueLoader {
    paths: SourcePaths,
}

impl LeagueLoader {
    pub fn new(paths: SourcePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SourcePaths {
        &self.paths
    }

    /// Load every source; the first failing source aborts the load.
    pub fn load_all(&self) -> Result<LeagueTables, LoadError> {
        let tables = LeagueTables {
            discipline: self.load_discipline()?,
            player_stats: self.load_player_stats()?,
            nationalities: self.load_nationalities()?,
            fixtures: self.load_fixtures()?,
            standings: self.load_standings()?,
        };
        info!("all league sources loaded");
        Ok(tables)
    }

    /// League table with placeholder index columns removed.
    pub fn load_standings(&self) -> Result<DataFrame, LoadError> {
        let source = Source::Standings;
        let df = self.read_csv(source)?;
        let df = drop_placeholder_columns(df).map_err(|e| self.read_error(source, e))?;
        require_columns(&df, source)?;
        log_loaded(source, &df);
        Ok(df)
    }

    /// Fixtures with placeholder columns removed and `Wk` as Int64.
    pub fn load_fixtures(&self) -> Result<DataFrame, LoadError> {
        let source = Source::Fixtures;
        let df = self.read_csv(source)?;
        let df = drop_placeholder_columns(df).map_err(|e| self.read_error(source, e))?;
        require_columns(&df, source)?;
        let df = coerce_week(df)?;
        log_loaded(source, &df);
        Ok(df)
    }

    /// Player stats without any row that has a missing field.
    pub fn load_player_stats(&self) -> Result<DataFrame, LoadError> {
        let source = Source::PlayerStats;
        let df = self.read_csv(source)?;
        require_columns(&df, source)?;

        let before = df.height();
        let df = drop_incomplete_rows(&df).map_err(|e| self.read_error(source, e))?;
        if df.height() < before {
            debug!(dropped = before - df.height(), "dropped incomplete player rows");
        }
        log_loaded(source, &df);
        Ok(df)
    }

    /// Discipline records; the header sits on the second line of the file.
    pub fn load_discipline(&self) -> Result<DataFrame, LoadError> {
        let source = Source::Discipline;
        let df = self.read_csv(source)?;
        require_columns(&df, source)?;
        log_loaded(source, &df);
        Ok(df)
    }

    pub fn load_nationalities(&self) -> Result<DataFrame, LoadError> {
        let source = Source::Nationalities;
        let df = self.read_csv(source)?;
        if !NATIONALITY_KEYS.iter().any(|key| df.column(key).is_ok()) {
            return Err(LoadError::MissingColumn {
                table: source,
                column: NATIONALITY_KEYS.join("` or `"),
            });
        }
        log_loaded(source, &df);
        Ok(df)
    }

    fn read_csv(&self, source: Source) -> Result<DataFrame, LoadError> {
        let path = self.paths.path(source);
        if !path.is_file() {
            return Err(LoadError::NotFound {
                table: source,
                path: path.to_path_buf(),
            });
        }

        debug!(%source, path = %path.display(), "reading CSV");
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_skip_rows(source.header_offset())
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|e| self.read_error(source, e))
    }

    fn read_error(&self, source: Source, error: PolarsError) -> LoadError {
        LoadError::Read {
            table: source,
            path: self.paths.path(source).to_path_buf(),
            error,
        }
    }
}

fn log_loaded(source: Source, df: &DataFrame) {
    info!(
        %source,
        rows = df.height(),
        columns = df.width(),
        "loaded source"
    );
}

fn require_columns(df: &DataFrame, source: Source) -> Result<(), LoadError> {
    match schema::required_columns(source)
        .iter()
        .find(|name| df.column(name).is_err())
    {
        Some(missing) => Err(LoadError::MissingColumn {
            table: source,
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}

/// Remove columns left behind by anonymous index columns.
pub fn drop_placeholder_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    let (keep, dropped): (Vec<String>, Vec<String>) = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .partition(|name| !schema::is_placeholder_column(name));

    if dropped.is_empty() {
        return Ok(df);
    }
    debug!(?dropped, "dropping placeholder columns");
    df.select(keep)
}

/// Strictly cast the week column to Int64; nulls are rejected too.
fn coerce_week(mut df: DataFrame) -> Result<DataFrame, LoadError> {
    let coercion = |message: String| LoadError::Coercion {
        table: Source::Fixtures,
        column: WEEK.to_string(),
        message,
    };

    let week = df
        .column(WEEK)
        .map_err(|e| coercion(e.to_string()))?
        .as_materialized_series()
        .rechunk()
        .strict_cast(&DataType::Int64)
        .map_err(|e| coercion(e.to_string()))?;

    let missing = week.null_count();
    if missing > 0 {
        return Err(coercion(format!("{} rows have no week number", missing)));
    }

    df.with_column(week).map_err(|e| coercion(e.to_string()))?;
    Ok(df)
}

/// Keep only rows where every column holds a value (NaN counts as missing).
pub fn drop_incomplete_rows(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), true, df.height());

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if series.null_count() > 0 {
            keep = &keep & &series.is_not_null();
        }
        if series.dtype().is_float() {
            keep = &keep & &series.is_not_nan()?;
        }
    }

    df.filter(&keep)
}
