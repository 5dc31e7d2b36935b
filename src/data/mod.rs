//! Data module - CSV loading and per-view aggregation

mod aggregate;
mod loader;
pub mod schema;
mod source;

pub use aggregate::{
    cell_text, AggregateError, AggregateResult, Aggregator, PlayerProfile, RadarSeries,
    RadarTrace, ScatterPoint,
};
pub use loader::{drop_incomplete_rows, drop_placeholder_columns, LeagueLoader, LeagueTables, LoadError};
pub use source::{Source, SourcePaths};
