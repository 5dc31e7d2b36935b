//! Football Analytics Dashboard
//!
//! Loads league standings, fixtures, player stats, discipline records and
//! nationality counts from CSV and prepares the tables and series each
//! dashboard page renders.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;

pub use config::DashboardConfig;
pub use data::{Aggregator, LeagueLoader, LeagueTables, LoadError, Source, SourcePaths};
