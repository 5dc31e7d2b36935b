//! CSV source identifiers and their on-disk locations.

use std::fmt;
use std::path::{Path, PathBuf};

/// One of the five CSV sources the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Discipline,
    PlayerStats,
    Nationalities,
    Fixtures,
    Standings,
}

impl Source {
    pub const ALL: [Source; 5] = [
        Source::Discipline,
        Source::PlayerStats,
        Source::Nationalities,
        Source::Fixtures,
        Source::Standings,
    ];

    /// File name used when no override is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Source::Discipline => "discipline.csv",
            Source::PlayerStats => "player_stat.csv",
            Source::Nationalities => "nationalities.csv",
            Source::Fixtures => "fixtures.csv",
            Source::Standings => "table.csv",
        }
    }

    /// Number of physical lines preceding the header row.
    pub fn header_offset(self) -> usize {
        match self {
            Source::Discipline => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Discipline => "discipline",
            Source::PlayerStats => "player stats",
            Source::Nationalities => "nationalities",
            Source::Fixtures => "fixtures",
            Source::Standings => "standings",
        };
        f.write_str(name)
    }
}

/// Resolved file paths for every source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub discipline: PathBuf,
    pub player_stats: PathBuf,
    pub nationalities: PathBuf,
    pub fixtures: PathBuf,
    pub standings: PathBuf,
}

impl SourcePaths {
    /// All sources under `dir` with their default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            discipline: dir.join(Source::Discipline.default_file_name()),
            player_stats: dir.join(Source::PlayerStats.default_file_name()),
            nationalities: dir.join(Source::Nationalities.default_file_name()),
            fixtures: dir.join(Source::Fixtures.default_file_name()),
            standings: dir.join(Source::Standings.default_file_name()),
        }
    }

    pub fn path(&self, source: Source) -> &Path {
        match source {
            Source::Discipline => &self.discipline,
            Source::PlayerStats => &self.player_stats,
            Source::Nationalities => &self.nationalities,
            Source::Fixtures => &self.fixtures,
            Source::Standings => &self.standings,
        }
    }

    /// Override the path of a single source.
    pub fn with_path(mut self, source: Source, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match source {
            Source::Discipline => self.discipline = path,
            Source::PlayerStats => self.player_stats = path,
            Source::Nationalities => self.nationalities = path,
            Source::Fixtures => self.fixtures = path,
            Source::Standings => self.standings = path,
        }
        self
    }
}
