//! Aggregation Module
//! One pure function per dashboard view. Every function takes the loaded
//! table(s) by reference and returns a new frame or series; inputs are never
//! mutated.

use super::schema::*;
use polars::prelude::*;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
}

pub type AggregateResult<T> = Result<T, AggregateError>;

/// Metric vector of one player in a radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarTrace {
    pub player: String,
    pub values: Vec<f64>,
}

/// Radar input: one trace per matched player plus the shared axis scale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarSeries {
    pub metrics: Vec<String>,
    pub traces: Vec<RadarTrace>,
    /// Largest value across every trace and metric; 0 when there are no traces.
    pub scale: f64,
}

/// Player Dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub position: String,
    pub nation: String,
    pub age: String,
    pub squad: String,
    pub goals: f64,
    pub assists: f64,
    pub goals_assists: f64,
    pub non_penalty_goals: f64,
    pub expected_goals: f64,
    pub progressive_passes: f64,
}

/// One marker of the goal contribution scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub player: String,
    pub assists: f64,
    pub goals: f64,
    pub contribution: f64,
}

/// Turns loaded tables into the tables and series each view renders.
pub struct Aggregator;

impl Aggregator {
    /// Keep standings rows whose team is selected. Unknown names match nothing.
    pub fn filter_teams<S: AsRef<str>>(
        standings: &DataFrame,
        selected: &[S],
    ) -> AggregateResult<DataFrame> {
        ensure_columns(standings, &[TEAM])?;
        let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();

        let teams = standings.column(TEAM)?.cast(&DataType::String)?;
        let mask: BooleanChunked = teams
            .str()?
            .into_iter()
            .map(|team| team.is_some_and(|t| selected.contains(t)))
            .collect();

        Ok(standings.filter(&mask)?)
    }

    /// Add `GD = GF - GA` and `xGD = xG - xGA`.
    pub fn with_goal_diffs(standings: &DataFrame) -> AggregateResult<DataFrame> {
        ensure_columns(
            standings,
            &[GOALS_FOR, GOALS_AGAINST, EXPECTED_GOALS, EXPECTED_GOALS_AGAINST],
        )?;

        let df = standings
            .clone()
            .lazy()
            .with_columns([
                (col(GOALS_FOR) - col(GOALS_AGAINST)).alias(GOAL_DIFF),
                (col(EXPECTED_GOALS) - col(EXPECTED_GOALS_AGAINST)).alias(EXPECTED_GOAL_DIFF),
            ])
            .collect()?;
        Ok(df)
    }

    /// Card totals per squad with `DisciplineScore = CrdY + CrdR`, sorted by squad.
    pub fn discipline_by_club(discipline: &DataFrame) -> AggregateResult<DataFrame> {
        ensure_columns(discipline, &[SQUAD, YELLOW_CARDS, RED_CARDS])?;

        let df = discipline
            .clone()
            .lazy()
            .group_by([col(SQUAD)])
            .agg([col(YELLOW_CARDS).sum(), col(RED_CARDS).sum()])
            .with_column((col(YELLOW_CARDS) + col(RED_CARDS)).alias(DISCIPLINE_SCORE))
            .sort_by_exprs([col(SQUAD)], SortMultipleOptions::default())
            .collect()?;
        Ok(df)
    }

    /// Fixtures of a single match week.
    pub fn filter_by_week(fixtures: &DataFrame, week: i64) -> AggregateResult<DataFrame> {
        ensure_columns(fixtures, &[WEEK])?;

        let df = fixtures
            .clone()
            .lazy()
            .filter(col(WEEK).eq(lit(week)))
            .collect()?;
        Ok(df)
    }

    /// First `n` rows by `column` descending. Ties keep their original order.
    pub fn top_n(df: &DataFrame, column: &str, n: usize) -> AggregateResult<DataFrame> {
        ensure_columns(df, &[column])?;
        let n = n.min(df.height());

        let ranked = df
            .clone()
            .lazy()
            .sort_by_exprs(
                [col(column)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .limit(n as IdxSize)
            .collect()?;
        Ok(ranked)
    }

    /// Add `GoalContribution = Gls + Ast` and keep the top `k` players by it.
    pub fn goal_contribution(player_stats: &DataFrame, k: usize) -> AggregateResult<DataFrame> {
        ensure_columns(player_stats, &[GOALS, ASSISTS])?;

        let augmented = player_stats
            .clone()
            .lazy()
            .with_column((col(GOALS) + col(ASSISTS)).alias(GOAL_CONTRIBUTION))
            .collect()?;
        Self::top_n(&augmented, GOAL_CONTRIBUTION, k)
    }

    /// Players per nation.
    ///
    /// Sums `# Players` when the table carries it, otherwise counts rows.
    /// Nation keys are used exactly as written.
    pub fn nationality_counts(nationalities: &DataFrame) -> AggregateResult<BTreeMap<String, u64>> {
        let key = NATIONALITY_KEYS
            .iter()
            .find(|key| nationalities.column(key).is_ok())
            .ok_or_else(|| AggregateError::UnknownColumn(NATION.to_string()))?;

        let keys = nationalities.column(key)?.cast(&DataType::String)?;
        let counts = match nationalities.column(PLAYER_COUNT) {
            Ok(column) => Some(column.cast(&DataType::Int64)?),
            Err(_) => None,
        };
        let counts = counts.as_ref().map(|c| c.i64()).transpose()?;

        let mut out = BTreeMap::new();
        for (i, nation) in keys.str()?.into_iter().enumerate() {
            let Some(nation) = nation else {
                continue;
            };
            let add = match counts {
                Some(ca) => ca.get(i).unwrap_or(0).max(0) as u64,
                None => 1,
            };
            *out.entry(nation.to_string()).or_insert(0) += add;
        }
        Ok(out)
    }

    /// `nationality_counts` as a `[Nation, # Players]` frame, largest count
    /// first; equal counts stay alphabetical.
    pub fn nationality_table(nationalities: &DataFrame) -> AggregateResult<DataFrame> {
        let mut rows: Vec<(String, u64)> =
            Self::nationality_counts(nationalities)?.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        let (nations, counts): (Vec<String>, Vec<u64>) = rows.into_iter().unzip();

        Ok(DataFrame::new(vec![
            Column::new(NATION.into(), nations),
            Column::new(PLAYER_COUNT.into(), counts),
        ])?)
    }

    /// Metric vectors of the selected players, in `metrics` order.
    ///
    /// Unknown or repeated player names are skipped. A player appearing on
    /// several rows contributes the first row.
    pub fn radar_series<S: AsRef<str>, M: AsRef<str>>(
        player_stats: &DataFrame,
        selected: &[S],
        metrics: &[M],
    ) -> AggregateResult<RadarSeries> {
        let metrics: Vec<&str> = metrics.iter().map(AsRef::as_ref).collect();
        ensure_columns(player_stats, &[PLAYER])?;
        ensure_columns(player_stats, &metrics)?;

        let metric_columns = metrics
            .iter()
            .map(|m| player_stats.column(m)?.cast(&DataType::Float64))
            .collect::<PolarsResult<Vec<_>>>()?;
        let players = player_stats.column(PLAYER)?.cast(&DataType::String)?;
        let players = players.str()?;

        let mut seen = HashSet::new();
        let mut traces = Vec::new();
        for name in selected.iter().map(AsRef::as_ref) {
            if !seen.insert(name) {
                continue;
            }
            let Some(row) = players.into_iter().position(|p| p == Some(name)) else {
                debug!(player = name, "radar player not found");
                continue;
            };

            let values = metric_columns
                .iter()
                .map(|c| Ok(c.f64()?.get(row).unwrap_or(0.0)))
                .collect::<PolarsResult<Vec<f64>>>()?;
            traces.push(RadarTrace {
                player: name.to_string(),
                values,
            });
        }

        let scale = traces
            .iter()
            .flat_map(|t| t.values.iter().copied())
            .fold(0.0, f64::max);

        Ok(RadarSeries {
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
            traces,
            scale,
        })
    }

    /// First row of the named player, if present.
    pub fn player_profile(
        player_stats: &DataFrame,
        player: &str,
    ) -> AggregateResult<Option<PlayerProfile>> {
        ensure_columns(player_stats, schema_player_columns())?;

        let players = player_stats.column(PLAYER)?.cast(&DataType::String)?;
        let Some(row) = players.str()?.into_iter().position(|p| p == Some(player)) else {
            return Ok(None);
        };

        let text = |name: &str| -> AggregateResult<String> {
            Ok(cell_text(player_stats.column(name)?, row))
        };
        let number = |name: &str| -> AggregateResult<f64> {
            let column = player_stats.column(name)?.cast(&DataType::Float64)?;
            Ok(column.f64()?.get(row).unwrap_or(0.0))
        };

        Ok(Some(PlayerProfile {
            name: text(PLAYER)?,
            position: text(POSITION)?,
            nation: text(NATION)?,
            age: text(AGE)?,
            squad: text(SQUAD)?,
            goals: number(GOALS)?,
            assists: number(ASSISTS)?,
            goals_assists: number(GOALS_ASSISTS)?,
            non_penalty_goals: number(NON_PENALTY_GOALS)?,
            expected_goals: number(EXPECTED_GOALS)?,
            progressive_passes: number(PROGRESSIVE_PASSES)?,
        }))
    }

    /// Unique non-null values of a column in first-appearance order.
    pub fn distinct_values(df: &DataFrame, column: &str) -> AggregateResult<Vec<String>> {
        ensure_columns(df, &[column])?;

        let values = df.column(column)?.cast(&DataType::String)?;
        let mut seen = HashSet::new();
        Ok(values
            .str()?
            .into_iter()
            .flatten()
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect())
    }

    /// Unique match weeks in first-appearance order.
    pub fn distinct_weeks(fixtures: &DataFrame) -> AggregateResult<Vec<i64>> {
        ensure_columns(fixtures, &[WEEK])?;

        let weeks = fixtures.column(WEEK)?.cast(&DataType::Int64)?;
        let mut seen = HashSet::new();
        Ok(weeks
            .i64()?
            .into_iter()
            .flatten()
            .filter(|w| seen.insert(*w))
            .collect())
    }

    /// `(label, value)` pairs in row order; rows with a missing value are skipped.
    pub fn ranked_series(
        df: &DataFrame,
        label_col: &str,
        value_col: &str,
    ) -> AggregateResult<Vec<(String, f64)>> {
        ensure_columns(df, &[label_col, value_col])?;

        let labels = df.column(label_col)?;
        let values = df.column(value_col)?.cast(&DataType::Float64)?;
        let values = values.f64()?;

        Ok((0..df.height())
            .filter_map(|i| {
                let v = values.get(i)?;
                if v.is_nan() {
                    return None;
                }
                Some((cell_text(labels, i), v))
            })
            .collect())
    }

    /// Long `[group, metric, value]` frame feeding the grouped bar charts.
    ///
    /// Rows run metric by metric in `value_cols` order; null and NaN cells
    /// are left out.
    pub fn stack_to_long<S: AsRef<str>>(
        df: &DataFrame,
        group_col: &str,
        value_cols: &[S],
    ) -> AggregateResult<DataFrame> {
        let value_cols: Vec<&str> = value_cols.iter().map(AsRef::as_ref).collect();
        ensure_columns(df, &[group_col])?;
        ensure_columns(df, &value_cols)?;

        let labels = df.column(group_col)?;
        let mut groups: Vec<String> = Vec::new();
        let mut metrics: Vec<&str> = Vec::new();
        let mut values: Vec<f64> = Vec::new();

        for metric in value_cols {
            let cast = df.column(metric)?.cast(&DataType::Float64)?;
            for (row, value) in cast.f64()?.into_iter().enumerate() {
                let Some(value) = value.filter(|v| !v.is_nan()) else {
                    continue;
                };
                groups.push(cell_text(labels, row));
                metrics.push(metric);
                values.push(value);
            }
        }

        Ok(DataFrame::new(vec![
            Column::new("group".into(), groups),
            Column::new("metric".into(), metrics),
            Column::new("value".into(), values),
        ])?)
    }

    /// Markers for the goal contribution scatter; expects `goal_contribution` output.
    pub fn scatter_points(ranked: &DataFrame) -> AggregateResult<Vec<ScatterPoint>> {
        ensure_columns(ranked, &[PLAYER, ASSISTS, GOALS, GOAL_CONTRIBUTION])?;

        let players = ranked.column(PLAYER)?;
        let numeric = |name: &str| -> AggregateResult<Float64Chunked> {
            Ok(ranked.column(name)?.cast(&DataType::Float64)?.f64()?.clone())
        };
        let assists = numeric(ASSISTS)?;
        let goals = numeric(GOALS)?;
        let contribution = numeric(GOAL_CONTRIBUTION)?;

        Ok((0..ranked.height())
            .map(|i| ScatterPoint {
                player: cell_text(players, i),
                assists: assists.get(i).unwrap_or(0.0),
                goals: goals.get(i).unwrap_or(0.0),
                contribution: contribution.get(i).unwrap_or(0.0),
            })
            .collect())
    }
}

/// Display text of a single cell; nulls render as an empty string.
pub fn cell_text(column: &Column, row: usize) -> String {
    match column.get(row) {
        Ok(AnyValue::Null) | Err(_) => String::new(),
        Ok(value) => value.to_string().trim_matches('"').to_string(),
    }
}

fn schema_player_columns() -> &'static [&'static str] {
    &[
        PLAYER,
        POSITION,
        NATION,
        AGE,
        SQUAD,
        GOALS,
        ASSISTS,
        GOALS_ASSISTS,
        NON_PENALTY_GOALS,
        EXPECTED_GOALS,
        PROGRESSIVE_PASSES,
    ]
}

fn ensure_columns(df: &DataFrame, names: &[&str]) -> AggregateResult<()> {
    match names.iter().find(|name| df.column(name).is_err()) {
        Some(missing) => Err(AggregateError::UnknownColumn(missing.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings() -> DataFrame {
        df!(
            "Team" => ["A", "B"],
            "GF" => [10i64, 5],
            "GA" => [3i64, 5],
            "xG" => [8.5f64, 5.0],
            "xGA" => [4.2f64, 5.0],
        )
        .unwrap()
    }

    fn f64_at(df: &DataFrame, name: &str, row: usize) -> f64 {
        df.column(name)
            .unwrap()
            .cast(&DataType::Float64)
            .unwrap()
            .f64()
            .unwrap()
            .get(row)
            .unwrap()
    }

    fn strings(df: &DataFrame, name: &str) -> Vec<String> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn filter_then_goal_diffs() {
        let filtered = Aggregator::filter_teams(&standings(), &["A"]).unwrap();
        let df = Aggregator::with_goal_diffs(&filtered).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(strings(&df, "Team"), vec!["A"]);
        assert_eq!(f64_at(&df, "GD", 0), 7.0);
        assert!((f64_at(&df, "xGD", 0) - 4.3).abs() < 1e-9);
    }

    #[test]
    fn filter_with_all_teams_is_identity() {
        let df = standings();
        let filtered = Aggregator::filter_teams(&df, &["A", "B"]).unwrap();
        assert!(filtered.equals(&df));
    }

    #[test]
    fn filter_with_empty_selection_is_empty() {
        let none: [&str; 0] = [];
        let filtered = Aggregator::filter_teams(&standings(), &none).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(filtered.width(), 5);
    }

    #[test]
    fn filter_with_unknown_team_matches_nothing() {
        let filtered = Aggregator::filter_teams(&standings(), &["Nowhere FC"]).unwrap();
        assert_eq!(filtered.height(), 0);
    }

    #[test]
    fn goal_diffs_match_inputs_on_every_row() {
        let df = Aggregator::with_goal_diffs(&standings()).unwrap();
        for row in 0..df.height() {
            assert_eq!(
                f64_at(&df, "GD", row),
                f64_at(&df, "GF", row) - f64_at(&df, "GA", row)
            );
            assert_eq!(
                f64_at(&df, "xGD", row),
                f64_at(&df, "xG", row) - f64_at(&df, "xGA", row)
            );
        }
    }

    #[test]
    fn discipline_groups_and_sorts_by_squad() {
        let discipline = df!(
            "Squad" => ["Mainz", "Bayern", "Mainz"],
            "CrdY" => [4i64, 2, 3],
            "CrdR" => [1i64, 0, 0],
        )
        .unwrap();

        let df = Aggregator::discipline_by_club(&discipline).unwrap();
        assert_eq!(strings(&df, "Squad"), vec!["Bayern", "Mainz"]);
        assert_eq!(f64_at(&df, "CrdY", 1), 7.0);
        assert_eq!(f64_at(&df, "DisciplineScore", 1), 8.0);
        assert_eq!(f64_at(&df, "DisciplineScore", 0), 2.0);
    }

    #[test]
    fn top_n_orders_descending() {
        let players = df!(
            "Player" => ["P1", "P2", "P3"],
            "Gls" => [5i64, 9, 2],
        )
        .unwrap();

        let top = Aggregator::top_n(&players, "Gls", 2).unwrap();
        assert_eq!(strings(&top, "Player"), vec!["P2", "P1"]);
    }

    #[test]
    fn top_n_breaks_ties_by_row_order() {
        let players = df!(
            "Player" => ["P1", "P2", "P3", "P4"],
            "Gls" => [3i64, 7, 3, 3],
        )
        .unwrap();

        let top = Aggregator::top_n(&players, "Gls", 3).unwrap();
        assert_eq!(strings(&top, "Player"), vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn top_n_larger_than_table_returns_all_rows() {
        let players = df!("Player" => ["P1", "P2"], "Gls" => [1i64, 2]).unwrap();
        let top = Aggregator::top_n(&players, "Gls", 500).unwrap();
        assert_eq!(top.height(), 2);
    }

    #[test]
    fn top_n_unknown_column_is_an_error() {
        let players = df!("Player" => ["P1"], "Gls" => [1i64]).unwrap();
        let err = Aggregator::top_n(&players, "Goals", 1).unwrap_err();
        assert!(matches!(err, AggregateError::UnknownColumn(c) if c == "Goals"));
    }

    #[test]
    fn goal_contribution_adds_and_ranks() {
        let players = df!(
            "Player" => ["P1", "P2", "P3"],
            "Gls" => [5i64, 2, 1],
            "Ast" => [1i64, 6, 0],
        )
        .unwrap();

        let ranked = Aggregator::goal_contribution(&players, 2).unwrap();
        assert_eq!(strings(&ranked, "Player"), vec!["P2", "P1"]);
        assert_eq!(f64_at(&ranked, "GoalContribution", 0), 8.0);

        let points = Aggregator::scatter_points(&ranked).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].player, "P1");
        assert_eq!(points[1].goals, 5.0);
        assert_eq!(points[1].contribution, 6.0);
    }

    #[test]
    fn goal_contribution_does_not_touch_input() {
        let players = df!("Player" => ["P1"], "Gls" => [1i64], "Ast" => [1i64]).unwrap();
        Aggregator::goal_contribution(&players, 20).unwrap();
        assert!(players.column("GoalContribution").is_err());
    }

    #[test]
    fn nationality_counts_sum_player_column() {
        let nations = df!(
            "Nation" => ["Germany", "France", "Germany"],
            "# Players" => [200i64, 30, 5],
        )
        .unwrap();

        let counts = Aggregator::nationality_counts(&nations).unwrap();
        assert_eq!(counts.get("Germany"), Some(&205));
        assert_eq!(counts.get("France"), Some(&30));
    }

    #[test]
    fn nationality_counts_fall_back_to_row_frequency() {
        let nations = df!("Nationality" => ["Austria", "Austria", "Japan"]).unwrap();

        let counts = Aggregator::nationality_counts(&nations).unwrap();
        assert_eq!(counts.get("Austria"), Some(&2));
        assert_eq!(counts.get("Japan"), Some(&1));
    }

    #[test]
    fn nationality_counts_keep_raw_keys() {
        let nations = df!("Nation" => ["GER", "GER "], "# Players" => [3i64, 4]).unwrap();

        let counts = Aggregator::nationality_counts(&nations).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("GER"), Some(&3));
        assert_eq!(counts.get("GER "), Some(&4));
    }

    #[test]
    fn nationality_table_ranks_counts() {
        let nations = df!(
            "Nation" => ["Austria", "Germany", "Japan", "Germany"],
            "# Players" => [30i64, 200, 30, 80],
        )
        .unwrap();

        let table = Aggregator::nationality_table(&nations).unwrap();
        assert_eq!(strings(&table, "Nation"), vec!["Germany", "Austria", "Japan"]);
        assert_eq!(f64_at(&table, "# Players", 0), 280.0);
        assert_eq!(f64_at(&table, "# Players", 2), 30.0);
    }

    #[test]
    fn radar_series_follows_metric_order() {
        let players = df!(
            "Player" => ["P1", "P2"],
            "Gls" => [10i64, 4],
            "Ast" => [3i64, 12],
            "xG" => [8.1f64, 2.5],
        )
        .unwrap();

        let radar = Aggregator::radar_series(&players, &["P2", "P1"], &["xG", "Gls", "Ast"]).unwrap();
        assert_eq!(radar.metrics, vec!["xG", "Gls", "Ast"]);
        assert_eq!(radar.traces[0].player, "P2");
        assert_eq!(radar.traces[0].values, vec![2.5, 4.0, 12.0]);
        assert_eq!(radar.traces[1].values, vec![8.1, 10.0, 3.0]);
        assert_eq!(radar.scale, 12.0);
    }

    #[test]
    fn radar_series_without_players_is_empty() {
        let players = df!("Player" => ["P1"], "Gls" => [10i64]).unwrap();
        let none: [&str; 0] = [];

        let radar = Aggregator::radar_series(&players, &none, &["Gls"]).unwrap();
        assert!(radar.traces.is_empty());
        assert_eq!(radar.scale, 0.0);
    }

    #[test]
    fn radar_series_skips_unknown_players() {
        let players = df!("Player" => ["P1"], "Gls" => [10i64]).unwrap();
        let radar = Aggregator::radar_series(&players, &["Ghost", "P1"], &["Gls"]).unwrap();
        assert_eq!(radar.traces.len(), 1);
        assert_eq!(radar.traces[0].player, "P1");
    }

    #[test]
    fn radar_series_uses_first_row_once_per_player() {
        let players = df!("Player" => ["P1", "P1"], "Gls" => [10i64, 3]).unwrap();
        let radar = Aggregator::radar_series(&players, &["P1", "P1"], &["Gls"]).unwrap();
        assert_eq!(radar.traces.len(), 1);
        assert_eq!(radar.traces[0].values, vec![10.0]);
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let df = df!("Squad" => ["Köln", "Bochum", "Köln", "Augsburg"]).unwrap();
        let values = Aggregator::distinct_values(&df, "Squad").unwrap();
        assert_eq!(values, vec!["Köln", "Bochum", "Augsburg"]);
    }

    #[test]
    fn stack_to_long_groups_by_metric() {
        let long = Aggregator::stack_to_long(&standings(), "Team", &["GF", "xG"]).unwrap();
        assert_eq!(long.height(), 4);
        assert_eq!(strings(&long, "group"), vec!["A", "B", "A", "B"]);
        assert_eq!(strings(&long, "metric"), vec!["GF", "GF", "xG", "xG"]);
        assert_eq!(f64_at(&long, "value", 2), 8.5);
    }

    #[test]
    fn stack_to_long_skips_missing_values() {
        let df = df!(
            "Team" => ["A", "B"],
            "xG" => [Some(1.5f64), None],
            "xGA" => [f64::NAN, 2.0],
        )
        .unwrap();

        let long = Aggregator::stack_to_long(&df, "Team", &["xG", "xGA"]).unwrap();
        assert_eq!(strings(&long, "group"), vec!["A", "B"]);
        assert_eq!(strings(&long, "metric"), vec!["xG", "xGA"]);
    }

    #[test]
    fn stack_to_long_unknown_column_is_an_error() {
        let err = Aggregator::stack_to_long(&standings(), "Team", &["GF", "Shots"]).unwrap_err();
        assert!(matches!(err, AggregateError::UnknownColumn(c) if c == "Shots"));
    }

    #[test]
    fn ranked_series_pairs_labels_with_values() {
        let series = Aggregator::ranked_series(&standings(), "Team", "GF").unwrap();
        assert_eq!(
            series,
            vec![("A".to_string(), 10.0), ("B".to_string(), 5.0)]
        );
    }
}
