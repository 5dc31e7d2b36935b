use std::path::PathBuf;

use football_dashboard::data::{Aggregator, LeagueLoader, LeagueTables, SourcePaths};
use polars::prelude::*;

fn league() -> LeagueTables {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests");
    dir.push("fixtures");
    dir.push("league");
    LeagueLoader::new(SourcePaths::in_dir(dir))
        .load_all()
        .expect("fixture league should load")
}

fn f64s(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .expect("column should exist")
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.expect("no nulls"))
        .collect()
}

fn texts(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .expect("column should exist")
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

#[test]
fn week_filters_partition_the_fixtures() {
    let tables = league();
    let weeks = Aggregator::distinct_weeks(&tables.fixtures).unwrap();
    assert_eq!(weeks, vec![1, 2, 3]);

    let mut rebuilt: Vec<(i64, String)> = Vec::new();
    for week in &weeks {
        let filtered = Aggregator::filter_by_week(&tables.fixtures, *week).unwrap();
        let filtered_weeks = f64s(&filtered, "Wk");
        assert!(filtered_weeks.iter().all(|w| *w == *week as f64));
        for home in texts(&filtered, "Home") {
            rebuilt.push((*week, home));
        }
    }

    let mut original: Vec<(i64, String)> = f64s(&tables.fixtures, "Wk")
        .into_iter()
        .map(|w| w as i64)
        .zip(texts(&tables.fixtures, "Home"))
        .collect();
    original.sort();
    rebuilt.sort();
    assert_eq!(rebuilt, original);
}

#[test]
fn unknown_week_returns_no_rows() {
    let tables = league();
    let filtered = Aggregator::filter_by_week(&tables.fixtures, 40).unwrap();
    assert_eq!(filtered.height(), 0);
}

#[test]
fn top_scorers_are_sorted_descending() {
    let tables = league();
    let top = Aggregator::top_n(&tables.player_stats, "Gls", 10).unwrap();

    assert_eq!(top.height(), 5);
    let goals = f64s(&top, "Gls");
    assert!(goals.windows(2).all(|pair| pair[0] >= pair[1]));
    // Equal goal tallies keep file order.
    assert_eq!(
        texts(&top, "Player")[..2],
        ["Niclas Füllkrug".to_string(), "Christopher Nkunku".to_string()]
    );
}

#[test]
fn top_xg_uses_float_column() {
    let tables = league();
    let top = Aggregator::top_n(&tables.player_stats, "xG", 1).unwrap();
    assert_eq!(texts(&top, "Player"), vec!["Christopher Nkunku"]);
}

#[test]
fn discipline_totals_are_preserved_after_grouping() {
    let tables = league();
    let by_club = Aggregator::discipline_by_club(&tables.discipline).unwrap();

    assert_eq!(texts(&by_club, "Squad"), vec!["Augsburg", "Bayern Munich", "Bochum"]);

    let yellow = f64s(&by_club, "CrdY");
    let red = f64s(&by_club, "CrdR");
    let score = f64s(&by_club, "DisciplineScore");
    for i in 0..by_club.height() {
        assert_eq!(score[i], yellow[i] + red[i]);
    }

    let input_yellow: f64 = f64s(&tables.discipline, "CrdY").iter().sum();
    assert_eq!(yellow.iter().sum::<f64>(), input_yellow);
    assert_eq!(score[0], 90.0);
}

#[test]
fn standings_goal_diffs_for_selected_teams() {
    let tables = league();
    let filtered =
        Aggregator::filter_teams(&tables.standings, &["Dortmund", "Union Berlin"]).unwrap();
    let df = Aggregator::with_goal_diffs(&filtered).unwrap();

    assert_eq!(texts(&df, "Team"), vec!["Dortmund", "Union Berlin"]);
    assert_eq!(f64s(&df, "GD"), vec![39.0, 13.0]);
    let xgd = f64s(&df, "xGD");
    assert!((xgd[0] - 24.2).abs() < 1e-9);
    assert!((xgd[1] - -0.5).abs() < 1e-9);
}

#[test]
fn filtering_with_every_team_keeps_the_table() {
    let tables = league();
    let teams = Aggregator::distinct_values(&tables.standings, "Team").unwrap();
    let filtered = Aggregator::filter_teams(&tables.standings, &teams).unwrap();
    assert!(filtered.equals(&tables.standings));
}

#[test]
fn goal_contribution_ranks_goals_plus_assists() {
    let tables = league();
    let ranked = Aggregator::goal_contribution(&tables.player_stats, 2).unwrap();

    assert_eq!(texts(&ranked, "Player"), vec!["Randal Kolo Muani", "Jamal Musiala"]);
    assert_eq!(f64s(&ranked, "GoalContribution"), vec![26.0, 22.0]);

    let everyone = Aggregator::goal_contribution(&tables.player_stats, 500).unwrap();
    assert_eq!(everyone.height(), 5);
}

#[test]
fn nationality_counts_come_from_player_column() {
    let tables = league();
    let counts = Aggregator::nationality_counts(&tables.nationalities).unwrap();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts["de GER"], 280);
    assert_eq!(counts["at AUT"], 30);
}

#[test]
fn nationality_table_lists_every_nation_by_count() {
    let tables = league();
    let table = Aggregator::nationality_table(&tables.nationalities).unwrap();

    assert_eq!(texts(&table, "Nation"), vec!["de GER", "at AUT", "fr FRA"]);
    assert_eq!(f64s(&table, "# Players"), vec![280.0, 30.0, 25.0]);
}

#[test]
fn radar_scale_spans_selected_players() {
    let tables = league();
    let radar = Aggregator::radar_series(
        &tables.player_stats,
        &["Jamal Musiala", "Serge Gnabry"],
        &["Gls", "Ast", "PrgP"],
    )
    .unwrap();

    assert_eq!(radar.traces.len(), 2);
    assert_eq!(radar.traces[0].values, vec![12.0, 10.0, 100.0]);
    assert_eq!(radar.traces[1].values, vec![14.0, 5.0, 55.0]);
    assert_eq!(radar.scale, 100.0);
}

#[test]
fn player_profile_reads_first_matching_row() {
    let tables = league();
    let profile = Aggregator::player_profile(&tables.player_stats, "Jamal Musiala")
        .unwrap()
        .expect("Musiala should be present");

    assert_eq!(profile.position, "MF");
    assert_eq!(profile.squad, "Bayern Munich");
    assert_eq!(profile.age, "19");
    assert_eq!(profile.goals_assists, 22.0);
    assert_eq!(profile.progressive_passes, 100.0);

    let dropped = Aggregator::player_profile(&tables.player_stats, "Marcus Thuram").unwrap();
    assert!(dropped.is_none());
}
