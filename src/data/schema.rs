//! Column names shared by the loader and the aggregations.

use super::source::Source;

pub const TEAM: &str = "Team";
pub const GOALS_FOR: &str = "GF";
pub const GOALS_AGAINST: &str = "GA";
pub const EXPECTED_GOALS: &str = "xG";
pub const EXPECTED_GOALS_AGAINST: &str = "xGA";
pub const GOAL_DIFF: &str = "GD";
pub const EXPECTED_GOAL_DIFF: &str = "xGD";

pub const WEEK: &str = "Wk";

pub const PLAYER: &str = "Player";
pub const POSITION: &str = "Pos";
pub const NATION: &str = "Nation";
pub const AGE: &str = "Age";
pub const SQUAD: &str = "Squad";
pub const GOALS: &str = "Gls";
pub const ASSISTS: &str = "Ast";
pub const GOALS_ASSISTS: &str = "G+A";
pub const NON_PENALTY_GOALS: &str = "G-PK";
pub const PROGRESSIVE_PASSES: &str = "PrgP";
pub const PENALTIES: &str = "PK";
pub const GOAL_CONTRIBUTION: &str = "GoalContribution";

pub const YELLOW_CARDS: &str = "CrdY";
pub const RED_CARDS: &str = "CrdR";
pub const DISCIPLINE_SCORE: &str = "DisciplineScore";

pub const NATIONALITY: &str = "Nationality";
pub const PLAYER_COUNT: &str = "# Players";

/// Columns a source must carry after cleanup.
///
/// The nationality table is validated separately since either `Nation` or
/// `Nationality` is accepted as its key.
pub fn required_columns(source: Source) -> &'static [&'static str] {
    match source {
        Source::Standings => &[
            TEAM,
            GOALS_FOR,
            GOALS_AGAINST,
            EXPECTED_GOALS,
            EXPECTED_GOALS_AGAINST,
        ],
        Source::Fixtures => &[WEEK],
        Source::PlayerStats => &[
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
            PENALTIES,
        ],
        Source::Discipline => &[SQUAD, YELLOW_CARDS, RED_CARDS],
        Source::Nationalities => &[],
    }
}

/// Accepted key columns of the nationality table, in preference order.
pub const NATIONALITY_KEYS: [&str; 2] = [NATION, NATIONALITY];

/// Whether a header is a placeholder left by an anonymous index column.
///
/// Covers pandas-style `Unnamed: 0` headers, blank headers and the
/// `column_<n>` names the CSV reader generates for blank headers.
pub fn is_placeholder_column(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || name.starts_with("Unnamed") {
        return true;
    }
    name.strip_prefix("column_")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_detection() {
        assert!(is_placeholder_column("Unnamed: 0"));
        assert!(is_placeholder_column("Unnamed: 12"));
        assert!(is_placeholder_column(""));
        assert!(is_placeholder_column("column_3"));

        assert!(!is_placeholder_column("Team"));
        assert!(!is_placeholder_column("column_"));
        assert!(!is_placeholder_column("column_home"));
        assert!(!is_placeholder_column("Home Unnamed"));
    }
}
