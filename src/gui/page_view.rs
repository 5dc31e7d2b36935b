//! Page View Widget
//! Central panel: selectors of the active page plus its tables and charts.
//! All numbers come from `Aggregator`; this module only lays them out.

use crate::charts::{ChartPlotter, BAR_COLORS};
use crate::config::ViewConfig;
use crate::data::schema::*;
use crate::data::{AggregateResult, Aggregator, LeagueTables};
use crate::gui::sidebar::Page;
use egui::{Color32, ComboBox, RichText, ScrollArea};

/// Number of players preselected on the comparison page.
const DEFAULT_COMPARED: usize = 2;

/// Top Performers charts: metric column, title, axis label.
const TOP_PERFORMER_CHARTS: [(&str, &str, &str); 4] = [
    (GOALS, "Goal Scorers", "Goals"),
    (ASSISTS, "Assist Providers", "Assists"),
    (EXPECTED_GOALS, "Players with Most xG", "xG"),
    (PENALTIES, "Players with Most Penalties Scored", "Penalties"),
];

/// A ranked chart the user asked to save as PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub title: String,
    pub x_label: String,
    pub series: Vec<(String, f64)>,
    /// Chart slot, selects the bar color.
    pub slot: usize,
}

/// Actions triggered by the page view
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    None,
    Export(ExportRequest),
}

/// Per-page selections, rebuilt whenever tables are (re)loaded.
#[derive(Default)]
pub struct PageView {
    teams: Vec<(String, bool)>,
    weeks: Vec<i64>,
    selected_week: Option<i64>,
    players: Vec<String>,
    selected_player: Option<String>,
    compared: Vec<String>,
    player_filter: String,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset selectors from freshly loaded tables: every team selected, the
    /// first week and player picked.
    pub fn reset(&mut self, tables: &LeagueTables) -> AggregateResult<()> {
        self.teams = Aggregator::distinct_values(&tables.standings, TEAM)?
            .into_iter()
            .map(|team| (team, true))
            .collect();
        self.weeks = Aggregator::distinct_weeks(&tables.fixtures)?;
        self.selected_week = self.weeks.first().copied();
        self.players = Aggregator::distinct_values(&tables.player_stats, PLAYER)?;
        self.selected_player = self.players.first().cloned();
        self.compared = self.players.iter().take(DEFAULT_COMPARED).cloned().collect();
        self.player_filter.clear();
        Ok(())
    }

    pub fn selected_teams(&self) -> Vec<&str> {
        self.teams
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(team, _)| team.as_str())
            .collect()
    }

    /// Draw the active page
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        page: Page,
        tables: &LeagueTables,
        views: &ViewConfig,
    ) -> PageAction {
        ui.heading(page.heading());
        ui.add_space(8.0);

        let mut action = PageAction::None;
        let result = match page {
            Page::Standings => self.show_standings(ui, tables),
            Page::Fixtures => self.show_fixtures(ui, tables),
            Page::NationalityDistribution => Self::show_nationalities(ui, tables),
            Page::DisciplineData => Self::show_discipline(ui, tables),
            Page::PlayerDictionary => self.show_player_dictionary(ui, tables),
            Page::TopPerformers => Self::show_top_performers(ui, tables, views, &mut action),
            Page::GoalContribution => Self::show_goal_contribution(ui, tables, views),
            Page::PlayerComparison => self.show_player_comparison(ui, tables, views),
        };

        if let Err(e) = result {
            ui.label(
                RichText::new(format!("Error: {}", e)).color(Color32::from_rgb(220, 53, 69)),
            );
        }
        action
    }

    fn show_standings(&mut self, ui: &mut egui::Ui, tables: &LeagueTables) -> AggregateResult<()> {
        ChartPlotter::draw_table(ui, "standings_table", &tables.standings);
        ui.add_space(10.0);

        ui.label(RichText::new("Select teams to display").strong());
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.teams.iter_mut().for_each(|(_, v)| *v = true);
            }
            if ui.small_button("Clear All").clicked() {
                self.teams.iter_mut().for_each(|(_, v)| *v = false);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for (team, selected) in self.teams.iter_mut() {
                ui.checkbox(selected, team.as_str());
            }
        });
        ui.add_space(10.0);

        let filtered = Aggregator::filter_teams(&tables.standings, &self.selected_teams())?;
        let filtered = Aggregator::with_goal_diffs(&filtered)?;

        let charts = [
            ("GF vs xG", [GOALS_FOR, EXPECTED_GOALS], "Goals"),
            ("GA vs xGA", [GOALS_AGAINST, EXPECTED_GOALS_AGAINST], "Goals Against"),
            ("GD vs xGD", [GOAL_DIFF, EXPECTED_GOAL_DIFF], "Goal Difference"),
        ];
        for (title, metrics, y_label) in charts {
            ui.label(RichText::new(title).size(16.0).strong());
            let long = Aggregator::stack_to_long(&filtered, TEAM, &metrics)?;
            ChartPlotter::draw_grouped_bars(ui, title, &long, y_label);
            ui.add_space(10.0);
        }
        Ok(())
    }

    fn show_fixtures(&mut self, ui: &mut egui::Ui, tables: &LeagueTables) -> AggregateResult<()> {
        ui.horizontal(|ui| {
            ui.label("Select week");
            let selected_text = self
                .selected_week
                .map(|w| w.to_string())
                .unwrap_or_default();
            ComboBox::from_id_salt("fixture_week")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for week in &self.weeks {
                        ui.selectable_value(&mut self.selected_week, Some(*week), week.to_string());
                    }
                });
        });
        ui.add_space(8.0);

        let Some(week) = self.selected_week else {
            ui.label("No Data");
            return Ok(());
        };
        let fixtures = Aggregator::filter_by_week(&tables.fixtures, week)?;
        ChartPlotter::draw_table(ui, "fixtures_table", &fixtures);
        Ok(())
    }

    fn show_nationalities(ui: &mut egui::Ui, tables: &LeagueTables) -> AggregateResult<()> {
        let table = Aggregator::nationality_table(&tables.nationalities)?;
        let series = Aggregator::ranked_series(&table, NATION, PLAYER_COUNT)?;

        ui.label(RichText::new("Player Distribution Around the World").size(16.0).strong());
        ChartPlotter::draw_ranked_bars(ui, "nationalities", &series, ChartPlotter::color(0), "# Players");
        ui.add_space(10.0);
        ChartPlotter::draw_table(ui, "nationalities_table", &table);
        Ok(())
    }

    fn show_discipline(ui: &mut egui::Ui, tables: &LeagueTables) -> AggregateResult<()> {
        let by_club = Aggregator::discipline_by_club(&tables.discipline)?;
        let mut scores = Aggregator::ranked_series(&by_club, SQUAD, DISCIPLINE_SCORE)?;
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));

        ui.label(RichText::new("Club Discipline").size(16.0).strong());
        ChartPlotter::draw_ranked_bars(ui, "discipline", &scores, ChartPlotter::color(3), "Discipline Score");
        ui.add_space(10.0);
        ChartPlotter::draw_table(ui, "discipline_table", &by_club);
        Ok(())
    }

    fn show_player_dictionary(
        &mut self,
        ui: &mut egui::Ui,
        tables: &LeagueTables,
    ) -> AggregateResult<()> {
        ui.horizontal(|ui| {
            ui.label("Select a player");
            ComboBox::from_id_salt("player_dictionary")
                .width(240.0)
                .selected_text(self.selected_player.clone().unwrap_or_default())
                .show_ui(ui, |ui| {
                    for player in &self.players {
                        ui.selectable_value(
                            &mut self.selected_player,
                            Some(player.clone()),
                            player.as_str(),
                        );
                    }
                });
        });
        ui.add_space(8.0);

        let Some(player) = &self.selected_player else {
            return Ok(());
        };
        match Aggregator::player_profile(&tables.player_stats, player)? {
            Some(profile) => ChartPlotter::draw_profile(ui, &profile),
            None => {
                ui.label("No Data");
            }
        }
        Ok(())
    }

    fn show_top_performers(
        ui: &mut egui::Ui,
        tables: &LeagueTables,
        views: &ViewConfig,
        action: &mut PageAction,
    ) -> AggregateResult<()> {
        let n = views.top_performers;
        for (slot, (metric, title, x_label)) in TOP_PERFORMER_CHARTS.iter().enumerate() {
            let top = Aggregator::top_n(&tables.player_stats, metric, n)?;
            let series = Aggregator::ranked_series(&top, PLAYER, metric)?;
            let title = format!("Top {} {}", n, title);

            ui.horizontal(|ui| {
                ui.label(RichText::new(&title).size(16.0).strong());
                if ui.small_button("💾 Export PNG").clicked() {
                    *action = PageAction::Export(ExportRequest {
                        title: title.clone(),
                        x_label: x_label.to_string(),
                        series: series.clone(),
                        slot,
                    });
                }
            });

            let color = BAR_COLORS[slot % BAR_COLORS.len()];
            let color = Color32::from_rgb(color.0, color.1, color.2);
            ChartPlotter::draw_ranked_bars(ui, metric, &series, color, x_label);
            ui.add_space(12.0);
        }
        Ok(())
    }

    fn show_goal_contribution(
        ui: &mut egui::Ui,
        tables: &LeagueTables,
        views: &ViewConfig,
    ) -> AggregateResult<()> {
        let ranked = Aggregator::goal_contribution(&tables.player_stats, views.goal_contribution_top)?;
        let points = Aggregator::scatter_points(&ranked)?;

        ui.label(
            RichText::new(format!("Top {} players by goals + assists", points.len()))
                .size(12.0)
                .color(Color32::GRAY),
        );
        ChartPlotter::draw_scatter(ui, &points);
        Ok(())
    }

    fn show_player_comparison(
        &mut self,
        ui: &mut egui::Ui,
        tables: &LeagueTables,
        views: &ViewConfig,
    ) -> AggregateResult<()> {
        ui.horizontal(|ui| {
            ui.label("Find player");
            ui.text_edit_singleline(&mut self.player_filter);
            if ui.small_button("Clear All").clicked() {
                self.compared.clear();
            }
        });

        let filter = self.player_filter.to_lowercase();
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("compare_players")
                    .max_height(140.0)
                    .show(ui, |ui| {
                        for player in &self.players {
                            if !filter.is_empty() && !player.to_lowercase().contains(&filter) {
                                continue;
                            }
                            let mut selected = self.compared.contains(player);
                            if ui.checkbox(&mut selected, player.as_str()).changed() {
                                if selected {
                                    self.compared.push(player.clone());
                                } else {
                                    self.compared.retain(|p| p != player);
                                }
                            }
                        }
                    });
            });
        ui.add_space(10.0);

        let radar = Aggregator::radar_series(&tables.player_stats, &self.compared, &views.radar_metrics)?;
        ChartPlotter::draw_radar(ui, &radar);
        Ok(())
    }
}
