//! Sidebar Widget
//! Left side panel with page navigation, data source and load status.

use egui::{Color32, RichText};
use std::path::PathBuf;

/// Dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Standings,
    Fixtures,
    NationalityDistribution,
    DisciplineData,
    PlayerDictionary,
    TopPerformers,
    GoalContribution,
    PlayerComparison,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Standings,
        Page::Fixtures,
        Page::NationalityDistribution,
        Page::DisciplineData,
        Page::PlayerDictionary,
        Page::TopPerformers,
        Page::GoalContribution,
        Page::PlayerComparison,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Standings => "Standings",
            Page::Fixtures => "Fixtures",
            Page::NationalityDistribution => "Nationality Distribution",
            Page::DisciplineData => "Discipline Data",
            Page::PlayerDictionary => "Player Dictionary",
            Page::TopPerformers => "Top Performers (Offensive)",
            Page::GoalContribution => "Goal Contribution",
            Page::PlayerComparison => "Player Comparison",
        }
    }

    /// Page heading shown above the content.
    pub fn heading(self) -> &'static str {
        match self {
            Page::Standings => "League Standings",
            other => other.label(),
        }
    }
}

/// Left side panel state.
pub struct Sidebar {
    pub page: Page,
    pub data_dir: PathBuf,
    pub status: String,
    pub is_error: bool,
    pub loading: bool,
}

impl Sidebar {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            page: Page::default(),
            data_dir,
            status: "Ready".to_string(),
            is_error: false,
            loading: false,
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.is_error = true;
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui) -> SidebarAction {
        let mut action = SidebarAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚽ Football Analytics")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new("Statistics").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Navigation =====
        ui.label(RichText::new("Go to").size(14.0).strong());
        ui.add_space(5.0);
        ui.add_enabled_ui(!self.loading, |ui| {
            for page in Page::ALL {
                ui.selectable_value(&mut self.page, page, page.label());
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(self.data_dir.display().to_string())
                        .size(12.0)
                        .color(Color32::WHITE),
                );
                ui.horizontal(|ui| {
                    ui.add_enabled_ui(!self.loading, |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = SidebarAction::BrowseDataDir;
                        }
                        if ui.button("⟳ Reload").clicked() {
                            action = SidebarAction::Reload;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        if self.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(&self.status).size(11.0));
            });
        } else {
            let color = if self.is_error {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(color));
        }

        action
    }
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    BrowseDataDir,
    Reload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_distinct_label() {
        let mut labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Page::ALL.len());
    }

    #[test]
    fn error_status_is_flagged() {
        let mut sidebar = Sidebar::new(PathBuf::from("."));
        sidebar.set_error("Error: missing column");
        assert!(sidebar.is_error);
        sidebar.set_status("Loaded");
        assert!(!sidebar.is_error);
    }
}
