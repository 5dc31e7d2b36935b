//! Chart Plotter Module
//! Draws the dashboard's interactive charts and tables with egui_plot.

use crate::data::{cell_text, PlayerProfile, RadarSeries, ScatterPoint};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use polars::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Qualitative palette shared by every chart.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(46, 145, 229),  // Blue
    Color32::from_rgb(225, 95, 153),  // Pink
    Color32::from_rgb(28, 167, 28),   // Green
    Color32::from_rgb(251, 13, 13),   // Red
    Color32::from_rgb(218, 22, 255),  // Violet
    Color32::from_rgb(34, 42, 42),    // Charcoal
    Color32::from_rgb(182, 129, 0),   // Ochre
    Color32::from_rgb(117, 13, 134),  // Plum
    Color32::from_rgb(235, 102, 59),  // Orange
    Color32::from_rgb(81, 28, 251),   // Indigo
];

const CHART_HEIGHT: f32 = 320.0;

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Grouped bars from a long frame (`group`, `metric`, `value`).
    /// One bar series per metric, groups along the x axis.
    pub fn draw_grouped_bars(ui: &mut egui::Ui, id: &str, long: &DataFrame, y_label: &str) {
        let (Ok(groups), Ok(metrics), Ok(values)) = (
            long.column("group"),
            long.column("metric"),
            long.column("value").and_then(|c| c.cast(&DataType::Float64)),
        ) else {
            ui.label("No Data");
            return;
        };
        let Ok(values) = values.f64() else {
            ui.label("No Data");
            return;
        };

        let mut group_order: Vec<String> = Vec::new();
        let mut series: Vec<(String, Vec<(usize, f64)>)> = Vec::new();
        for i in 0..long.height() {
            let group = cell_text(groups, i);
            let metric = cell_text(metrics, i);
            let Some(value) = values.get(i) else {
                continue;
            };

            let x = match group_order.iter().position(|g| *g == group) {
                Some(x) => x,
                None => {
                    group_order.push(group);
                    group_order.len() - 1
                }
            };
            match series.iter_mut().find(|(m, _)| *m == metric) {
                Some((_, points)) => points.push((x, value)),
                None => series.push((metric, vec![(x, value)])),
            }
        }

        let n_series = series.len().max(1) as f64;
        let bar_width = 0.8 / n_series;
        let x_labels = group_order.clone();

        Plot::new(id.to_string())
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .y_axis_label(y_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (s, (metric, points)) in series.iter().enumerate() {
                    let offset = (s as f64 - (n_series - 1.0) / 2.0) * bar_width;
                    let bars = points
                        .iter()
                        .map(|&(x, v)| {
                            Bar::new(x as f64 + offset, v)
                                .width(bar_width)
                                .name(&group_order[x])
                        })
                        .collect();
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .name(metric)
                            .color(Self::color(s)),
                    );
                }
            });
    }

    /// Horizontal ranking, first entry on top.
    pub fn draw_ranked_bars(
        ui: &mut egui::Ui,
        id: &str,
        series: &[(String, f64)],
        color: Color32,
        x_label: &str,
    ) {
        if series.is_empty() {
            ui.label("No Data");
            return;
        }

        let n = series.len();
        let labels: Vec<String> = series.iter().rev().map(|(l, _)| l.clone()).collect();
        let bars = series
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                Bar::new((n - 1 - i) as f64, *value)
                    .width(0.7)
                    .name(label)
                    .fill(color)
            })
            .collect();

        let height = (n as f32 * 26.0).clamp(160.0, 600.0);
        Plot::new(id.to_string())
            .height(height)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal().color(color));
            });
    }

    /// Assists vs goals, marker size following goal contribution.
    pub fn draw_scatter(ui: &mut egui::Ui, points: &[ScatterPoint]) {
        let max_contribution = points
            .iter()
            .map(|p| p.contribution)
            .fold(0.0, f64::max)
            .max(1.0);

        Plot::new("goal_contribution_scatter")
            .height(CHART_HEIGHT + 120.0)
            .x_axis_label("Number of Assists")
            .y_axis_label("Number of Goals")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (i, p) in points.iter().enumerate() {
                    let radius = 3.0 + 12.0 * (p.contribution / max_contribution) as f32;
                    plot_ui.points(
                        Points::new(PlotPoints::new(vec![[p.assists, p.goals]]))
                            .radius(radius)
                            .color(Self::color(i).gamma_multiply(0.7))
                            .name(&p.player),
                    );
                }
            });
    }

    /// Radar chart: one closed polygon per player on a shared radial scale.
    pub fn draw_radar(ui: &mut egui::Ui, radar: &RadarSeries) {
        let n = radar.metrics.len();
        if n == 0 {
            ui.label("No Data");
            return;
        }
        let scale = if radar.scale > 0.0 { radar.scale } else { 1.0 };
        let angle = |k: usize| FRAC_PI_2 - TAU * k as f64 / n as f64;

        Plot::new("player_radar")
            .height(CHART_HEIGHT + 160.0)
            .data_aspect(1.0)
            .legend(Legend::default())
            .show_axes(false)
            .show_grid(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                // Rings at quarter steps of the scale.
                for ring in 1..=4 {
                    let r = ring as f64 / 4.0;
                    let ring_points: PlotPoints = (0..=n)
                        .map(|k| [r * angle(k).cos(), r * angle(k).sin()])
                        .collect();
                    plot_ui.line(Line::new(ring_points).color(Color32::GRAY).width(0.5));
                }

                for (k, metric) in radar.metrics.iter().enumerate() {
                    let (x, y) = (angle(k).cos(), angle(k).sin());
                    plot_ui.line(
                        Line::new(PlotPoints::new(vec![[0.0, 0.0], [x, y]]))
                            .color(Color32::GRAY)
                            .width(0.5),
                    );
                    plot_ui.text(Text::new(
                        PlotPoint::new(x * 1.12, y * 1.12),
                        RichText::new(metric).strong(),
                    ));
                }

                for (i, trace) in radar.traces.iter().enumerate() {
                    let polygon: PlotPoints = (0..=n)
                        .map(|k| {
                            let r = trace.values.get(k % n).copied().unwrap_or(0.0) / scale;
                            [r * angle(k).cos(), r * angle(k).sin()]
                        })
                        .collect();
                    plot_ui.line(
                        Line::new(polygon)
                            .color(Self::color(i))
                            .width(2.0)
                            .name(&trace.player),
                    );
                }
            });

        ui.label(
            RichText::new(format!("Axis scale: 0 to {:.2}", radar.scale))
                .size(11.0)
                .color(Color32::GRAY),
        );
    }

    /// Draw a frame as a striped grid.
    pub fn draw_table(ui: &mut egui::Ui, id: &str, df: &DataFrame) {
        if df.height() == 0 {
            ui.label(RichText::new("No rows").color(Color32::GRAY));
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::both()
                    .id_salt(format!("{id}_scroll"))
                    .max_height(320.0)
                    .show(ui, |ui| {
                        egui::Grid::new(ui.make_persistent_id(id))
                            .striped(true)
                            .min_col_width(40.0)
                            .spacing([8.0, 4.0])
                            .show(ui, |ui| {
                                for name in df.get_column_names() {
                                    ui.label(RichText::new(name.as_str()).strong().size(11.0));
                                }
                                ui.end_row();

                                for row in 0..df.height() {
                                    for column in df.get_columns() {
                                        ui.label(RichText::new(cell_text(column, row)).size(11.0));
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    /// Player Dictionary card.
    pub fn draw_profile(ui: &mut egui::Ui, profile: &PlayerProfile) {
        let rows = [
            ("Name", profile.name.clone()),
            ("Position", profile.position.clone()),
            ("Country", profile.nation.clone()),
            ("Age", profile.age.clone()),
            ("Team", profile.squad.clone()),
            ("Goals", format_stat(profile.goals)),
            ("Assists", format_stat(profile.assists)),
            ("Goals + Assists", format_stat(profile.goals_assists)),
            ("Non-Penalty Goals", format_stat(profile.non_penalty_goals)),
            ("Expected Goals (xG)", format_stat(profile.expected_goals)),
            ("Progressive Passes", format_stat(profile.progressive_passes)),
        ];

        egui::Grid::new("player_profile")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in rows {
                    ui.label(RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });
    }
}

/// Integral stats print without decimals.
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_print_without_trailing_zeroes() {
        assert_eq!(format_stat(12.0), "12");
        assert_eq!(format_stat(8.46), "8.5");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(ChartPlotter::color(0), ChartPlotter::color(PALETTE.len()));
    }
}
