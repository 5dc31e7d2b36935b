//! Static Chart Renderer
//! Renders ranked bar charts (Top Performers) to PNG with plotters.
//!
//! Layout mirrors the on-screen ranking: one horizontal bar per entry, the
//! first entry on top, the value printed at the end of each bar.

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const EXPORT_WIDTH: u32 = 1200;
pub const EXPORT_HEIGHT: u32 = 800;

/// Bar colors by chart slot, matching the on-screen palette.
pub const BAR_COLORS: [RGBColor; 4] = [
    RGBColor(46, 145, 229),
    RGBColor(225, 95, 153),
    RGBColor(28, 167, 28),
    RGBColor(251, 13, 13),
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("failed to render chart: {0}")]
    Render(String),
}

fn render_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Render(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Write a horizontal ranked bar chart to `path` as PNG.
    pub fn render_ranked_bars_png(
        path: &Path,
        title: &str,
        x_label: &str,
        series: &[(String, f64)],
        color: RGBColor,
    ) -> Result<(), ExportError> {
        if series.is_empty() {
            return Err(ExportError::Empty);
        }

        let n = series.len();
        let x_max = series.iter().map(|(_, v)| *v).fold(0.0, f64::max).max(1.0) * 1.15;
        // Row j of the y axis (0 at the bottom) shows entry n - 1 - j.
        let labels: Vec<&str> = series.iter().rev().map(|(l, _)| l.as_str()).collect();

        let root = BitMapBackend::new(path, (EXPORT_WIDTH, EXPORT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(200)
            .build_cartesian_2d(0.0..x_max, (0..n).into_segmented())
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(x_label)
            .y_labels(n)
            .y_label_formatter(&|v: &SegmentValue<usize>| match v {
                SegmentValue::CenterOf(j) => labels.get(*j).map(|l| l.to_string()).unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(series.iter().enumerate().map(|(i, (_, value))| {
                let j = n - 1 - i;
                let mut bar = Rectangle::new(
                    [(0.0, SegmentValue::Exact(j)), (*value, SegmentValue::Exact(j + 1))],
                    color.filled(),
                );
                bar.set_margin(6, 6, 0, 0);
                bar
            }))
            .map_err(render_err)?;

        chart
            .draw_series(series.iter().enumerate().map(|(i, (_, value))| {
                Text::new(
                    format_value(*value),
                    (*value + x_max * 0.01, SegmentValue::CenterOf(n - 1 - i)),
                    ("sans-serif", 16).into_font(),
                )
            }))
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        info!(path = %path.display(), bars = n, "exported chart");
        Ok(())
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
