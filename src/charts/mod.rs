//! Charts module - Interactive and static chart rendering

mod plotter;
mod renderer;

pub use plotter::{format_stat, ChartPlotter, PALETTE};
pub use renderer::{ExportError, StaticChartRenderer, BAR_COLORS};
