//! Timing chart rendering.
//!
//! This module draws timing series as a line chart: one line per
//! operation, run index on the x axis, time on a logarithmic y axis.

pub mod config;
pub mod renderer;
pub mod ticks;

// Re-export main types
pub use config::ChartConfig;
pub use renderer::{render_chart, y_bounds, ChartSummary};
pub use ticks::{tick_step, x_ticks};
