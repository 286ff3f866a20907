//! Log-scale line chart of timing series, rendered to PNG with plotters.

use super::config::ChartConfig;
use super::ticks::x_ticks;
use crate::parser::schema::TimingSeries;
use crate::parser::timing_csv::max_runs;
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Text needs a font backend, which only the `ttf` feature provides
const TEXT_ENABLED: bool = cfg!(feature = "ttf");

/// What a render produced
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSummary {
    pub output: PathBuf,
    pub series_plotted: usize,
    pub max_runs: usize,
}

/// Y-axis bounds covering every positive value
///
/// Equal bounds are widened by a decade on each side; with no positive
/// values at all the axis falls back to 1..10.
pub fn y_bounds(series: &[TimingSeries]) -> (f64, f64) {
    let positive = series
        .iter()
        .flat_map(|s| s.deltas.iter().copied())
        .filter(|v| *v > 0.0 && v.is_finite());

    let (lo, hi) = positive.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !lo.is_finite() || !hi.is_finite() {
        (1.0, 10.0)
    } else if lo == hi {
        (lo / 10.0, hi * 10.0)
    } else {
        (lo, hi)
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Draw one line per series and save the PNG
///
/// **Public** - main entry point for chart rendering
///
/// # Arguments
/// * `series` - Series to plot; empty ones are skipped
/// * `config` - Title, labels and image size
/// * `output` - PNG path
///
/// # Errors
/// * `ChartError::NoPlottableRows` - no series has any data point
/// * `ChartError::Render` - drawing or encoding failed
pub fn render_chart(
    series: &[TimingSeries],
    config: &ChartConfig,
    output: &Path,
) -> Result<ChartSummary, ChartError> {
    let plottable: Vec<&TimingSeries> = series.iter().filter(|s| !s.is_empty()).collect();
    if plottable.is_empty() {
        return Err(ChartError::NoPlottableRows);
    }

    let runs = max_runs(series);
    let ticks = x_ticks(runs);
    let (y_min, y_max) = y_bounds(series);
    let scale = config.scale();
    let font = |size: f64| ("sans-serif", size * scale);

    debug!(
        "Rendering {}x{} chart: {} series, {} runs, y in [{}, {}]",
        config.width,
        config.height,
        plottable.len(),
        runs,
        y_min,
        y_max
    );

    let root = BitMapBackend::new(output, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    // Without label areas plotters never lays out tick labels or axis descriptions
    let label_area = |size: f64| if TEXT_ENABLED { (size * scale) as u32 } else { 0 };

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin((20.0 * scale) as u32)
        .x_label_area_size(label_area(50.0))
        .y_label_area_size(label_area(90.0));
    if TEXT_ENABLED {
        builder.caption(config.title.as_str(), font(28.0));
    }

    let mut chart = builder
        .build_cartesian_2d(
            (0..runs as i32).with_key_points(ticks.clone()),
            (y_min..y_max).log_scale(),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(ticks.len())
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .label_style(font(14.0))
        .axis_desc_style(font(16.0))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(render_err)?;

    let stroke = (2.0 * scale).round().max(1.0) as u32;

    for (idx, s) in plottable.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        // A log axis has no place for zero, negative or infinite values
        let points: Vec<(i32, f64)> = s
            .points()
            .filter(|(_, v)| *v > 0.0 && v.is_finite())
            .collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(stroke)))
            .map_err(render_err)?
            .label(s.operation.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(stroke))
            });

        info!(
            "Plotted operation: {} with {} data points",
            s.operation,
            s.len()
        );
    }

    if TEXT_ENABLED {
        chart
            .configure_series_labels()
            .label_font(font(14.0))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;

    Ok(ChartSummary {
        output: output.to_path_buf(),
        series_plotted: plottable.len(),
        max_runs: runs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, deltas: &[f64]) -> TimingSeries {
        TimingSeries {
            operation: name.to_string(),
            deltas: deltas.to_vec(),
        }
    }

    #[test]
    fn test_y_bounds() {
        let s = vec![series("A", &[10.0, 20.0, 30.0]), series("B", &[5.0, 15.0])];
        assert_eq!(y_bounds(&s), (5.0, 30.0));
    }

    #[test]
    fn test_y_bounds_ignores_non_positive() {
        let s = vec![series("A", &[0.0, -3.0, 4.0, 8.0])];
        assert_eq!(y_bounds(&s), (4.0, 8.0));
    }

    #[test]
    fn test_y_bounds_single_value_widened() {
        let s = vec![series("A", &[100.0])];
        assert_eq!(y_bounds(&s), (10.0, 1000.0));
    }

    #[test]
    fn test_y_bounds_no_positive_values() {
        let s = vec![series("A", &[0.0])];
        assert_eq!(y_bounds(&s), (1.0, 10.0));
    }

    #[test]
    fn test_render_default_build_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.png");
        let s = vec![series("A", &[10.0, 20.0, 30.0]), series("B", &[5.0, 15.0])];

        let summary = render_chart(&s, &ChartConfig::new().with_size(600, 300), &out).unwrap();

        assert_eq!(summary.series_plotted, 2);
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_render_rejects_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.png");
        let result = render_chart(&[series("A", &[])], &ChartConfig::new(), &out);

        assert!(matches!(result, Err(ChartError::NoPlottableRows)));
        assert!(!out.exists());
    }
}
