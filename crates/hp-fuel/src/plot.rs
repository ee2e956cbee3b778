//! Daily consumption plot.

use crate::error::{FuelError, FuelResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const PLOT_TITLE: &str = "Fuel Consumption";
pub const X_LABEL: &str = "Days";
pub const Y_LABEL: &str = "Quantity (Gallons)";
/// Fixed axis ranges, independent of the data.
pub const X_RANGE: (f64, f64) = (0.0, 364.0);
pub const Y_RANGE: (f64, f64) = (0.0, 850.0);
const PLOT_SIZE: (u32, u32) = (1500, 700);

fn plot_error(err: impl std::fmt::Display) -> FuelError {
    FuelError::Plot(err.to_string())
}

/// Write the daily series as an SVG line plot at `path`.
pub fn plot_daily(path: &Path, daily: &[f64]) -> FuelResult<()> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    draw_daily(&root, daily)
}

/// Render the daily series to an SVG document in memory.
pub fn render_svg(daily: &[f64]) -> FuelResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, PLOT_SIZE).into_drawing_area();
        draw_daily(&root, daily)?;
    }
    Ok(svg)
}

fn draw_daily<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, daily: &[f64]) -> FuelResult<()> {
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(PLOT_TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            daily.iter().enumerate().map(|(day, &gallons)| (day as f64, gallons)),
            &BLUE,
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_carries_title_and_labels() {
        let daily: Vec<f64> = (0..365).map(|d| (d % 30) as f64 * 20.0).collect();
        let svg = render_svg(&daily).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(PLOT_TITLE));
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
    }

    #[test]
    fn writes_file() {
        let path = std::env::temp_dir().join("hp_fuel_plot_test.svg");
        plot_daily(&path, &[0.0; 365]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("</svg>"));
    }
}
