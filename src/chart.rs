use crate::config::PlotConfig;
use crate::error::PlotError;

use plotters::prelude::*;
use std::process::Command;
use tracing::{debug, warn};

/// Draws the price sequence as a line plot and writes the bitmap to
/// `output_path`. The image format is picked by the backend from the path's
/// extension. Nothing is written until the final `present`, so a failure
/// earlier in the pipeline leaves no partial file behind.
pub fn render_chart(
    prices: &[f64],
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), PlotError> {
    let root = BitMapBackend::new(output_path, config.dimensions()).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| PlotError::Render(format!("fill canvas: {err}")))?;

    let (y_min, y_max) = y_bounds(prices);

    let mut chart = ChartBuilder::on(&root)
        .caption("Price Distribution", ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..prices.len().max(1), y_min..y_max)
        .map_err(|err| PlotError::Render(format!("build chart: {err}")))?;

    chart
        .configure_mesh()
        .x_desc("Index")
        .y_desc("Price")
        .draw()
        .map_err(|err| PlotError::Render(format!("draw grid: {err}")))?;

    chart
        .draw_series(LineSeries::new(
            prices.iter().enumerate().map(|(index, price)| (index, *price)),
            &BLUE,
        ))
        .map_err(|err| PlotError::Render(format!("draw series: {err}")))?;

    root.present()
        .map_err(|err| PlotError::Render(format!("write {output_path}: {err}")))?;

    Ok(())
}

// Pad the value range so the line does not sit on the plot border. An empty
// series still renders, over a default range like an empty set of axes.
fn y_bounds(prices: &[f64]) -> (f64, f64) {
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let padding = (max - min).max(1e-8) * 0.1;
    (min - padding, max + padding)
}

/// Hands the saved image to the platform viewer. Environment-dependent and
/// best effort: the saved file is the artifact, a missing viewer only warns.
pub fn open_viewer(path: &str) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    match Command::new(opener).arg(path).spawn() {
        Ok(_) => debug!(path, "opened image viewer"),
        Err(err) => warn!("could not open image viewer for {path}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_bounds_pads_the_range() {
        let (min, max) = y_bounds(&[1.0, 2.0, 3.0]);

        assert!(min < 1.0);
        assert!(max > 3.0);
    }

    #[test]
    fn test_y_bounds_of_empty_series_is_default_range() {
        assert_eq!(y_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_y_bounds_of_flat_series_is_non_degenerate() {
        let (min, max) = y_bounds(&[2.5, 2.5]);

        assert!(min < max);
    }
}
