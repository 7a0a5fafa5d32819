//! Renders an assembled diagram to an image with `plotters`.
//!
//! Only available with the `plot` cargo feature. The geometry comes from
//! [`diagram::assemble`](super::diagram::assemble); this module decides
//! styling and writes the bitmap.

use std::error::Error;

use plotters::prelude::*;

use super::core::Point;
use super::diagram::{Diagram, Segment};

/// Configuration for rendering a diagram.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Chart title.
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            title: "McCabe-Thiele construction".to_string(),
        }
    }
}

/// Renders the diagram to `path` as a bitmap image.
///
/// # Errors
///
/// Returns an error if the backend cannot write the image file or any
/// drawing primitive fails.
pub fn render(diagram: &Diagram, path: &str, config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    chart
        .configure_mesh()
        .x_desc("x (liquid mole fraction of light component)")
        .y_desc("y (vapor mole fraction of light component)")
        .draw()?;

    let as_coords =
        |points: &[Point]| -> Vec<(f64, f64)> { points.iter().map(|p| (p.x, p.y)).collect() };

    chart.draw_series(LineSeries::new(as_coords(&diagram.ideal_curve), &BLACK))?;
    chart.draw_series(LineSeries::new(
        as_coords(&diagram.corrected_curve),
        &GREEN,
    ))?;

    let segment_series = |segment: &Segment| {
        vec![
            (segment.from.x, segment.from.y),
            (segment.to.x, segment.to.y),
        ]
    };

    chart.draw_series(LineSeries::new(segment_series(&diagram.diagonal), &BLACK))?;
    chart.draw_series(LineSeries::new(segment_series(&diagram.feed_line), &BLACK))?;
    chart.draw_series(LineSeries::new(
        segment_series(&diagram.rectifying_line),
        &BLACK,
    ))?;
    chart.draw_series(LineSeries::new(
        segment_series(&diagram.stripping_line),
        &BLACK,
    ))?;

    for guide in &diagram.composition_guides {
        chart.draw_series(LineSeries::new(segment_series(guide), &BLACK.mix(0.3)))?;
    }

    for step in &diagram.staircase {
        chart.draw_series(LineSeries::new(segment_series(step), &BLUE))?;
    }

    chart.draw_series(diagram.stage_labels.iter().map(|label| {
        Text::new(
            label.stage.to_string(),
            (label.at.x, label.at.y),
            ("sans-serif", 16),
        )
    }))?;

    root.present()?;
    Ok(())
}
