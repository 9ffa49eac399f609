use plotters::prelude::*;
use thiserror::Error;

use crate::services::forecast_types::ItemProbability;

#[derive(Error, Debug)]
pub enum ProbabilityPlotError {
    #[error("failed to render probability curve: {0}")]
    Plot(String),
}

/// Renders the delivery-probability curve (chance of finishing n items
/// within the horizon, for each candidate n) as a line chart PNG.
/// An empty curve writes nothing and succeeds.
pub fn write_probability_curve_png(
    output_path: &str,
    curve: &[ItemProbability],
) -> Result<(), ProbabilityPlotError> {
    if curve.is_empty() {
        return Ok(());
    }

    let max_items = curve.last().map(|point| point.items).unwrap_or(1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProbabilityPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Delivery Probability by Item Count", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..(max_items + 1), 0.0_f32..1.05_f32)
        .map_err(|e| ProbabilityPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Item count")
        .y_desc("Probability of delivery within horizon")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_label_formatter(&|value| format!("{value:.0}%", value = value * 100.0))
        .draw()
        .map_err(|e| ProbabilityPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            curve
                .iter()
                .map(|point| (point.items as i32, point.probability)),
            ShapeStyle::from(&line_color).stroke_width(2),
        ))
        .map_err(|e| ProbabilityPlotError::Plot(e.to_string()))?;

    chart
        .draw_series(
            curve
                .iter()
                .map(|point| Circle::new((point.items as i32, point.probability), 3, line_color.filled())),
        )
        .map_err(|e| ProbabilityPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ProbabilityPlotError::Plot(e.to_string()))?;
    Ok(())
}
