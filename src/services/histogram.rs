use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

const BIN_COUNT: usize = 30;

/// Renders the completion-time distribution as a 30-bin histogram PNG.
/// An empty result set writes nothing and succeeds.
pub fn write_histogram_png(output_path: &str, results: &[f32]) -> Result<(), HistogramError> {
    if results.is_empty() {
        return Ok(());
    }

    let min_value = results.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_value = results.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = max_value - min_value;
    let bin_width = if range < f32::EPSILON {
        1.0
    } else {
        range / BIN_COUNT as f32
    };

    let mut counts: std::collections::BTreeMap<i32, usize> = std::collections::BTreeMap::new();
    for value in results {
        let bucket = ((*value - min_value) / bin_width).floor() as i32;
        *counts.entry(bucket.min(BIN_COUNT as i32 - 1)).or_insert(0usize) += 1;
    }
    let max_count = *counts.values().max().unwrap_or(&1);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let max_bucket = (*counts.keys().next_back().unwrap_or(&0)) + 1;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Completion Time Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_bucket, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Days to completion")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{:.1}", min_value + *value as f32 * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(
            counts
                .iter()
                .map(|(bucket, count)| {
                    Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], bar_style)
                }),
        )
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
