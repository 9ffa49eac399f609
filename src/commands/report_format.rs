use crate::services::forecast_types::{DateForecastReport, ForecastPercentile, ItemForecastReport};

pub fn format_date_forecast_report(report: &DateForecastReport) -> String {
    let mut lines = Vec::new();
    lines.push("Completion Date Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Start date: {}", report.start_date));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Simulated items: {}", report.simulated_items));
    lines.push(String::new());
    lines.push("Percentiles:".to_string());
    lines.push("Percentile | Days | Date".to_string());
    lines.push("-----------|------|-----".to_string());
    lines.push(format_percentile_row("P50", &report.p50));
    lines.push(format_percentile_row("P70", &report.p70));
    lines.push(format_percentile_row("P85", &report.p85));
    lines.push(format_percentile_row("P95", &report.p95));

    lines.join("\n")
}

pub fn format_item_forecast_report(report: &ItemForecastReport) -> String {
    let mut lines = Vec::new();
    lines.push("Deliverable Items Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Start date: {}", report.start_date));
    lines.push(format!("Target date: {}", report.target_date));
    lines.push(format!("Horizon: {:.0} days", report.horizon_days));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Search bound: {} items", report.max_items));
    lines.push(String::new());
    lines.push("Confidence thresholds:".to_string());
    lines.push("Confidence | Items".to_string());
    lines.push("-----------|------".to_string());
    lines.push(format_threshold_row("P50", report.p50));
    lines.push(format_threshold_row("P70", report.p70));
    lines.push(format_threshold_row("P85", report.p85));
    lines.push(format_threshold_row("P95", report.p95));

    lines.join("\n")
}

fn format_percentile_row(label: &str, percentile: &ForecastPercentile) -> String {
    format!(
        "{label} | {days:.2} | {date}",
        days = percentile.days,
        date = percentile.date
    )
}

fn format_threshold_row(label: &str, items: Option<usize>) -> String {
    let items = match items {
        Some(count) => count.to_string(),
        None => "n/a".to_string(),
    };
    format!("{label} | {items}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_date_report() -> DateForecastReport {
        DateForecastReport {
            data_source: "records.yaml".to_string(),
            start_date: "2026-02-01".to_string(),
            iterations: 1000,
            simulated_items: 12,
            p50: ForecastPercentile {
                days: 5.5,
                date: "2026-02-07".to_string(),
            },
            p70: ForecastPercentile {
                days: 7.0,
                date: "2026-02-08".to_string(),
            },
            p85: ForecastPercentile {
                days: 10.0,
                date: "2026-02-11".to_string(),
            },
            p95: ForecastPercentile {
                days: 15.25,
                date: "2026-02-17".to_string(),
            },
        }
    }

    #[test]
    fn date_forecast_report_includes_header_and_table() {
        let output = format_date_forecast_report(&build_date_report());

        assert!(output.contains("Completion Date Forecast"));
        assert!(output.contains("Data source: records.yaml"));
        assert!(output.contains("Start date: 2026-02-01"));
        assert!(output.contains("Iterations: 1000"));
        assert!(output.contains("Simulated items: 12"));
        assert!(output.contains("Percentile | Days | Date"));
        assert!(output.contains("P50 | 5.50 | 2026-02-07"));
        assert!(output.contains("P70 | 7.00 | 2026-02-08"));
        assert!(output.contains("P85 | 10.00 | 2026-02-11"));
        assert!(output.contains("P95 | 15.25 | 2026-02-17"));
    }

    #[test]
    fn item_forecast_report_prints_counts_and_explicit_absence() {
        let report = ItemForecastReport {
            data_source: "records.yaml".to_string(),
            start_date: "2026-02-01".to_string(),
            target_date: "2026-03-01".to_string(),
            horizon_days: 28.0,
            iterations: 1000,
            max_items: 100,
            p50: Some(24),
            p70: Some(20),
            p85: Some(17),
            p95: None,
        };

        let output = format_item_forecast_report(&report);

        assert!(output.contains("Deliverable Items Forecast"));
        assert!(output.contains("Target date: 2026-03-01"));
        assert!(output.contains("Horizon: 28 days"));
        assert!(output.contains("Search bound: 100 items"));
        assert!(output.contains("P50 | 24"));
        assert!(output.contains("P70 | 20"));
        assert!(output.contains("P85 | 17"));
        assert!(output.contains("P95 | n/a"));
    }
}
