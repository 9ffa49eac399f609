use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_item_forecast_report;
use crate::services::forecast::forecast_items_from_records_file;

pub fn forecast_items_command(cmd: Commands) {
    if let Commands::ForecastItems {
        records,
        output,
        iterations,
        target_date,
        start_date,
        max_items,
        seed,
    } = cmd
    {
        let curve_path = format!("{output}.png");
        let forecast = match forecast_items_from_records_file(
            &records,
            iterations,
            &target_date,
            &start_date,
            max_items,
            &curve_path,
            seed,
        ) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to forecast deliverable items: {e}");
                std::process::exit(1);
            }
        };

        let yaml = match serde_yaml::to_string(&forecast) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize forecast output: {e}");
                std::process::exit(1);
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write forecast output: {e}");
            std::process::exit(1);
        }

        println!("{}", format_item_forecast_report(&forecast.report));
        println!("Forecast for target date {target_date} written to {output}");
        println!("Probability curve written to {curve_path}");
    }
}
