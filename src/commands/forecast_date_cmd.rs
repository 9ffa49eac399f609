use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_date_forecast_report;
use crate::services::forecast::forecast_date_from_records_file;

pub fn forecast_date_command(cmd: Commands) {
    if let Commands::ForecastDate {
        records,
        output,
        iterations,
        items,
        start_date,
        seed,
    } = cmd
    {
        let histogram_path = format!("{output}.png");
        let forecast = match forecast_date_from_records_file(
            &records,
            iterations,
            items,
            &start_date,
            &histogram_path,
            seed,
        ) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to forecast completion date: {e}");
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

        println!("{}", format_date_forecast_report(&forecast.report));
        println!("Forecast for {items} items written to {output}");
        println!("Completion time histogram written to {histogram_path}");
    }
}
