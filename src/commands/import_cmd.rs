use crate::commands::base_commands::Commands;
use crate::services::records_csv::parse_records_csv;
use crate::services::records_yaml::serialize_records_to_yaml;

pub fn import_command(cmd: Commands) {
    if let Commands::Import {
        input,
        output,
        separator,
        activation_column,
        closure_column,
    } = cmd
    {
        let contents = match std::fs::read_to_string(&input) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read {input}: {e}");
                std::process::exit(1);
            }
        };

        let records =
            match parse_records_csv(&contents, separator, &activation_column, &closure_column) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Failed to parse {input}: {e}");
                    std::process::exit(1);
                }
            };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_records_to_yaml(&mut buffer, &records) {
            eprintln!("Failed to serialize records to YAML: {e}");
            std::process::exit(1);
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write output file: {e}");
            std::process::exit(1);
        }

        println!("{} task records written to {output}", records.len());
    }
}
