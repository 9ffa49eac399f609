mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::forecast_date_cmd::forecast_date_command;
use crate::commands::forecast_items_cmd::forecast_items_command;
use crate::commands::import_cmd::import_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Import { .. } => import_command(cmd),
        cmd @ Commands::ForecastDate { .. } => forecast_date_command(cmd),
        cmd @ Commands::ForecastItems { .. } => forecast_items_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
