use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a delimited task export into a records YAML file
    Import {
        /// Delimited text file with a header row
        #[arg(short, long)]
        input: String,
        /// Output records YAML file
        #[arg(short, long)]
        output: String,
        /// Field separator
        #[arg(long, default_value_t = ';')]
        separator: char,
        /// Header name of the activation timestamp column
        #[arg(long, default_value = "activation")]
        activation_column: String,
        /// Header name of the closure timestamp column
        #[arg(long, default_value = "closure")]
        closure_column: String,
    },
    /// Forecast the completion date for a fixed number of items
    ForecastDate {
        /// Records YAML file
        #[arg(short = 'f', long)]
        records: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of simulation iterations
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,
        /// Number of items to simulate
        #[arg(short = 'k', long)]
        items: usize,
        /// Forecast start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Forecast how many items fit before a target date
    ForecastItems {
        /// Records YAML file
        #[arg(short = 'f', long)]
        records: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of simulation iterations
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,
        /// Target delivery date (YYYY-MM-DD)
        #[arg(short = 'd', long)]
        target_date: String,
        /// Forecast start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// Largest item count to probe
        #[arg(short = 'm', long, default_value_t = 100)]
        max_items: usize,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
