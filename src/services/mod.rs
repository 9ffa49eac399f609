pub mod cycle_times;
pub mod forecast;
pub mod forecast_types;
pub mod histogram;
pub mod path_accumulator;
pub mod percentiles;
pub mod probability_plot;
pub mod records_csv;
pub mod records_yaml;
pub mod resampler;
