pub mod base_commands;
pub mod forecast_date_cmd;
pub mod forecast_items_cmd;
pub mod import_cmd;
pub mod report_format;
