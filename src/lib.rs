pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clock::{ConfiguredClock, FixedClock, SystemClock};
pub use config::{toml_config::TomlConfig, DateSettings};
pub use core::formatter::{
    add_days_to_date, formatted_date_long, formatted_date_short, formatted_utc_offset,
    padded_number_string, parse_utc_offset,
};
pub use core::template::{DateTemplate, Rendered};
pub use domain::model::{DateSnapshot, DateStyle};
pub use domain::ports::{Clock, ConfigProvider};
pub use utils::error::{DateError, Result};
