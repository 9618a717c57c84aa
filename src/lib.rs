pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{app_router, AppState};
pub use config::toml_config::TomlConfig;
pub use core::{
    converter::{convert_range_to_roman, convert_to_roman_numeral, RomanConverter},
    server::NumeralServer,
};
pub use utils::error::{Result, RomanError};
