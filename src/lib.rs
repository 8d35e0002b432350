pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::accessors::{get_districts_by_province, get_provinces};
pub use crate::core::dropdown::{
    district_options, get_district_options_by_province, province_options, DISTRICT_OPTIONS,
    PROVINCE_OPTIONS,
};
pub use crate::core::reference::{LocationTable, DISTRICTS, PROVINCES, SRI_LANKA};
pub use crate::domain::model::{DistrictOptions, DropdownOption, OutputFormat, Province};
pub use crate::utils::error::{LocationError, Result};
pub use crate::utils::validation::Validate;
