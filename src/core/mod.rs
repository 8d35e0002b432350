pub mod accessors;
pub mod dropdown;
pub mod reference;

pub use crate::domain::model::{DistrictOptions, DropdownOption, OutputFormat, Province};
pub use crate::utils::error::Result;
pub use crate::utils::validation::Validate;
