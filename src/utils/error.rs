use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Unknown province: {name}")]
    UnknownProvince { name: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Province name at position {index} is empty")]
    EmptyProvinceName { index: usize },

    #[error("Province '{name}' is listed more than once")]
    DuplicateProvince { name: String },

    #[error("Province '{province}' has no district entry")]
    MissingDistricts { province: String },

    #[error("District entry '{province}' does not belong to any listed province")]
    OrphanedDistricts { province: String },

    #[error("Province '{province}' has more than one district entry")]
    DuplicateDistrictEntry { province: String },

    #[error("District entry at position {position} is '{found}', expected '{expected}'")]
    ProvinceOrderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Province '{province}' has an empty district list")]
    EmptyDistrictList { province: String },

    #[error("District at position {index} of '{province}' is empty")]
    EmptyDistrictName { province: String, index: usize },

    #[error("District '{district}' is listed more than once under '{province}'")]
    DuplicateDistrict { province: String, district: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl LocationError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            LocationError::UnknownProvince { .. } | LocationError::InvalidConfigValue { .. } => 1,
            LocationError::IoError(_)
            | LocationError::SerializationError(_)
            | LocationError::CsvError(_) => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocationError>;
