use crate::app::export::ExportRequest;
use crate::core::{OutputFormat, Province};
use crate::utils::error::{LocationError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sl-locations")]
#[command(about = "Sri Lanka province and district reference data")]
pub struct CliConfig {
    #[arg(long, help = "Only export this province (exact, case-sensitive name)")]
    pub province: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Emit label/value dropdown options instead of raw names")]
    pub dropdown: bool,

    #[arg(long, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(province) = &self.province {
            validate_non_empty_string("province", province)?;
            province.parse::<Province>()?;
        }

        if let Some(output) = &self.output {
            validate_path("output", &output.to_string_lossy())?;
        }

        Ok(())
    }
}

impl TryFrom<&CliConfig> for ExportRequest {
    type Error = LocationError;

    fn try_from(config: &CliConfig) -> Result<Self> {
        let province = config
            .province
            .as_deref()
            .map(str::parse::<Province>)
            .transpose()?;

        Ok(ExportRequest {
            province,
            format: config.format,
            dropdown: config.dropdown,
        })
    }
}
