use crate::core::accessors::get_provinces;
use crate::core::dropdown::{district_options, get_district_options_by_province, province_options};
use crate::core::{DistrictOptions, DropdownOption, OutputFormat, Province};
use crate::utils::error::{LocationError, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// What to export and how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportRequest {
    /// Restrict output to one province. `None` exports every province.
    pub province: Option<Province>,
    pub format: OutputFormat,
    /// Emit `{label, value}` options instead of raw names.
    pub dropdown: bool,
}

impl ExportRequest {
    fn provinces(&self) -> Vec<&'static str> {
        match self.province {
            Some(province) => vec![province.as_str()],
            None => get_provinces().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProvinceRecord {
    province: &'static str,
    districts: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct DistrictRow {
    province: &'static str,
    district: &'static str,
}

#[derive(Debug, Serialize)]
struct DropdownRow<'a> {
    province: &'static str,
    label: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct DropdownDocument {
    provinces: &'static [DropdownOption],
    districts: &'static DistrictOptions,
}

fn districts_of(province: &str) -> &'static [&'static str] {
    Province::from_name(province)
        .map(Province::districts)
        .unwrap_or_default()
}

pub fn render(request: &ExportRequest) -> Result<String> {
    tracing::debug!(?request, "rendering export");
    match request.format {
        OutputFormat::Text => Ok(render_text(request)),
        OutputFormat::Json => render_json(request),
        OutputFormat::Csv => render_csv(request),
    }
}

fn render_text(request: &ExportRequest) -> String {
    let mut out = String::new();
    if request.dropdown {
        // Without a province the dropdown is the province picker itself.
        let options = match request.province {
            Some(province) => get_district_options_by_province(province.as_str()),
            None => province_options(),
        };
        for option in options {
            out.push_str(&format!("{}={}\n", option.label, option.value));
        }
    } else {
        for province in request.provinces() {
            out.push_str(&format!("{}: {}\n", province, districts_of(province).join(", ")));
        }
    }
    out
}

fn render_json(request: &ExportRequest) -> Result<String> {
    let mut json = match (request.dropdown, request.province) {
        // Single province: just the option array a form control consumes.
        (true, Some(province)) => {
            serde_json::to_string_pretty(get_district_options_by_province(province.as_str()))?
        }
        (true, None) => serde_json::to_string_pretty(&DropdownDocument {
            provinces: province_options(),
            districts: district_options(),
        })?,
        (false, _) => {
            let records: Vec<ProvinceRecord> = request
                .provinces()
                .into_iter()
                .map(|province| ProvinceRecord {
                    province,
                    districts: districts_of(province),
                })
                .collect();
            serde_json::to_string_pretty(&records)?
        }
    };
    json.push('\n');
    Ok(json)
}

fn render_csv(request: &ExportRequest) -> Result<String> {
    // Headers come from the row struct's field names on the first record.
    let mut writer = csv::Writer::from_writer(Vec::new());
    for province in request.provinces() {
        if request.dropdown {
            for option in get_district_options_by_province(province) {
                writer.serialize(DropdownRow {
                    province,
                    label: &option.label,
                    value: &option.value,
                })?;
            }
        } else {
            for &district in districts_of(province) {
                writer.serialize(DistrictRow { province, district })?;
            }
        }
    }

    // Flush the buffered rows before taking the bytes back.
    let bytes = writer
        .into_inner()
        .map_err(|e| LocationError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        LocationError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Writes rendered output to `path`, creating parent directories, or to stdout.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            // Create the target directory first
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            tracing::info!("📁 Output saved to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
