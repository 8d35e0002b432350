//! `{label, value}` projections of the reference tables for selection controls.
//!
//! Both projections are built on first use and shared for the life of the process.

use crate::core::accessors::get_provinces;
use crate::core::reference::SRI_LANKA;
use crate::domain::model::{DistrictOptions, DropdownOption};
use std::sync::LazyLock;

pub static PROVINCE_OPTIONS: LazyLock<Vec<DropdownOption>> = LazyLock::new(|| {
    let options: Vec<DropdownOption> = get_provinces()
        .iter()
        .map(|province| DropdownOption::from_name(province))
        .collect();
    tracing::debug!(count = options.len(), "built province dropdown options");
    options
});

pub static DISTRICT_OPTIONS: LazyLock<DistrictOptions> = LazyLock::new(|| {
    // One entry per table row, so keys follow the canonical province order.
    let entries = SRI_LANKA
        .entries()
        .iter()
        .map(|(province, districts)| {
            let list: Vec<DropdownOption> = districts
                .iter()
                .map(|district| DropdownOption::from_name(district))
                .collect();
            (*province, list)
        })
        .collect();
    let options = DistrictOptions::from_entries(entries);
    tracing::debug!(provinces = options.len(), "built district dropdown options");
    options
});

/// One option per province, in the same order as [`get_provinces`].
pub fn province_options() -> &'static [DropdownOption] {
    &PROVINCE_OPTIONS
}

/// District options keyed by province name, covering every province in
/// canonical order.
pub fn district_options() -> &'static DistrictOptions {
    &DISTRICT_OPTIONS
}

/// District options for `province`, or an empty slice when it is unknown.
pub fn get_district_options_by_province(province: &str) -> &'static [DropdownOption] {
    DISTRICT_OPTIONS.get(province).unwrap_or_default()
}
