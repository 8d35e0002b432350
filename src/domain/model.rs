use crate::core::accessors::get_districts_by_province;
use crate::utils::error::LocationError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// A `{label, value}` pair for selection controls. Label and value are the
/// same name for this dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::new(name, name)
    }
}

/// District options keyed by province, kept in the order the provinces were added.
///
/// Serializes as a map whose keys follow that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistrictOptions {
    entries: Vec<(&'static str, Vec<DropdownOption>)>,
}

impl DistrictOptions {
    pub fn from_entries(entries: Vec<(&'static str, Vec<DropdownOption>)>) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, province: &str) -> Option<&[DropdownOption]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == province)
            .map(|(_, options)| options.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[DropdownOption])> + '_ {
        self.entries
            .iter()
            .map(|(name, options)| (*name, options.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for DistrictOptions {
    type Output = [DropdownOption];

    /// Panics when `province` has no entry, like `HashMap` indexing.
    fn index(&self, province: &str) -> &Self::Output {
        match self.get(province) {
            Some(options) => options,
            None => panic!("no district options for province '{province}'"),
        }
    }
}

impl Serialize for DistrictOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (province, options) in &self.entries {
            map.serialize_entry(province, options)?;
        }
        map.end()
    }
}

/// The nine provinces, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    Western,
    Central,
    Southern,
    Northern,
    Eastern,
    #[serde(rename = "North Western")]
    NorthWestern,
    #[serde(rename = "North Central")]
    NorthCentral,
    Uva,
    Sabaragamuwa,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::Western,
        Province::Central,
        Province::Southern,
        Province::Northern,
        Province::Eastern,
        Province::NorthWestern,
        Province::NorthCentral,
        Province::Uva,
        Province::Sabaragamuwa,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Province::Western => "Western",
            Province::Central => "Central",
            Province::Southern => "Southern",
            Province::Northern => "Northern",
            Province::Eastern => "Eastern",
            Province::NorthWestern => "North Western",
            Province::NorthCentral => "North Central",
            Province::Uva => "Uva",
            Province::Sabaragamuwa => "Sabaragamuwa",
        }
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Province> {
        Province::ALL.into_iter().find(|p| p.as_str() == name)
    }

    pub fn districts(self) -> &'static [&'static str] {
        get_districts_by_province(self.as_str()).unwrap_or_default()
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Province {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Province::from_name(s).ok_or_else(|| LocationError::UnknownProvince {
            name: s.to_string(),
        })
    }
}

/// Rendering target for exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
