//! Embedded reference tables.
//!
//! Provinces are listed in their official numbering order. The district map is
//! stored as an ordered slice of `(province, districts)` pairs so the table keeps
//! the same order as [`PROVINCES`].

use crate::utils::error::{LocationError, Result};
use crate::utils::validation::{find_duplicate, Validate};

pub const PROVINCES: &[&str] = &[
    "Western",
    "Central",
    "Southern",
    "Northern",
    "Eastern",
    "North Western",
    "North Central",
    "Uva",
    "Sabaragamuwa",
];

pub const DISTRICTS: &[(&str, &[&str])] = &[
    ("Western", &["Colombo", "Gampaha", "Kalutara"]),
    ("Central", &["Kandy", "Matale", "Nuwara Eliya"]),
    ("Southern", &["Galle", "Matara", "Hambantota"]),
    (
        "Northern",
        &["Jaffna", "Kilinochchi", "Mannar", "Vavuniya", "Mullaitivu"],
    ),
    ("Eastern", &["Batticaloa", "Ampara", "Trincomalee"]),
    ("North Western", &["Kurunegala", "Puttalam"]),
    ("North Central", &["Anuradhapura", "Polonnaruwa"]),
    ("Uva", &["Badulla", "Monaragala"]),
    ("Sabaragamuwa", &["Ratnapura", "Kegalle"]),
];

/// A province list together with its province → districts map.
#[derive(Debug, Clone, Copy)]
pub struct LocationTable {
    provinces: &'static [&'static str],
    districts: &'static [(&'static str, &'static [&'static str])],
}

pub const SRI_LANKA: LocationTable = LocationTable::new(PROVINCES, DISTRICTS);

impl LocationTable {
    pub const fn new(
        provinces: &'static [&'static str],
        districts: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        Self {
            provinces,
            districts,
        }
    }

    pub fn provinces(&self) -> &'static [&'static str] {
        self.provinces
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.districts
    }

    /// Exact, case-sensitive lookup.
    pub fn districts_of(&self, province: &str) -> Option<&'static [&'static str]> {
        self.districts
            .iter()
            .find(|(name, _)| *name == province)
            .map(|(_, districts)| *districts)
    }
}

impl Validate for LocationTable {
    fn validate(&self) -> Result<()> {
        for (index, name) in self.provinces.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(LocationError::EmptyProvinceName { index });
            }
        }

        if let Some(name) = find_duplicate(self.provinces) {
            return Err(LocationError::DuplicateProvince {
                name: name.to_string(),
            });
        }

        // Keys must line up one-to-one with the province list, in the same order.
        if let Some(orphan) = self
            .districts
            .iter()
            .find(|(key, _)| !self.provinces.contains(key))
        {
            return Err(LocationError::OrphanedDistricts {
                province: orphan.0.to_string(),
            });
        }

        let keys: Vec<&str> = self.districts.iter().map(|(key, _)| *key).collect();
        if let Some(key) = find_duplicate(&keys) {
            return Err(LocationError::DuplicateDistrictEntry {
                province: key.to_string(),
            });
        }

        // Unique keys drawn from a unique list: at most one key per province.
        for (position, (key, expected)) in keys.iter().zip(self.provinces).enumerate() {
            if key != expected {
                return Err(LocationError::ProvinceOrderMismatch {
                    position,
                    expected: expected.to_string(),
                    found: key.to_string(),
                });
            }
        }

        if let Some(missing) = self.provinces.get(self.districts.len()) {
            return Err(LocationError::MissingDistricts {
                province: missing.to_string(),
            });
        }

        for (province, districts) in self.districts {
            if districts.is_empty() {
                return Err(LocationError::EmptyDistrictList {
                    province: province.to_string(),
                });
            }
            if let Some(index) = districts.iter().position(|d| d.trim().is_empty()) {
                return Err(LocationError::EmptyDistrictName {
                    province: province.to_string(),
                    index,
                });
            }
            if let Some(district) = find_duplicate(districts) {
                return Err(LocationError::DuplicateDistrict {
                    province: province.to_string(),
                    district: district.to_string(),
                });
            }
        }

        tracing::debug!(
            provinces = self.provinces.len(),
            "location table passed integrity checks"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_is_valid() {
        assert!(SRI_LANKA.validate().is_ok());
        assert_eq!(SRI_LANKA.provinces().len(), 9);
        let district_count: usize = SRI_LANKA.entries().iter().map(|(_, d)| d.len()).sum();
        assert_eq!(district_count, 25);
    }

    #[test]
    fn test_districts_of_is_case_sensitive() {
        assert_eq!(
            SRI_LANKA.districts_of("Southern"),
            Some(&["Galle", "Matara", "Hambantota"][..])
        );
        assert_eq!(SRI_LANKA.districts_of("southern"), None);
    }

    #[test]
    fn test_rejects_duplicate_province() {
        let table = LocationTable::new(
            &["Uva", "Uva"],
            &[("Uva", &["Badulla"]), ("Uva", &["Badulla"])],
        );
        assert!(matches!(
            table.validate(),
            Err(LocationError::DuplicateProvince { name }) if name == "Uva"
        ));
    }

    #[test]
    fn test_rejects_empty_province_name() {
        let table = LocationTable::new(&["Uva", " "], &[("Uva", &["Badulla"])]);
        assert!(matches!(
            table.validate(),
            Err(LocationError::EmptyProvinceName { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_orphaned_districts() {
        let table = LocationTable::new(
            &["Uva"],
            &[("Uva", &["Badulla"]), ("Atlantis", &["Poseidonia"])],
        );
        assert!(matches!(
            table.validate(),
            Err(LocationError::OrphanedDistricts { province }) if province == "Atlantis"
        ));
    }

    #[test]
    fn test_rejects_repeated_district_entry() {
        let table = LocationTable::new(
            &["Uva"],
            &[("Uva", &["Badulla"]), ("Uva", &["Monaragala"])],
        );
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            LocationError::DuplicateDistrictEntry { ref province } if province == "Uva"
        ));
        assert_eq!(err.to_string(), "Province 'Uva' has more than one district entry");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_rejects_missing_districts() {
        let table = LocationTable::new(&["Uva", "Central"], &[("Uva", &["Badulla"])]);
        assert!(matches!(
            table.validate(),
            Err(LocationError::MissingDistricts { province }) if province == "Central"
        ));
    }

    #[test]
    fn test_rejects_reordered_entries() {
        let table = LocationTable::new(
            &["Uva", "Central"],
            &[("Central", &["Kandy"]), ("Uva", &["Badulla"])],
        );
        assert!(matches!(
            table.validate(),
            Err(LocationError::ProvinceOrderMismatch { position: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_district_lists() {
        let empty = LocationTable::new(&["Uva"], &[("Uva", &[])]);
        assert!(matches!(
            empty.validate(),
            Err(LocationError::EmptyDistrictList { .. })
        ));

        let blank = LocationTable::new(&["Uva"], &[("Uva", &["Badulla", ""])]);
        assert!(matches!(
            blank.validate(),
            Err(LocationError::EmptyDistrictName { index: 1, .. })
        ));

        let duplicate = LocationTable::new(&["Uva"], &[("Uva", &["Badulla", "Badulla"])]);
        assert!(matches!(
            duplicate.validate(),
            Err(LocationError::DuplicateDistrict { district, .. }) if district == "Badulla"
        ));
    }
}
