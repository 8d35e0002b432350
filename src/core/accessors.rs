use crate::core::reference::SRI_LANKA;

/// All provinces in canonical order. Always nine entries.
pub fn get_provinces() -> &'static [&'static str] {
    SRI_LANKA.provinces()
}

/// Districts of `province`, matched exactly and case-sensitively.
///
/// Returns `None` for an unknown province rather than an empty list.
pub fn get_districts_by_province(province: &str) -> Option<&'static [&'static str]> {
    let districts = SRI_LANKA.districts_of(province);
    if districts.is_none() {
        tracing::debug!(province, "district lookup for unknown province");
    }
    districts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_provinces() {
        let provinces = get_provinces();
        assert_eq!(provinces.len(), 9);
        assert!(provinces.contains(&"Central"));
        assert!(provinces.contains(&"Western"));
        assert_eq!(provinces[0], "Western");
        assert_eq!(provinces[1], "Central");
    }

    #[test]
    fn test_get_districts_by_province() {
        assert_eq!(
            get_districts_by_province("Central"),
            Some(&["Kandy", "Matale", "Nuwara Eliya"][..])
        );
        assert_eq!(
            get_districts_by_province("Northern").map(<[_]>::len),
            Some(5)
        );
    }

    #[test]
    fn test_unknown_province_is_absent() {
        assert_eq!(get_districts_by_province("Invalid"), None);
        assert_eq!(get_districts_by_province("central"), None);
        assert_eq!(get_districts_by_province("Central "), None);
        assert_eq!(get_districts_by_province(""), None);
    }
}
