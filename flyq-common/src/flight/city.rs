//! Airport code to city display name resolution

/// Fixed code → display name table
const CITY_MAP: [(&str, &str); 4] = [
    ("BLR", "Bangalore"),
    ("BOM", "Mumbai"),
    ("DEL", "Delhi"),
    ("HYD", "Hyderabad"),
];

/// Resolve an airport code to its display name.
///
/// Unknown codes are returned unchanged, so an empty code resolves to the
/// empty string.
///
/// # Examples
///
/// ```
/// use flyq_common::flight::resolve_city;
///
/// assert_eq!(resolve_city("BLR"), "Bangalore");
/// assert_eq!(resolve_city("XYZ"), "XYZ");
/// assert_eq!(resolve_city(""), "");
/// ```
pub fn resolve_city(code: &str) -> &str {
    CITY_MAP
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}
