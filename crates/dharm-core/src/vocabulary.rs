//! Static vocabulary shared by the pattern rules.
//!
//! Month abbreviations, full month names and season labels map to 1-based
//! month numbers. The pattern regexes only capture words listed here, so a
//! lookup miss after a successful match is a bug in the table, not bad input.

use phf::phf_map;

/// `Jan`..`Dec` → 1..12. Case-sensitive.
pub static MONTH_ABBREVIATIONS: phf::Map<&'static str, u8> = phf_map! {
    "Jan" => 1,
    "Feb" => 2,
    "Mar" => 3,
    "Apr" => 4,
    "May" => 5,
    "Jun" => 6,
    "Jul" => 7,
    "Aug" => 8,
    "Sep" => 9,
    "Oct" => 10,
    "Nov" => 11,
    "Dec" => 12,
};

/// `January`..`December` → 1..12. Case-sensitive.
pub static MONTH_NAMES: phf::Map<&'static str, u8> = phf_map! {
    "January" => 1,
    "February" => 2,
    "March" => 3,
    "April" => 4,
    "May" => 5,
    "June" => 6,
    "July" => 7,
    "August" => 8,
    "September" => 9,
    "October" => 10,
    "November" => 11,
    "December" => 12,
};

/// Season label → `(first_month, last_month)`.
///
/// `Automn` is spelled the way it appears in the source datasets.
pub static SEASONS: phf::Map<&'static str, (u8, u8)> = phf_map! {
    "Spring" => (4, 6),
    "Summer" => (7, 9),
    "Automn" => (10, 12),
    "Winter" => (1, 3),
};

/// Two-digit month for a captured abbreviation.
///
/// # Panics
///
/// If `abbr` is not in [`MONTH_ABBREVIATIONS`].
pub fn abbreviated_month(abbr: &str) -> String {
    let month = MONTH_ABBREVIATIONS
        .get(abbr)
        .unwrap_or_else(|| panic!("pattern captured unknown month abbreviation {abbr:?}"));
    format!("{month:02}")
}

/// Two-digit month for a captured full month name.
///
/// # Panics
///
/// If `name` is not in [`MONTH_NAMES`].
pub fn named_month(name: &str) -> String {
    let month = MONTH_NAMES
        .get(name)
        .unwrap_or_else(|| panic!("pattern captured unknown month name {name:?}"));
    format!("{month:02}")
}

/// Two-digit first and last month of a captured season.
///
/// # Panics
///
/// If `season` is not in [`SEASONS`].
pub fn season_months(season: &str) -> (String, String) {
    let (first, last) = SEASONS
        .get(season)
        .unwrap_or_else(|| panic!("pattern captured unknown season {season:?}"));
    (format!("{first:02}"), format!("{last:02}"))
}
