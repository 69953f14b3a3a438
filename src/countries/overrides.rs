//! Manual corrections for map names the country database does not know.
//!
//! Each entry maps a name as it appears in the SVG either to a literal
//! two-letter code or to the canonical database name to look up instead.

/// What an override resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideTarget {
    /// Use this code directly
    Code(&'static str),
    /// Look this canonical name up in the country database
    Name(&'static str),
}

/// One override table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub name: &'static str,
    pub target: OverrideTarget,
    /// Why the entry exists
    pub reason: &'static str,
}

const fn name(name: &'static str, canonical: &'static str, reason: &'static str) -> Override {
    Override {
        name,
        target: OverrideTarget::Name(canonical),
        reason,
    }
}

const fn code(name: &'static str, code: &'static str, reason: &'static str) -> Override {
    Override {
        name,
        target: OverrideTarget::Code(code),
        reason,
    }
}

const OFFICIAL_NAME: &str = "map uses the short name, database uses the official ISO name";
const RENAMED: &str = "country was renamed; map still uses the former name";
const TERRITORY: &str = "territory with its own assigned code";
const GROUPED: &str = "territory shares the code of its parent grouping";
const USER_ASSIGNED: &str = "not in ISO 3166-1; user-assigned or reserved code";

/// Override entries, keyed by SVG name.
pub static OVERRIDES: &[Override] = &[
    // Official name mismatches
    name("Bolivia", "Bolivia, Plurinational State of", OFFICIAL_NAME),
    name("Republic of Congo", "Congo", OFFICIAL_NAME),
    name(
        "Democratic Republic of the Congo",
        "Congo, The Democratic Republic of the",
        OFFICIAL_NAME,
    ),
    name("Iran", "Iran, Islamic Republic of", OFFICIAL_NAME),
    name("Lao PDR", "Lao People's Democratic Republic", OFFICIAL_NAME),
    name("Dem. Rep. Korea", "Korea, Democratic People's Republic of", OFFICIAL_NAME),
    name("Republic of Korea", "Korea, Republic of", OFFICIAL_NAME),
    name("Syria", "Syrian Arab Republic", OFFICIAL_NAME),
    name("Taiwan", "Taiwan, Province of China", OFFICIAL_NAME),
    name("Tanzania", "Tanzania, United Republic of", OFFICIAL_NAME),
    name("Venezuela", "Venezuela, Bolivarian Republic of", OFFICIAL_NAME),
    name("Vietnam", "Viet Nam", OFFICIAL_NAME),
    // Renamed countries
    name("Macedonia", "North Macedonia", RENAMED),
    name("Turkey", "Türkiye", RENAMED),
    name("Cape Verde", "Cabo Verde", RENAMED),
    // Territories
    code("United States Virgin Islands", "VI", TERRITORY),
    name("Falkland Islands", "Falkland Islands (Malvinas)", TERRITORY),
    code("Faeroe Islands", "FO", TERRITORY),
    code("Canary Islands (Spain)", "IC", "exceptionally reserved ISO code for the Canary Islands"),
    name("Sint Maarten", "Sint Maarten (Dutch part)", TERRITORY),
    // Grouped territories
    code("Saba (Netherlands)", "BQ", GROUPED),
    code("St. Eustatius (Netherlands)", "BQ", GROUPED),
    // Non-ISO entities
    code("Kosovo", "XK", USER_ASSIGNED),
    code("Western Sahara", "EH", "disputed territory; pinned so fuzzy search never picks another code"),
];

/// Find the override for an exact SVG name.
pub fn find_override<'a>(overrides: &'a [Override], svg_name: &str) -> Option<&'a Override> {
    overrides.iter().find(|o| o.name == svg_name)
}
