//! Country identifier resolution.
//!
//! Turns a map name (plus an optional id from the SVG) into a stable
//! two-letter code, falling back to the name itself when nothing matches.

mod database;
mod overrides;

pub use database::{get_by_name, search_fuzzy, CountryRecord, COUNTRIES};
pub use overrides::{find_override, Override, OverrideTarget, OVERRIDES};

use tracing::{debug, trace};

use crate::model::IdSource;

/// A resolved identifier and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub id: String,
    pub source: IdSource,
}

impl Resolution {
    fn new(id: impl Into<String>, source: IdSource) -> Self {
        Self {
            id: id.into(),
            source,
        }
    }
}

/// Resolves names against an override table and a country database.
#[derive(Debug, Clone, Copy)]
pub struct IdResolver<'a> {
    overrides: &'a [Override],
    countries: &'a [CountryRecord],
}

impl Default for IdResolver<'static> {
    fn default() -> Self {
        Self::new(OVERRIDES, COUNTRIES)
    }
}

impl<'a> IdResolver<'a> {
    pub fn new(overrides: &'a [Override], countries: &'a [CountryRecord]) -> Self {
        Self {
            overrides,
            countries,
        }
    }

    /// Resolve `name` to an identifier.
    ///
    /// Order: a two-character `candidate_id`, a name that already is a
    /// code, the override table, an exact database match, then fuzzy
    /// search. When all of these fail the name itself becomes the id and
    /// the source is [`IdSource::Unmapped`].
    pub fn resolve(&self, name: &str, candidate_id: Option<&str>) -> Resolution {
        if let Some(id) = candidate_id.filter(|id| id.chars().count() == 2) {
            return Resolution::new(id, IdSource::Supplied);
        }

        let resolution = self
            .resolve_code(name)
            .unwrap_or_else(|| Resolution::new(name, IdSource::Unmapped));

        debug!(name, id = %resolution.id, source = ?resolution.source, "Resolved country id");
        resolution
    }

    fn resolve_code(&self, name: &str) -> Option<Resolution> {
        if is_code(name) {
            return Some(Resolution::new(name, IdSource::LiteralName));
        }

        if let Some(entry) = find_override(self.overrides, name) {
            trace!(name, reason = entry.reason, "Applying override");
            return match entry.target {
                OverrideTarget::Code(code) => Some(Resolution::new(code, IdSource::OverrideCode)),
                OverrideTarget::Name(canonical) => get_by_name(self.countries, canonical)
                    .map(|c| Resolution::new(c.alpha_2, IdSource::OverrideName)),
            };
        }

        if let Some(country) = get_by_name(self.countries, name) {
            return Some(Resolution::new(country.alpha_2, IdSource::Exact));
        }

        search_fuzzy(self.countries, name)
            .first()
            .map(|c| Resolution::new(c.alpha_2, IdSource::Fuzzy))
    }
}

/// Two uppercase ASCII letters.
///
/// Deliberately narrower than "two uppercase characters": names such as
/// "A1" or "ÉÉ" go through the tables instead of being taken as codes.
fn is_code(value: &str) -> bool {
    value.len() == 2 && value.chars().all(|c| c.is_ascii_uppercase())
}
