//! Domain model for one generation run

/// A `<path>` element as read from the SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathElement {
    /// Country name, from the `name` attribute or else `class`
    pub name: String,
    /// Optional `id` attribute, normally a two-letter code
    pub id: Option<String>,
    /// Raw `d` geometry string
    pub path_data: String,
}

/// All geometry collected for a single country name.
///
/// `paths` is never empty: an entry is only created when a path is pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedCountry {
    pub candidate_id: Option<String>,
    pub paths: Vec<String>,
}

/// How a country's identifier was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    /// Two-character `id` attribute from the SVG
    Supplied,
    /// The name already is a two-letter code
    LiteralName,
    /// Override table entry holding a code
    OverrideCode,
    /// Override table entry holding a canonical database name
    OverrideName,
    /// Exact database name match
    Exact,
    /// Top fuzzy search hit
    Fuzzy,
    /// Nothing matched; the name is used as the id
    Unmapped,
}

/// A country ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCountry {
    pub id: String,
    pub name: String,
    pub paths: Vec<String>,
    pub source: IdSource,
}

impl ResolvedCountry {
    pub fn is_unmapped(&self) -> bool {
        self.source == IdSource::Unmapped
    }
}
