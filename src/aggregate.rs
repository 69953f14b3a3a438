//! Groups path elements by country name.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{AggregatedCountry, PathElement};

/// Countries keyed by name; iteration order is the emission order.
pub type Aggregation = BTreeMap<String, AggregatedCountry>;

/// Collapse whitespace runs in a geometry string to single spaces and trim.
pub fn normalize_path_data(path_data: &str) -> String {
    path_data.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Group `elements` by exact name, keeping path encounter order and the
/// first non-empty id seen for each name.
pub fn aggregate<I>(elements: I) -> Aggregation
where
    I: IntoIterator<Item = PathElement>,
{
    let mut countries = Aggregation::new();

    for element in elements {
        let country = countries.entry(element.name).or_default();
        country.paths.push(normalize_path_data(&element.path_data));

        if country.candidate_id.is_none() {
            country.candidate_id = element.id.filter(|id| !id.is_empty());
        }
    }

    debug!(countries = countries.len(), "Aggregation complete");
    countries
}
