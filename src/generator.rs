//! The generation pipeline: load, aggregate, resolve, emit.

use std::path::Path;

use tracing::{info, warn};

use crate::aggregate::{aggregate, Aggregation};
use crate::countries::IdResolver;
use crate::emit::{write_listings, Emitter, OutputFiles};
use crate::error::Result;
use crate::model::ResolvedCountry;
use crate::svg::load_paths;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// `<path>` elements read from the SVG
    pub path_elements: usize,
    /// Countries written to each listing
    pub countries: usize,
    pub files: OutputFiles,
    /// Names that fell back to being their own id, in emission order
    pub unmapped: Vec<String>,
}

/// Resolve every aggregated country, keeping the aggregation's name order.
pub fn resolve_countries(countries: Aggregation, resolver: &IdResolver<'_>) -> Vec<ResolvedCountry> {
    countries
        .into_iter()
        .map(|(name, country)| {
            let resolution = resolver.resolve(&name, country.candidate_id.as_deref());
            ResolvedCountry {
                id: resolution.id,
                name,
                paths: country.paths,
                source: resolution.source,
            }
        })
        .collect()
}

/// Run the whole pipeline for `svg_file`, writing listings under `output_base`.
pub fn generate(
    svg_file: &Path,
    output_base: &str,
    resolver: &IdResolver<'_>,
    emitter: &dyn Emitter,
) -> Result<GenerationReport> {
    let elements = load_paths(svg_file)?;
    let path_elements = elements.len();
    info!(count = path_elements, "Aggregating paths");

    let aggregated = aggregate(elements);
    info!(countries = aggregated.len(), "Resolving country ids");

    let resolved = resolve_countries(aggregated, resolver);
    let unmapped: Vec<String> = resolved
        .iter()
        .filter(|c| c.is_unmapped())
        .map(|c| c.name.clone())
        .collect();
    if !unmapped.is_empty() {
        warn!(count = unmapped.len(), names = ?unmapped, "Some names could not be mapped to a code");
    }

    let files = write_listings(emitter, output_base, &resolved)?;

    Ok(GenerationReport {
        path_elements,
        countries: resolved.len(),
        files,
        unmapped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::KotlinEmitter;
    use crate::error::GenerateError;
    use pretty_assertions::assert_eq;

    const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <path name="XY" d="M 5 5 L 6 6 z"/>
  <path name="Bolivia" d="M 1 1
      L 2   2 z"/>
  <path class="Atlantis" d="M 9 9"/>
  <path name="Bolivia" d="M 3 3"/>
  <path name="France" id="FR" d="M 7 7"/>
</svg>
"#;

    fn run(svg: &str) -> (tempfile::TempDir, Result<GenerationReport>) {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("map.svg");
        std::fs::write(&svg_path, svg).unwrap();
        let base = dir.path().join("WorldMap");

        let report = generate(
            &svg_path,
            base.to_str().unwrap(),
            &IdResolver::default(),
            &KotlinEmitter::default(),
        );
        (dir, report)
    }

    /// `(id, name)` pairs from a generated listing.
    fn entries(listing: &str, prefix: &str) -> Vec<(String, String)> {
        listing
            .lines()
            .filter_map(|line| line.trim().strip_prefix(prefix))
            .map(|rest| {
                let mut quoted = rest.split('"');
                let id = quoted.nth(1).unwrap().to_string();
                let name = quoted.nth(1).unwrap().to_string();
                (id, name)
            })
            .collect()
    }

    #[test]
    fn end_to_end_resolves_and_writes_both_listings() {
        let (_dir, report) = run(MAP);
        let report = report.unwrap();

        assert_eq!(report.path_elements, 5);
        assert_eq!(report.countries, 4);
        assert_eq!(report.unmapped, vec!["Atlantis"]);

        let heavy = std::fs::read_to_string(&report.files.paths).unwrap();
        let light = std::fs::read_to_string(&report.files.countries).unwrap();

        let expected = vec![
            ("Atlantis".to_string(), "Atlantis".to_string()),
            ("BO".to_string(), "Bolivia".to_string()),
            ("FR".to_string(), "France".to_string()),
            ("XY".to_string(), "XY".to_string()),
        ];
        assert_eq!(entries(&heavy, "CountryPath(id = "), expected);
        assert_eq!(entries(&light, "Country(id = "), expected);

        assert!(heavy.contains("            \"M 1 1 L 2 2 z\",\n            \"M 3 3\"\n"));
    }

    #[test]
    fn listings_stay_index_aligned() {
        let (_dir, report) = run(MAP);
        let report = report.unwrap();

        let heavy = std::fs::read_to_string(&report.files.paths).unwrap();
        let light = std::fs::read_to_string(&report.files.countries).unwrap();
        let heavy = entries(&heavy, "CountryPath(id = ");
        let light = entries(&light, "Country(id = ");

        assert_eq!(heavy.len(), report.countries);
        assert_eq!(heavy, light);
    }

    #[test]
    fn resolve_keeps_name_order() {
        let aggregated = aggregate(vec![
            crate::model::PathElement {
                name: "Vietnam".into(),
                id: None,
                path_data: "M 0".into(),
            },
            crate::model::PathElement {
                name: "Kosovo".into(),
                id: None,
                path_data: "M 1".into(),
            },
        ]);

        let resolved = resolve_countries(aggregated, &IdResolver::default());
        let ids: Vec<_> = resolved.iter().map(|c| (c.name.as_str(), c.id.as_str())).collect();
        assert_eq!(ids, vec![("Kosovo", "XK"), ("Vietnam", "VN")]);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("WorldMap");

        let result = generate(
            &dir.path().join("absent.svg"),
            base.to_str().unwrap(),
            &IdResolver::default(),
            &KotlinEmitter::default(),
        );

        assert!(matches!(result, Err(GenerateError::NotFound { .. })));
        assert!(!dir.path().join("WorldMapPaths.kt").exists());
    }

    #[test]
    fn malformed_input_is_parse_error() {
        let (_dir, report) = run("<svg xmlns=\"http://www.w3.org/2000/svg\"><path");
        assert!(matches!(report, Err(GenerateError::Parse { .. })));
    }
}
