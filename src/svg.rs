//! SVG loading: extracts `<path>` elements from the map file.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{GenerateError, Result};
use crate::model::PathElement;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Read and parse the SVG at `path`, returning its path elements in
/// document order.
pub fn load_paths(path: &Path) -> Result<Vec<PathElement>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GenerateError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            GenerateError::io(path, e)
        }
    })?;

    let elements = parse_paths(&content).map_err(|source| GenerateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = elements.len(), "Loaded path elements");
    Ok(elements)
}

/// Parse SVG text and collect every `<path>` in the SVG namespace.
///
/// Elements without a usable name or without geometry are skipped. A
/// DOCTYPE declaration is accepted, since editors emit one for SVG 1.1.
pub fn parse_paths(content: &str) -> std::result::Result<Vec<PathElement>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(content, options)?;

    let elements = doc
        .descendants()
        .filter(|node| node.is_element())
        .filter(|node| {
            let tag = node.tag_name();
            tag.name() == "path" && tag.namespace() == Some(SVG_NS)
        })
        .filter_map(|node| {
            let name = non_empty(node.attribute("name"))
                .or_else(|| non_empty(node.attribute("class")));
            let path_data = non_empty(node.attribute("d"));

            match (name, path_data) {
                (Some(name), Some(path_data)) => Some(PathElement {
                    name: name.to_string(),
                    id: node.attribute("id").map(str::to_string),
                    path_data: path_data.to_string(),
                }),
                _ => {
                    debug!(
                        position = node.range().start,
                        "Skipping path without name or geometry"
                    );
                    None
                }
            }
        })
        .collect();

    Ok(elements)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn collects_namespaced_paths_in_document_order() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <g>
                <path name="France" id="FR" d="M 1 1 L 2 2"/>
                <path class="Spain" d="M 3 3"/>
            </g>
            <path name="France" d="M 4 4"/>
        </svg>"#;

        let paths = parse_paths(svg).unwrap();

        assert_eq!(
            paths,
            vec![
                PathElement {
                    name: "France".into(),
                    id: Some("FR".into()),
                    path_data: "M 1 1 L 2 2".into(),
                },
                PathElement {
                    name: "Spain".into(),
                    id: None,
                    path_data: "M 3 3".into(),
                },
                PathElement {
                    name: "France".into(),
                    id: None,
                    path_data: "M 4 4".into(),
                },
            ]
        );
    }

    #[test]
    fn name_attribute_wins_over_class() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <path name="Chile" class="land" d="M 0 0"/>
            <path name="" class="Peru" d="M 0 0"/>
        </svg>"#;

        let names: Vec<_> = parse_paths(svg).unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Chile", "Peru"]);
    }

    #[test]
    fn skips_incomplete_and_foreign_paths() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:other">
            <path d="M 0 0"/>
            <path name="Nowhere"/>
            <path name="Empty" d=""/>
            <x:path name="Foreign" d="M 0 0"/>
            <path name="Kept" d="M 0 0"/>
        </svg>"#;

        let paths = parse_paths(svg).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].name, "Kept");
    }

    #[test]
    fn accepts_svg_11_doctype() {
        let svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" version="1.1">
    <path name="France" d="M 1 1"/>
</svg>"#;

        let paths = parse_paths(svg).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].name, "France");
        assert_eq!(paths[0].path_data, "M 1 1");
    }

    #[test]
    fn paths_outside_svg_namespace_are_ignored() {
        let svg = r#"<svg><path name="France" d="M 0 0"/></svg>"#;
        assert!(parse_paths(svg).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.svg");

        match load_paths(&missing) {
            Err(GenerateError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_xml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<svg><path name=\"x\"").unwrap();

        assert!(matches!(
            load_paths(file.path()),
            Err(GenerateError::Parse { .. })
        ));
    }
}
