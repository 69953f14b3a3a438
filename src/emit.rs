//! Output listings for the resolved countries.
//!
//! Two files are written per run: a heavy one carrying path geometry and a
//! light one with only ids and names. Both list countries in the same
//! order so consumers can zip them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{GenerateError, Result};
use crate::model::ResolvedCountry;

/// Target-language serializer for the two listings.
pub trait Emitter {
    /// File extension of generated sources, without the dot
    fn extension(&self) -> &str;

    /// Write the listing with path geometry.
    fn write_paths(
        &self,
        out: &mut dyn Write,
        object: &str,
        countries: &[ResolvedCountry],
    ) -> std::io::Result<()>;

    /// Write the id/name-only listing.
    fn write_countries(
        &self,
        out: &mut dyn Write,
        object: &str,
        countries: &[ResolvedCountry],
    ) -> std::io::Result<()>;
}

/// Kotlin `object` listings of `CountryPath` / `Country` data classes.
#[derive(Debug, Clone)]
pub struct KotlinEmitter {
    package: String,
}

impl KotlinEmitter {
    pub const DEFAULT_PACKAGE: &'static str = "com.eltonkola.bota";

    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    fn write_listing<F>(
        &self,
        out: &mut dyn Write,
        object: &str,
        countries: &[ResolvedCountry],
        mut entry: F,
    ) -> std::io::Result<()>
    where
        F: FnMut(&mut dyn Write, &ResolvedCountry) -> std::io::Result<()>,
    {
        writeln!(out, "package {}", self.package)?;
        writeln!(out)?;
        writeln!(out, "object {object} {{")?;
        writeln!(out, "    val data = listOf(")?;
        for (i, country) in countries.iter().enumerate() {
            write!(out, "        ")?;
            entry(&mut *out, country)?;
            writeln!(out, "{}", if i + 1 < countries.len() { "," } else { "" })?;
        }
        writeln!(out, "    )")?;
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl Default for KotlinEmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PACKAGE)
    }
}

impl Emitter for KotlinEmitter {
    fn extension(&self) -> &str {
        "kt"
    }

    fn write_paths(
        &self,
        out: &mut dyn Write,
        object: &str,
        countries: &[ResolvedCountry],
    ) -> std::io::Result<()> {
        self.write_listing(out, object, countries, |out, country| {
            writeln!(
                out,
                "CountryPath(id = {}, name = {}, paths = listOf(",
                kotlin_string(&country.id),
                kotlin_string(&country.name)
            )?;
            let paths: Vec<String> = country
                .paths
                .iter()
                .map(|p| format!("            {}", kotlin_string(p)))
                .collect();
            writeln!(out, "{}", paths.join(",\n"))?;
            write!(out, "        ))")
        })
    }

    fn write_countries(
        &self,
        out: &mut dyn Write,
        object: &str,
        countries: &[ResolvedCountry],
    ) -> std::io::Result<()> {
        self.write_listing(out, object, countries, |out, country| {
            write!(
                out,
                "Country(id = {}, name = {})",
                kotlin_string(&country.id),
                kotlin_string(&country.name)
            )
        })
    }
}

/// Quote `value` as a Kotlin string literal.
///
/// `$` is escaped so nothing is treated as a string template.
pub fn kotlin_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04X}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Object holding the path listing; the map library refers to it by name.
pub const PATHS_OBJECT: &str = "WorldMapPaths";
/// Object holding the country listing.
pub const COUNTRIES_OBJECT: &str = "WorldMapCountries";

/// Paths of the two listings for an output base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub paths: PathBuf,
    pub countries: PathBuf,
}

impl OutputFiles {
    /// `<base>Paths.<ext>` and `<base>Countries.<ext>`.
    pub fn for_base(base: &str, extension: &str) -> Self {
        Self {
            paths: PathBuf::from(format!("{base}Paths.{extension}")),
            countries: PathBuf::from(format!("{base}Countries.{extension}")),
        }
    }
}

/// Write both listings. `base` only decides where the files go; the
/// generated object names are always [`PATHS_OBJECT`] and
/// [`COUNTRIES_OBJECT`].
///
/// The paths file is complete on disk before the countries file is opened;
/// it is left in place if the second write fails.
pub fn write_listings(
    emitter: &dyn Emitter,
    base: &str,
    countries: &[ResolvedCountry],
) -> Result<OutputFiles> {
    let files = OutputFiles::for_base(base, emitter.extension());

    write_file(&files.paths, |out| {
        emitter.write_paths(out, PATHS_OBJECT, countries)
    })?;
    info!(path = %files.paths.display(), countries = countries.len(), "Wrote path listing");

    write_file(&files.countries, |out| {
        emitter.write_countries(out, COUNTRIES_OBJECT, countries)
    })?;
    info!(path = %files.countries.display(), countries = countries.len(), "Wrote country listing");

    Ok(files)
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| GenerateError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| GenerateError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdSource;
    use pretty_assertions::assert_eq;

    fn country(id: &str, name: &str, paths: &[&str]) -> ResolvedCountry {
        ResolvedCountry {
            id: id.into(),
            name: name.into(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            source: IdSource::Exact,
        }
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn escapes_kotlin_strings() {
        assert_eq!(kotlin_string("France"), r#""France""#);
        assert_eq!(kotlin_string(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(kotlin_string("cost $5"), r#""cost \$5""#);
        assert_eq!(kotlin_string("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(kotlin_string("\u{1}"), r#""\u0001""#);
        assert_eq!(kotlin_string("Côte d'Ivoire"), "\"Côte d'Ivoire\"");
    }

    #[test]
    fn paths_listing_layout() {
        let countries = vec![
            country("AL", "Albania", &["M 1 1", "M 2 2"]),
            country("DZ", "Algeria", &["M 3 3"]),
        ];

        let text = render(|out| KotlinEmitter::default().write_paths(out, "WorldMapPaths", &countries));

        assert_eq!(
            text,
            r#"package com.eltonkola.bota

object WorldMapPaths {
    val data = listOf(
        CountryPath(id = "AL", name = "Albania", paths = listOf(
            "M 1 1",
            "M 2 2"
        )),
        CountryPath(id = "DZ", name = "Algeria", paths = listOf(
            "M 3 3"
        ))
    )
}
"#
        );
    }

    #[test]
    fn countries_listing_layout() {
        let countries = vec![country("AL", "Albania", &["M 1"]), country("DZ", "Algeria", &["M 2"])];

        let text = render(|out| KotlinEmitter::new("org.example.maps").write_countries(out, "Atlas", &countries));

        assert_eq!(
            text,
            r#"package org.example.maps

object Atlas {
    val data = listOf(
        Country(id = "AL", name = "Albania"),
        Country(id = "DZ", name = "Algeria")
    )
}
"#
        );
    }

    #[test]
    fn empty_listing_is_still_valid() {
        let text = render(|out| KotlinEmitter::default().write_countries(out, "Empty", &[]));
        assert!(text.ends_with("    val data = listOf(\n    )\n}\n"));
    }

    #[test]
    fn writes_both_files_under_base() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("Atlas");
        let countries = vec![country("FR", "France", &["M 0 0"])];

        let files = write_listings(&KotlinEmitter::default(), base.to_str().unwrap(), &countries).unwrap();

        assert_eq!(files.paths, dir.path().join("AtlasPaths.kt"));
        assert_eq!(files.countries, dir.path().join("AtlasCountries.kt"));
        let paths = std::fs::read_to_string(&files.paths).unwrap();
        let light = std::fs::read_to_string(&files.countries).unwrap();
        assert!(paths.contains("object WorldMapPaths {"));
        assert!(light.contains("object WorldMapCountries {"));
        assert!(light.contains(r#"Country(id = "FR", name = "France")"#));
    }

    #[test]
    fn object_names_do_not_follow_base() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("world-map.v2");

        let files = write_listings(&KotlinEmitter::default(), base.to_str().unwrap(), &[]).unwrap();

        assert_eq!(files.paths, dir.path().join("world-map.v2Paths.kt"));
        let paths = std::fs::read_to_string(&files.paths).unwrap();
        let light = std::fs::read_to_string(&files.countries).unwrap();
        assert!(paths.contains("\nobject WorldMapPaths {\n"));
        assert!(light.contains("\nobject WorldMapCountries {\n"));
        assert!(!paths.contains("world-map"));
    }

    #[test]
    fn failed_second_listing_keeps_first() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("Atlas");
        let blocked = dir.path().join("AtlasCountries.kt");
        std::fs::create_dir(&blocked).unwrap();
        let countries = vec![country("FR", "France", &["M 0 0"])];

        let result = write_listings(&KotlinEmitter::default(), base.to_str().unwrap(), &countries);

        match result {
            Err(GenerateError::Io { path, .. }) => assert_eq!(path, blocked),
            other => panic!("expected Io error, got {other:?}"),
        }
        let expected = render(|out| KotlinEmitter::default().write_paths(out, PATHS_OBJECT, &countries));
        let written = std::fs::read_to_string(dir.path().join("AtlasPaths.kt")).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn missing_output_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("no-such-dir").join("Atlas");

        let result = write_listings(&KotlinEmitter::default(), base.to_str().unwrap(), &[]);
        assert!(matches!(result, Err(GenerateError::Io { .. })));
    }
}
