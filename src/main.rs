//! Entry point: generate Kotlin world map data from an SVG

mod aggregate;
mod countries;
mod emit;
mod error;
mod generator;
mod model;
mod svg;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::countries::IdResolver;
use crate::emit::KotlinEmitter;

/// Generate Kotlin map data files from an SVG.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the input SVG file
    svg_file: PathBuf,

    /// Base name for the output files ('WorldMap' creates WorldMapPaths.kt
    /// and WorldMapCountries.kt)
    #[arg(short, long, default_value = "WorldMap")]
    output: String,
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let report = match generator::generate(
        &args.svg_file,
        &args.output,
        &IdResolver::default(),
        &KotlinEmitter::default(),
    ) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Generation failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Found {} <path> elements for {} countries.",
        report.path_elements, report.countries
    );
    println!("Generated path data -> {}", report.files.paths.display());
    println!("Generated country list -> {}", report.files.countries.display());

    if !report.unmapped.is_empty() {
        println!();
        println!(
            "The following names could not be mapped to an ISO code and use their name as the id:"
        );
        println!("{}", report.unmapped.join(", "));
    }

    ExitCode::SUCCESS
}
