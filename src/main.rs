use anyhow::{Context, Result};
use clap::Parser;
use radlnetz::geojson::document::{load_collection, write_collection};
use radlnetz::pipeline::transform_collection;
use radlnetz::targets::{Target, DEFAULT_INPUT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "radlnetz")]
#[command(version, about = "Build derived GeoJSON exports from the RadlVorrangNetz dataset")]
#[command(long_about = "Build derived GeoJSON exports from the RadlVorrangNetz dataset\n\n\
    Each target reads the IST_RadlVorrangNetz FeatureCollection, keeps the\n\
    features passing the target's filter, rewrites their properties and\n\
    writes one new GeoJSON file:\n\n  \
    radlnetz all      consolidated, field-cleaned network\n  \
    radlnetz nur      Premium/Standard route subset\n  \
    radlnetz status   implementation-status subset\n  \
    radlnetz ziel     target-network subset\n  \
    radlnetz app      fixed-schema app export\n\n\
    Output is compact by default; use --pretty for indented JSON.")]
struct Cli {
    /// Which derived dataset to build
    #[arg(value_enum)]
    target: Target,

    /// Input GeoJSON file (the IST_RadlVorrangNetz dataset)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output GeoJSON file path (default: the target's conventional path under data/)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output (default is compact)
    #[arg(long)]
    pretty: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = cli
        .output
        .unwrap_or_else(|| cli.target.default_output());

    if cli.verbose {
        eprintln!("Reading input file: {}", cli.input.display());
    }

    let doc = load_collection(&cli.input)
        .with_context(|| format!("Failed to load input file: {}", cli.input.display()))?;

    if cli.verbose {
        eprintln!("Transforming features...");
    }

    let rule = cli.target.rule();
    let (doc, summary) = transform_collection(doc, rule.as_ref());

    if cli.verbose {
        eprintln!("Writing output to: {}", output.display());
    }

    write_collection(&output, &doc, cli.pretty)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!("Input features: {}", summary.input_features);
    println!("Output features: {}", summary.output_features);
    println!("Written to: {}", output.display());

    Ok(())
}
