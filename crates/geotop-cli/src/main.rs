//! geotop: top-N cities per country for a region
//!
//! Runs the whole batch in one go: region list, GeoNames country table,
//! cities archive, ranking, CSV and spreadsheet export. Progress is logged
//! to stderr; stdout only carries the summary.
//!
//! Usage examples
//! --------------
//!
//! - Default EMEA export
//!   $ geotop
//!
//! - Top 5 per country, only cities of 100 000 or more, no spreadsheet
//!   $ geotop -n 5 -m 100000 --no-xlsx
//!
//! - Offline, from previously downloaded dumps
//!   $ geotop --dataset dl/cities500.zip --country-info dl/countryInfo.txt
use clap::Parser;
use geotop_cli::args::CliArgs;
use geotop_core::{pipeline, SoftOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config();
    tracing::debug!(?config, "configuration");

    #[cfg(feature = "fetch")]
    let fetcher = geotop_core::HttpFetcher::new()?;
    #[cfg(not(feature = "fetch"))]
    let fetcher = geotop_core::LocalOnly;

    let report = pipeline::run(&config, &fetcher)?;

    println!("Total major cities found: {}", report.stats.rows);
    println!("  Countries: {}", report.stats.countries);
    println!("CSV saved: {}", report.csv_path.display());
    match &report.xlsx {
        SoftOutcome::Written(path) => println!("Excel saved: {}", path.display()),
        SoftOutcome::Failed { path, error } => {
            eprintln!("Error writing Excel {}: {error}", path.display());
        }
        SoftOutcome::Disabled => {}
    }

    Ok(())
}
