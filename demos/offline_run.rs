//! Offline run example for geotop-rs
//!
//! Runs the pipeline against dumps that were downloaded beforehand, with a
//! fetcher that refuses to touch the network.
//!
//! ```text
//! curl -O https://download.geonames.org/export/dump/countryInfo.txt
//! curl -O https://download.geonames.org/export/dump/cities15000.zip
//! cargo run --example offline_run -- countryInfo.txt cities15000.zip
//! ```

use geotop_core::{pipeline, Fetcher, GeoError, PipelineConfig, SoftOutcome, Source};
use std::path::PathBuf;

struct Offline;

impl Fetcher for Offline {
    fn fetch(&self, url: &str) -> geotop_core::Result<Vec<u8>> {
        Err(GeoError::InvalidData(format!("offline, refusing to fetch {url}")))
    }
}

fn main() -> geotop_core::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(country_info), Some(dataset)) = (args.next(), args.next()) else {
        eprintln!("usage: offline_run <countryInfo.txt> <citiesNNN.zip> [regions.txt]");
        std::process::exit(2);
    };

    let mut config = PipelineConfig {
        reference: Source::Path(PathBuf::from(country_info)),
        dataset: Source::Path(PathBuf::from(dataset)),
        csv_out: PathBuf::from("outputs/offline_major_cities.csv"),
        xlsx_out: Some(PathBuf::from("outputs/offline_major_cities.xlsx")),
        ..PipelineConfig::default()
    };
    if let Some(regions) = args.next() {
        config.region_list = PathBuf::from(regions);
    }

    let report = pipeline::run(&config, &Offline)?;
    println!(
        "✓ {} cities across {} countries -> {}",
        report.stats.rows,
        report.stats.countries,
        report.csv_path.display()
    );
    match report.xlsx {
        SoftOutcome::Written(path) => println!("✓ spreadsheet: {}", path.display()),
        SoftOutcome::Failed { error, .. } => println!("✗ spreadsheet skipped: {error}"),
        SoftOutcome::Disabled => {}
    }
    Ok(())
}
