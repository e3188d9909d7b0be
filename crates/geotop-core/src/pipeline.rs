// crates/geotop-core/src/pipeline.rs

//! One-shot batch run: region list → reference table → dataset → rank →
//! export. Sequential, everything in memory, the first hard error aborts.

use crate::common::TableStats;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::export::{write_csv, write_xlsx_best_effort, SoftOutcome};
use crate::loader::{load_country_info, read_region_list, read_source, Fetcher};
use crate::transform::{extract_major_cities, RankOptions};
use std::path::PathBuf;
use tracing::info;

/// What a successful run produced.
#[derive(Debug)]
pub struct RunReport {
    pub stats: TableStats,
    pub csv_path: PathBuf,
    pub xlsx: SoftOutcome,
}

pub fn run(config: &PipelineConfig, fetcher: &dyn Fetcher) -> Result<RunReport> {
    // Local input first so a typo in the path fails before any download.
    let regions = read_region_list(&config.region_list)?;
    let lookup = load_country_info(&config.reference, fetcher)?;

    let archive = read_source(&config.dataset, fetcher)?;
    info!(bytes = archive.len(), source = %config.dataset, "dataset loaded");

    let opts = RankOptions {
        top_n: config.top_n,
        min_population: config.min_population,
    };
    let table = extract_major_cities(&archive, &lookup, &regions, opts)?;
    let stats = table.stats();
    info!(rows = stats.rows, countries = stats.countries, "major cities selected");

    write_csv(&table, &config.csv_out)?;
    let xlsx = write_xlsx_best_effort(&table, config.xlsx_out.as_deref());

    Ok(RunReport {
        stats,
        csv_path: config.csv_out.clone(),
        xlsx,
    })
}
