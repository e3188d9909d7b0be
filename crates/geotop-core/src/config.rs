// crates/geotop-core/src/config.rs

//! # Run Configuration
//!
//! Everything the pipeline needs is fixed up front in a [`PipelineConfig`].
//! The defaults reproduce the EMEA export: GeoNames `cities500`, the bundled
//! `data/emea_countries.txt` list, top 20 per country, 50 000 inhabitants
//! minimum.

use std::fmt;
use std::path::PathBuf;

pub const COUNTRY_INFO_URL: &str = "https://download.geonames.org/export/dump/countryInfo.txt";
pub const CITIES_ZIP_URL: &str = "https://download.geonames.org/export/dump/cities500.zip";
pub const REGION_LIST_FILE: &str = "data/emea_countries.txt";
pub const OUT_CSV: &str = "outputs/emea_country_major_cities.csv";
pub const OUT_XLSX: &str = "outputs/emea_country_major_cities.xlsx";
pub const TOP_N_PER_COUNTRY: usize = 20;
pub const MIN_POPULATION: u64 = 50_000;

/// Where a remote input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched through a [`Fetcher`](crate::loader::Fetcher).
    Url(String),
    /// Read straight from disk.
    Path(PathBuf),
}

impl Source {
    /// `http://` and `https://` values become URLs, anything else a path.
    pub fn parse(value: &str) -> Self {
        let v = value.trim();
        let lower = v.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(v.to_string())
        } else {
            Source::Path(PathBuf::from(v))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => f.write_str(u),
            Source::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Country code → name table (`countryInfo.txt` format).
    pub reference: Source,
    /// Zip archive holding the `citiesNNN.txt` dump.
    pub dataset: Source,
    /// Line-delimited list of country names to keep.
    pub region_list: PathBuf,
    pub csv_out: PathBuf,
    /// `None` skips the spreadsheet entirely.
    pub xlsx_out: Option<PathBuf>,
    pub top_n: usize,
    /// Inclusive lower bound.
    pub min_population: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference: Source::Url(COUNTRY_INFO_URL.to_string()),
            dataset: Source::Url(CITIES_ZIP_URL.to_string()),
            region_list: PathBuf::from(REGION_LIST_FILE),
            csv_out: PathBuf::from(OUT_CSV),
            xlsx_out: Some(PathBuf::from(OUT_XLSX)),
            top_n: TOP_N_PER_COUNTRY,
            min_population: MIN_POPULATION,
        }
    }
}
