use clap::Parser;
use geotop_core::config::{
    CITIES_ZIP_URL, COUNTRY_INFO_URL, MIN_POPULATION, OUT_CSV, OUT_XLSX, REGION_LIST_FILE,
    TOP_N_PER_COUNTRY,
};
use geotop_core::{PipelineConfig, Source};
use std::path::PathBuf;

/// CLI arguments for geotop
#[derive(Debug, Parser)]
#[command(
    name = "geotop",
    version,
    about = "Export the most populous cities of every country in a region from GeoNames"
)]
pub struct CliArgs {
    /// Line-delimited list of country names to keep (case-insensitive)
    #[arg(short = 'r', long = "regions", default_value = REGION_LIST_FILE)]
    pub regions: PathBuf,

    /// CSV output path (always written)
    #[arg(short = 'o', long = "csv", default_value = OUT_CSV)]
    pub csv: PathBuf,

    /// Spreadsheet output path (best effort)
    #[arg(long = "xlsx", default_value = OUT_XLSX)]
    pub xlsx: PathBuf,

    /// Skip the spreadsheet
    #[arg(long = "no-xlsx")]
    pub no_xlsx: bool,

    /// Maximum number of cities per country
    #[arg(short = 'n', long = "top-n", default_value_t = TOP_N_PER_COUNTRY)]
    pub top_n: usize,

    /// Minimum population (inclusive)
    #[arg(short = 'm', long = "min-population", default_value_t = MIN_POPULATION)]
    pub min_population: u64,

    /// countryInfo.txt URL or local path
    #[arg(long = "country-info", default_value = COUNTRY_INFO_URL)]
    pub country_info: String,

    /// citiesNNN.zip URL or local path
    #[arg(long = "dataset", default_value = CITIES_ZIP_URL)]
    pub dataset: String,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            reference: Source::parse(&self.country_info),
            dataset: Source::parse(&self.dataset),
            region_list: self.regions.clone(),
            csv_out: self.csv.clone(),
            xlsx_out: (!self.no_xlsx).then(|| self.xlsx.clone()),
            top_n: self.top_n,
            min_population: self.min_population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_emea_export() {
        let cfg = CliArgs::parse_from(["geotop"]).to_config();
        let default = PipelineConfig::default();
        assert_eq!(cfg.reference, default.reference);
        assert_eq!(cfg.dataset, default.dataset);
        assert_eq!(cfg.region_list, default.region_list);
        assert_eq!(cfg.csv_out, default.csv_out);
        assert_eq!(cfg.xlsx_out, default.xlsx_out);
        assert_eq!(cfg.top_n, 20);
        assert_eq!(cfg.min_population, 50_000);
    }

    #[test]
    fn overrides_and_local_sources() {
        let cfg = CliArgs::parse_from([
            "geotop",
            "-n",
            "5",
            "--min-population",
            "100000",
            "--dataset",
            "cache/cities15000.zip",
            "--no-xlsx",
        ])
        .to_config();
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.min_population, 100_000);
        assert_eq!(cfg.dataset, Source::Path(PathBuf::from("cache/cities15000.zip")));
        assert!(matches!(cfg.reference, Source::Url(_)));
        assert!(cfg.xlsx_out.is_none());
    }
}
