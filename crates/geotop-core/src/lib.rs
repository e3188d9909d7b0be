// crates/geotop-core/src/lib.rs

//! # geotop-core
//!
//! Picks the most populous cities of every country in a region from the
//! GeoNames dumps and writes them as CSV (plus a best-effort XLSX).
//!
//! ```no_run
//! use geotop_core::{pipeline, PipelineConfig, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new()?;
//! let report = pipeline::run(&PipelineConfig::default(), &fetcher)?;
//! println!("{} cities in {} countries", report.stats.rows, report.stats.countries);
//! # Ok::<(), geotop_core::GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod transform;

// Re-exports
pub use crate::common::TableStats;
pub use crate::config::{PipelineConfig, Source};
pub use crate::error::{GeoError, Result};
pub use crate::export::SoftOutcome;
pub use crate::loader::Fetcher;
#[cfg(feature = "fetch")]
pub use crate::loader::HttpFetcher;
#[cfg(not(feature = "fetch"))]
pub use crate::loader::LocalOnly;
pub use crate::model::{CityRecord, CountryLookup, OutputRow, RegionSet, ResultTable};
pub use crate::pipeline::{run, RunReport};
pub use crate::transform::RankOptions;
