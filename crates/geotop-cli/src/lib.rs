//! geotop-cli
//! ==========
//!
//! Command-line interface for `geotop-core`: downloads the GeoNames cities
//! dump and country table, keeps the top-N most populous cities of every
//! country named in a region list, and writes CSV plus a best-effort XLSX.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geotop-cli
//! geotop --help
//! geotop                                   # EMEA defaults, top 20, >= 50 000
//! geotop -r data/emea_countries.txt -n 5 -m 100000 --no-xlsx
//! geotop --dataset cache/cities500.zip --country-info cache/countryInfo.txt
//! ```
//!
//! The argument definitions live in [`args`] so they can be tested without
//! spawning the binary.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
