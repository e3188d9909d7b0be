// crates/geotop-core/src/transform.rs

//! # Join, Filter, Rank
//!
//! Turns parsed cities into the exported table:
//!
//! 1. resolve `country_name` from the lookup, falling back to the raw code,
//! 2. keep rows whose country is in the region set and whose population is at
//!    least the floor,
//! 3. order by country name ascending, then population descending (stable, so
//!    equal populations keep their input order),
//! 4. keep the first `top_n` rows of each country,
//! 5. project to [`OutputRow`].

use crate::error::Result;
use crate::loader::read_cities;
use crate::model::{CityRecord, CountryLookup, RegionSet, ResultTable};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub top_n: usize,
    pub min_population: u64,
}

/// Full transform starting from the raw archive bytes.
pub fn extract_major_cities(
    archive_bytes: &[u8],
    lookup: &CountryLookup,
    regions: &RegionSet,
    opts: RankOptions,
) -> Result<ResultTable> {
    let cities = read_cities(archive_bytes)?;
    Ok(rank_cities(cities, lookup, regions, opts))
}

/// Code → name, or the code itself when unknown.
pub fn resolve_country_name(lookup: &CountryLookup, country_code: &str) -> String {
    lookup
        .get(country_code)
        .cloned()
        .unwrap_or_else(|| country_code.to_string())
}

pub fn rank_cities(
    cities: Vec<CityRecord>,
    lookup: &CountryLookup,
    regions: &RegionSet,
    opts: RankOptions,
) -> ResultTable {
    let total = cities.len();

    let mut kept: Vec<(String, CityRecord)> = cities
        .into_iter()
        .filter(|c| c.population >= opts.min_population)
        .map(|c| (resolve_country_name(lookup, &c.country_code), c))
        .filter(|(country, _)| regions.contains_name(country))
        .collect();
    let qualified = kept.len();

    // `sort_by` is stable: ties stay in input order.
    kept.sort_by(|(a_country, a), (b_country, b)| {
        a_country
            .cmp(b_country)
            .then_with(|| b.population.cmp(&a.population))
    });

    let mut rows = Vec::with_capacity(kept.len());
    let mut current: Option<String> = None;
    let mut taken = 0usize;
    for (country, city) in kept {
        if current.as_deref() != Some(country.as_str()) {
            current = Some(country.clone());
            taken = 0;
        }
        if taken < opts.top_n {
            taken += 1;
            rows.push(city.project(country));
        }
    }

    debug!(total, qualified, kept = rows.len(), "ranked cities");
    ResultTable::new(rows)
}
