// crates/geotop-core/src/model/mod.rs
pub mod city;
pub mod output;

pub use city::{coerce_population, CityRecord, CITY_COLUMNS};
pub use output::{OutputRow, ResultTable, OUTPUT_HEADER};

use std::collections::{HashMap, HashSet};

/// Country code (`"DE"`) → canonical country name (`"Germany"`).
pub type CountryLookup = HashMap<String, String>;

/// Lowercased country names a city must belong to in order to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSet {
    names: HashSet<String>,
}

impl RegionSet {
    /// Builds the set from raw names: trimmed, lowercased, blanks dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Case-insensitive membership test.
    pub fn contains_name(&self, country_name: &str) -> bool {
        self.names.contains(&country_name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
