// crates/geotop-core/src/loader/reference.rs

//! GeoNames `countryInfo.txt`: tab separated, `#` comments, ISO code in
//! field 0 and country name in field 4.

use super::{read_source, Fetcher};
use crate::config::Source;
use crate::error::{GeoError, Result};
use crate::model::CountryLookup;
use tracing::info;

const CODE_FIELD: usize = 0;
const NAME_FIELD: usize = 4;

pub fn load_country_info(source: &Source, fetcher: &dyn Fetcher) -> Result<CountryLookup> {
    let bytes = read_source(source, fetcher)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| GeoError::InvalidData(format!("country info from {source} is not UTF-8: {e}")))?;
    let lookup = parse_country_info(&text)?;
    info!(countries = lookup.len(), %source, "loaded country reference");
    Ok(lookup)
}

/// Later duplicates of a code win.
pub fn parse_country_info(text: &str) -> Result<CountryLookup> {
    let mut lookup = CountryLookup::new();
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() <= NAME_FIELD {
            return Err(GeoError::Schema {
                line: idx as u64 + 1,
                message: format!(
                    "country info needs at least {} fields, found {}",
                    NAME_FIELD + 1,
                    parts.len()
                ),
            });
        }
        lookup.insert(parts[CODE_FIELD].to_string(), parts[NAME_FIELD].to_string());
    }
    Ok(lookup)
}
