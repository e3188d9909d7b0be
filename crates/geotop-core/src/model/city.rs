// crates/geotop-core/src/model/city.rs
use crate::error::{GeoError, Result};
use crate::model::OutputRow;
use csv::StringRecord;

/// Number of tab-separated fields in a GeoNames `citiesNNN.txt` row.
pub const CITY_COLUMNS: usize = 19;

/// One row of the GeoNames cities dump.
///
/// Field order follows the dump:
/// `geonameid, name, asciiname, alternatenames, latitude, longitude,
/// feature_class, feature_code, country_code, cc2, admin1..admin4,
/// population, elevation, dem, timezone, modification_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub geonameid: u64,
    pub name: String,
    pub asciiname: String,
    pub alternatenames: String,
    pub latitude: f64,
    pub longitude: f64,
    pub feature_class: String,
    pub feature_code: String,
    pub country_code: String,
    pub cc2: String,
    pub admin1: String,
    pub admin2: String,
    pub admin3: String,
    pub admin4: String,
    /// Coerced, never fails. See [`coerce_population`].
    pub population: u64,
    pub elevation: String,
    pub dem: String,
    pub timezone: String,
    pub modification_date: String,
}

impl CityRecord {
    /// Converts a raw record. `line` is 1-based and only used for errors.
    pub fn from_record(rec: &StringRecord, line: u64) -> Result<Self> {
        if rec.len() != CITY_COLUMNS {
            return Err(GeoError::Schema {
                line,
                message: format!("expected {CITY_COLUMNS} columns, found {}", rec.len()),
            });
        }
        let field = |i: usize| rec.get(i).unwrap_or_default().to_string();

        Ok(Self {
            geonameid: parse_field(rec, 0, "geonameid", line)?,
            name: field(1),
            asciiname: field(2),
            alternatenames: field(3),
            latitude: parse_field(rec, 4, "latitude", line)?,
            longitude: parse_field(rec, 5, "longitude", line)?,
            feature_class: field(6),
            feature_code: field(7),
            country_code: field(8),
            cc2: field(9),
            admin1: field(10),
            admin2: field(11),
            admin3: field(12),
            admin4: field(13),
            population: coerce_population(rec.get(14).unwrap_or_default()),
            elevation: field(15),
            dem: field(16),
            timezone: field(17),
            modification_date: field(18),
        })
    }

    /// Projects onto the exported column set, attaching the resolved
    /// country name.
    pub fn project(self, country_name: String) -> OutputRow {
        OutputRow {
            id: self.geonameid,
            name: self.name,
            asciiname: self.asciiname,
            country_code: self.country_code,
            country_name,
            admin1: self.admin1,
            latitude: self.latitude,
            longitude: self.longitude,
            population: self.population,
            timezone: self.timezone,
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    rec: &StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<T> {
    let raw = rec.get(idx).unwrap_or_default().trim();
    raw.parse().map_err(|_| GeoError::Schema {
        line,
        message: format!("column {column}: cannot parse {raw:?}"),
    })
}

/// Population as a non-negative integer.
///
/// Integers parse directly. Decimal and exponent forms (`"1.5e6"`) are
/// truncated. Anything else (empty, `"N/A"`, negative, NaN) is 0.
pub fn coerce_population(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u64>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        _ => 0,
    }
}
