// crates/geotop-core/src/loader/archive.rs

//! The GeoNames cities dump: a zip holding one tab-separated
//! `citiesNNN.txt` without header or quoting.

use crate::error::{GeoError, Result};
use crate::model::CityRecord;
use csv::ReaderBuilder;
use std::io::{Cursor, Read, Seek};
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// Index of the member holding the cities table.
///
/// The first entry (in archive order) whose lowercased name starts with
/// `cities` and ends with `.txt` wins. Without such an entry the first
/// member is used.
pub fn select_member<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<usize> {
    if archive.len() == 0 {
        return Err(GeoError::MemberNotFound);
    }
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        let name = entry.name().to_lowercase();
        if name.starts_with("cities") && name.ends_with(".txt") {
            debug!(member = entry.name(), "selected archive member");
            return Ok(i);
        }
    }
    let first = archive.by_index(0)?;
    warn!(
        member = first.name(),
        "no cities*.txt member in archive, falling back to first entry"
    );
    Ok(0)
}

/// Unpacks the archive and parses its cities table.
pub fn read_cities(archive_bytes: &[u8]) -> Result<Vec<CityRecord>> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;
    let idx = select_member(&mut archive)?;
    let entry = archive.by_index(idx)?;
    let member = entry.name().to_string();
    let cities = parse_cities(entry)?;
    info!(member = member.as_str(), rows = cities.len(), "parsed cities");
    Ok(cities)
}

/// Parses tab-separated rows. Any row that does not fit the 19-column
/// schema aborts the parse.
pub fn parse_cities<R: Read>(reader: R) -> Result<Vec<CityRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut out = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(idx as u64 + 1, |p| p.line());
        out.push(CityRecord::from_record(&record, line)?);
    }
    Ok(out)
}
