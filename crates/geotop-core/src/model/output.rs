// crates/geotop-core/src/model/output.rs
use crate::common::TableStats;
use serde::Serialize;
use std::collections::BTreeSet;

/// Header shared by the CSV and the spreadsheet.
pub const OUTPUT_HEADER: [&str; 10] = [
    "id",
    "name",
    "asciiname",
    "country_code",
    "country_name",
    "admin1",
    "latitude",
    "longitude",
    "population",
    "timezone",
];

/// One exported city. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRow {
    pub id: u64,
    pub name: String,
    pub asciiname: String,
    pub country_code: String,
    pub country_name: String,
    pub admin1: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub timezone: String,
}

/// Ranked result: groups in ascending country name, each group in
/// descending population, at most top-N rows per group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<OutputRow>,
}

impl ResultTable {
    pub(crate) fn new(rows: Vec<OutputRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        let countries: BTreeSet<&str> = self.rows.iter().map(|r| r.country_name.as_str()).collect();
        TableStats {
            rows: self.rows.len(),
            countries: countries.len(),
        }
    }

    pub fn into_rows(self) -> Vec<OutputRow> {
        self.rows
    }
}
