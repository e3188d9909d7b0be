// crates/geotop-core/src/export.rs

//! # Export
//!
//! The CSV is the authoritative output and any failure writing it is fatal.
//! The spreadsheet is best effort: its result is reported as a
//! [`SoftOutcome`] instead of an error.

use crate::error::{GeoError, Result};
use crate::loader::common_io::ensure_parent_dir;
use crate::model::{ResultTable, OUTPUT_HEADER};
use csv::WriterBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Result of an output step that is allowed to fail.
#[derive(Debug)]
pub enum SoftOutcome {
    Written(PathBuf),
    /// Not requested.
    Disabled,
    Failed { path: PathBuf, error: GeoError },
}

impl SoftOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, SoftOutcome::Written(_))
    }
}

/// UTF-8, comma separated, header row, no index column.
///
/// The file only appears at `path` once fully written; a failed write leaves
/// any previous file there untouched.
pub fn write_csv(table: &ResultTable, path: &Path) -> Result<()> {
    replace_file(path, |file| write_csv_to(table, BufWriter::new(file)))?;
    info!(rows = table.len(), path = %path.display(), "CSV written");
    Ok(())
}

/// Writes into a temp file next to `path`, then renames it over `path`.
fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut())?;
    tmp.persist(path).map_err(|e| GeoError::Io(e.error))?;
    Ok(())
}

/// The header is written even for an empty table.
pub fn write_csv_to<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(OUTPUT_HEADER)?;
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(feature = "xlsx")]
pub fn write_xlsx(table: &ResultTable, path: &Path) -> Result<()> {
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in OUTPUT_HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }
    for (i, row) in table.rows().iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_number(r, 0, row.id as f64)?;
        sheet.write_string(r, 1, &row.name)?;
        sheet.write_string(r, 2, &row.asciiname)?;
        sheet.write_string(r, 3, &row.country_code)?;
        sheet.write_string(r, 4, &row.country_name)?;
        sheet.write_string(r, 5, &row.admin1)?;
        sheet.write_number(r, 6, row.latitude)?;
        sheet.write_number(r, 7, row.longitude)?;
        sheet.write_number(r, 8, row.population as f64)?;
        sheet.write_string(r, 9, &row.timezone)?;
    }

    ensure_parent_dir(path)?;
    workbook.save(path)?;
    info!(rows = table.len(), path = %path.display(), "spreadsheet written");
    Ok(())
}

#[cfg(not(feature = "xlsx"))]
pub fn write_xlsx(_table: &ResultTable, _path: &Path) -> Result<()> {
    Err(GeoError::Xlsx(
        "xlsx support not compiled in (enable the 'xlsx' feature)".into(),
    ))
}

/// Runs [`write_xlsx`] and folds any error into the outcome.
pub fn write_xlsx_best_effort(table: &ResultTable, path: Option<&Path>) -> SoftOutcome {
    let Some(path) = path else {
        return SoftOutcome::Disabled;
    };
    match write_xlsx(table, path) {
        Ok(()) => SoftOutcome::Written(path.to_path_buf()),
        Err(error) => {
            warn!(path = %path.display(), %error, "could not write spreadsheet, CSV remains the output");
            SoftOutcome::Failed {
                path: path.to_path_buf(),
                error,
            }
        }
    }
}
