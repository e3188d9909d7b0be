// crates/geotop-core/src/loader/regions.rs
use super::common_io;
use crate::error::Result;
use crate::model::RegionSet;
use std::path::Path;
use tracing::info;

/// Reads a newline-delimited list of country names.
///
/// Names are trimmed and lowercased, blank lines are ignored and duplicates
/// collapse. A missing or unreadable file is [`GeoError::NotFound`](crate::GeoError::NotFound).
pub fn read_region_list(path: &Path) -> Result<RegionSet> {
    let text = common_io::read_text(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let set = RegionSet::from_names(text.lines());
    info!(countries = set.len(), path = %path.display(), "loaded region list");
    Ok(set)
}
