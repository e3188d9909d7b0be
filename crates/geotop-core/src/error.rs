// crates/geotop-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong between fetching the sources and writing
/// the outputs.
///
/// All variants are fatal for a run except when they surface inside a
/// [`SoftOutcome::Failed`](crate::export::SoftOutcome), which is how the
/// spreadsheet step reports its problems.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "fetch")]
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive contains no members")]
    MemberNotFound,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("schema mismatch at line {line}: {message}")]
    Schema { line: u64, message: String },

    #[error("spreadsheet error: {0}")]
    Xlsx(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for GeoError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        GeoError::Xlsx(e.to_string())
    }
}
