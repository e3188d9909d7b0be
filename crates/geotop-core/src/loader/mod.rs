// crates/geotop-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (HTTP, local files, zip) and delegates to the
//! specific parsers: the country reference table, the region list and the
//! cities dump.

use crate::config::Source;
use crate::error::{GeoError, Result};
use tracing::debug;

pub mod archive;
pub(crate) mod common_io;
pub mod reference;
pub mod regions;

pub use archive::{read_cities, select_member};
pub use reference::{load_country_info, parse_country_info};
pub use regions::read_region_list;

/// Transport for [`Source::Url`] inputs.
///
/// The pipeline only ever asks for whole bodies; implementations must fail
/// on anything other than a successful response.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP transport. One request per call, no retry, transport
/// default timeouts.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("geotop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeoError::InvalidData(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Uses a preconfigured client (proxy, timeouts, TLS roots).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let http = |source: reqwest::Error| GeoError::Http {
            url: url.to_string(),
            source,
        };
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http)?;
        let body = response.bytes().map_err(http)?;
        debug!(url, bytes = body.len(), "download complete");
        Ok(body.to_vec())
    }
}

/// Stand-in used when the crate is built without `fetch`.
#[cfg(not(feature = "fetch"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

#[cfg(not(feature = "fetch"))]
impl Fetcher for LocalOnly {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        Err(GeoError::InvalidData(format!(
            "cannot fetch {url}: built without the 'fetch' feature, pass a local path instead"
        )))
    }
}

/// Reads a whole source into memory.
pub fn read_source(source: &Source, fetcher: &dyn Fetcher) -> Result<Vec<u8>> {
    match source {
        Source::Url(url) => {
            debug!(url = url.as_str(), "fetching");
            fetcher.fetch(url)
        }
        Source::Path(path) => common_io::read_file(path),
    }
}
