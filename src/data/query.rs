use chrono::NaiveDate;
use url::Url;

use super::error::CatalogError;
use super::model::{decimal_string, EarthquakeDataset};
use super::parse::parse_catalog_csv;

/// The FDSN event service behind the explorer.
pub const CATALOG_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

// ---------------------------------------------------------------------------
// QueryParams – the three user-supplied inputs
// ---------------------------------------------------------------------------

/// One catalog query: a date window plus an optional magnitude floor.
///
/// The window bounds are sent as-is. Whether `start_date` precedes
/// `end_date` is left to the remote service to accept or reject.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Magnitude floor; `None` sends no filter at all.
    pub min_magnitude: Option<f64>,
}

impl QueryParams {
    /// Check the parameters without touching the network.
    ///
    /// The only rejectable input is a non-real magnitude floor; calendar
    /// dates are valid by construction.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(mag) = self.min_magnitude {
            if !mag.is_finite() {
                return Err(CatalogError::InvalidParameter(format!(
                    "minimum magnitude must be a real number, got {mag}"
                )));
            }
        }
        Ok(())
    }

    /// Build the request URL for these parameters against `endpoint`.
    ///
    /// Dates travel in ISO `YYYY-MM-DD` form; the magnitude keeps a trailing
    /// `.0` so whole values stay floats on the wire (`minmagnitude=5.0`).
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("format", "csv")
                .append_pair("starttime", &self.start_date.format("%Y-%m-%d").to_string())
                .append_pair("endtime", &self.end_date.format("%Y-%m-%d").to_string());
            if let Some(mag) = self.min_magnitude {
                pairs.append_pair("minmagnitude", &decimal_string(mag));
            }
        }
        url
    }
}

// ---------------------------------------------------------------------------
// CatalogClient – one blocking GET per query
// ---------------------------------------------------------------------------

/// Thin wrapper over a blocking HTTP client pinned to one catalog endpoint.
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Client against the public USGS endpoint.
    pub fn new() -> Self {
        let endpoint =
            Url::parse(CATALOG_ENDPOINT).expect("catalog endpoint constant is a valid URL");
        Self::with_endpoint(endpoint)
    }

    /// Client against an arbitrary endpoint. Tests point this at a local
    /// responder.
    pub fn with_endpoint(endpoint: Url) -> Self {
        CatalogClient {
            http: reqwest::blocking::Client::new(),
            endpoint,
        }
    }

    /// Run one query: validate, fetch once, parse.
    ///
    /// Exactly one GET is issued per call, with no retries and the
    /// transport's default timeout. A non-success status is
    /// [`CatalogError::RemoteRequest`]; a bad body is [`CatalogError::Parse`].
    pub fn fetch(&self, params: &QueryParams) -> Result<EarthquakeDataset, CatalogError> {
        params.validate()?;

        let url = params.to_url(&self.endpoint);
        log::debug!("querying catalog: {url}");

        let body = self.http.get(url).send()?.error_for_status()?.text()?;

        parse_catalog_csv(&body)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
