use thiserror::Error;

// ---------------------------------------------------------------------------
// CatalogError – everything that can go wrong between a query and a dataset
// ---------------------------------------------------------------------------

/// Failure modes of the catalog data layer.
///
/// Errors are surfaced to the caller immediately; nothing in this layer
/// retries or substitutes a default. The UI turns them into the red
/// status line.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A query parameter failed validation. Raised before any request is
    /// issued, so a bad parameter never reaches the network.
    #[error("invalid query parameter: {0}")]
    InvalidParameter(String),

    /// The endpoint could not be reached, or answered with a non-success
    /// status.
    #[error("catalog request failed: {0}")]
    RemoteRequest(#[from] reqwest::Error),

    /// The response body was not the expected tabular payload (malformed
    /// CSV, a broken row, or a missing required column).
    #[error("malformed catalog response: {0}")]
    Parse(String),

    /// A statistic was requested over an empty dataset.
    #[error("query returned no records")]
    NoData,
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
