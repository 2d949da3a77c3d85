use anyhow::Result;

use super::error::CatalogError;
use super::export::{to_downloadable, DownloadPayload};
use super::model::EarthquakeDataset;
use super::query::{CatalogClient, QueryParams};
use super::stats::{summarize, CatalogSummary};

// ---------------------------------------------------------------------------
// CatalogView – everything the UI renders for one query
// ---------------------------------------------------------------------------

/// The render model of one completed query: the dataset itself, its summary
/// metrics, and the ready-made download payload. The UI consumes this value
/// and nothing else; it never reaches back into the data layer.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub dataset: EarthquakeDataset,
    /// `None` exactly when the dataset is empty (the mean is undefined).
    pub summary: Option<CatalogSummary>,
    pub download: DownloadPayload,
}

/// Run one query end to end: fetch, summarize, encode the export.
///
/// Stateless orchestration over explicit inputs; nothing is cached
/// between calls.
pub fn query_catalog(client: &CatalogClient, params: &QueryParams) -> Result<CatalogView> {
    let dataset = client.fetch(params)?;
    view_of(dataset)
}

/// Assemble the render model for an already-parsed dataset.
fn view_of(dataset: EarthquakeDataset) -> Result<CatalogView> {
    let summary = match summarize(&dataset) {
        Ok(summary) => Some(summary),
        Err(CatalogError::NoData) => None,
        Err(other) => return Err(other.into()),
    };
    let download = to_downloadable(&dataset)?;

    Ok(CatalogView {
        dataset,
        summary,
        download,
    })
}
