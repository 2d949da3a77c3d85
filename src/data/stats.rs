use super::error::CatalogError;
use super::model::EarthquakeDataset;

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// The two headline metrics of a query, derived on demand and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSummary {
    /// Number of events in the dataset.
    pub count: usize,
    /// Arithmetic mean of the `mag` column, rounded to 2 decimal places.
    pub mean_magnitude: f64,
}

/// Summarize a dataset. An empty input is [`CatalogError::NoData`] because
/// its mean is undefined.
pub fn summarize(dataset: &EarthquakeDataset) -> Result<CatalogSummary, CatalogError> {
    Ok(CatalogSummary {
        count: dataset.len(),
        mean_magnitude: mean_magnitude(dataset)?,
    })
}

/// Mean of the `mag` column, rounded to 2 decimal places.
pub fn mean_magnitude(dataset: &EarthquakeDataset) -> Result<f64, CatalogError> {
    if dataset.is_empty() {
        return Err(CatalogError::NoData);
    }
    let sum: f64 = dataset.records().iter().map(|r| r.mag).sum();
    Ok(round2(sum / dataset.len() as f64))
}

/// Round to 2 decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::EarthquakeRecord;

    fn dataset(mags: &[f64]) -> EarthquakeDataset {
        let records = mags
            .iter()
            .map(|&mag| EarthquakeRecord {
                place: "test".to_string(),
                latitude: 0.0,
                longitude: 0.0,
                mag,
                depth: 10.0,
                extra: BTreeMap::new(),
            })
            .collect();
        EarthquakeDataset::new(
            vec![
                "place".into(),
                "latitude".into(),
                "longitude".into(),
                "mag".into(),
                "depth".into(),
            ],
            records,
        )
    }

    #[test]
    fn count_and_mean_match_the_records() {
        let summary = summarize(&dataset(&[5.1, 6.2, 5.5])).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean_magnitude, 5.6);
    }

    #[test]
    fn mean_is_order_independent() {
        let forward = mean_magnitude(&dataset(&[4.4, 5.0, 6.1, 7.3])).unwrap();
        let backward = mean_magnitude(&dataset(&[7.3, 6.1, 5.0, 4.4])).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward, 5.7);
    }

    #[test]
    fn mean_rounds_to_two_decimals() {
        assert_eq!(mean_magnitude(&dataset(&[5.111, 5.113])).unwrap(), 5.11);
        // Exact tie at the second decimal rounds to even.
        assert_eq!(mean_magnitude(&dataset(&[5.125])).unwrap(), 5.12);
    }

    #[test]
    fn empty_dataset_is_no_data() {
        let err = summarize(&dataset(&[])).unwrap_err();
        assert!(matches!(err, CatalogError::NoData), "got {err:?}");
        let err = mean_magnitude(&dataset(&[])).unwrap_err();
        assert!(matches!(err, CatalogError::NoData), "got {err:?}");
    }
}
