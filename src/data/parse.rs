use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::CatalogError;
use super::model::{EarthquakeDataset, EarthquakeRecord, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// CSV response parser
// ---------------------------------------------------------------------------

/// The required columns, bound by header name rather than position.
#[derive(Debug, Deserialize)]
struct RawRow {
    place: String,
    latitude: f64,
    longitude: f64,
    mag: f64,
    depth: f64,
}

/// Parse a catalog CSV body into a dataset.
///
/// The header row is validated against [`REQUIRED_COLUMNS`] before any row
/// is read, so a schema mismatch fails as a whole instead of surfacing as a
/// field error halfway through. Columns outside the required five are kept
/// verbatim as passthrough text. A body with a valid header and zero rows is
/// a valid, empty dataset.
pub fn parse_catalog_csv(body: &str) -> Result<EarthquakeDataset, CatalogError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut required_idx = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for required in REQUIRED_COLUMNS {
        match columns.iter().position(|c| c == required) {
            Some(idx) => required_idx.push(idx),
            None => {
                return Err(CatalogError::Parse(format!(
                    "response is missing required column '{required}'"
                )));
            }
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let row: RawRow = record
            .deserialize(Some(&headers))
            .map_err(|e| CatalogError::Parse(format!("row {row_no}: {e}")))?;

        let mut extra = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if required_idx.contains(&idx) {
                continue;
            }
            if let Some(name) = columns.get(idx) {
                extra.insert(name.clone(), value.to_string());
            }
        }

        records.push(EarthquakeRecord {
            place: row.place,
            latitude: row.latitude,
            longitude: row.longitude,
            mag: row.mag,
            depth: row.depth,
            extra,
        });
    }

    Ok(EarthquakeDataset::new(columns, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
time,latitude,longitude,depth,mag,magType,net,id,place,type
2024-01-01T10:12:43.000Z,38.8032,-122.8216,2.81,5.1,md,nc,nc73812340,\"10 km NW of The Geysers, CA\",earthquake
2024-01-01T14:03:00.120Z,-17.9821,-178.3450,552.0,6.2,mww,us,us7000lqxy,\"Fiji region\",earthquake
2024-01-02T01:45:10.555Z,36.1448,141.0021,41.3,5.5,mb,us,us7000lr2a,\"near the east coast of Honshu, Japan\",earthquake
";

    #[test]
    fn parses_rows_into_typed_records() {
        let ds = parse_catalog_csv(SAMPLE).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.records()[0];
        assert_eq!(first.place, "10 km NW of The Geysers, CA");
        assert_eq!(first.latitude, 38.8032);
        assert_eq!(first.longitude, -122.8216);
        assert_eq!(first.mag, 5.1);
        assert_eq!(first.depth, 2.81);
    }

    #[test]
    fn passthrough_columns_are_kept_verbatim() {
        let ds = parse_catalog_csv(SAMPLE).unwrap();
        let first = &ds.records()[0];
        assert_eq!(first.extra.get("magType").map(String::as_str), Some("md"));
        assert_eq!(first.extra.get("id").map(String::as_str), Some("nc73812340"));
        assert_eq!(
            first.extra.get("time").map(String::as_str),
            Some("2024-01-01T10:12:43.000Z")
        );
        // Required columns never leak into the passthrough map.
        assert!(first.extra.get("mag").is_none());
    }

    #[test]
    fn column_order_follows_the_response() {
        let ds = parse_catalog_csv(SAMPLE).unwrap();
        let columns: Vec<&str> = ds.columns().iter().map(String::as_str).collect();
        assert_eq!(
            columns,
            vec!["time", "latitude", "longitude", "depth", "mag", "magType", "net", "id", "place", "type"]
        );
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let body = "\
time,latitude,longitude,depth,place
2024-01-01T10:12:43.000Z,38.8,-122.8,2.8,\"The Geysers, CA\"
";
        let err = parse_catalog_csv(body).unwrap_err();
        match err {
            CatalogError::Parse(msg) => assert!(msg.contains("'mag'"), "got: {msg}"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_magnitude_is_a_parse_error() {
        let body = "\
place,latitude,longitude,mag,depth
\"Fiji region\",-17.9,-178.3,strong,552.0
";
        let err = parse_catalog_csv(body).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let body = "\
place,latitude,longitude,mag,depth
\"Fiji region\",-17.9,-178.3,6.2
";
        let err = parse_catalog_csv(body).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn header_only_body_is_an_empty_dataset() {
        let body = "time,latitude,longitude,depth,mag,magType,net,id,place,type\n";
        let ds = parse_catalog_csv(body).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns().len(), 10);
    }

    #[test]
    fn empty_body_is_a_parse_error() {
        let err = parse_catalog_csv("").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "got {err:?}");
    }
}
