use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// EarthquakeRecord – one row of the catalog response
// ---------------------------------------------------------------------------

/// Columns every catalog response must carry, in the order the typed fields
/// are laid out. Everything else in the response is passthrough.
pub const REQUIRED_COLUMNS: [&str; 5] = ["place", "latitude", "longitude", "mag", "depth"];

/// A single earthquake event (one row of the response table).
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    /// Human-readable locality, e.g. "42 km WNW of Petrolia, CA".
    pub place: String,
    /// Epicenter latitude in degrees, positive north.
    pub latitude: f64,
    /// Epicenter longitude in degrees, positive east.
    pub longitude: f64,
    /// Event magnitude. The catalog mixes scales; the `magType` passthrough
    /// column says which one.
    pub mag: f64,
    /// Hypocenter depth in kilometres.
    pub depth: f64,
    /// Remaining catalog columns (time, id, net, …), kept verbatim for
    /// display and export.
    pub extra: BTreeMap<String, String>,
}

impl EarthquakeRecord {
    /// Look up a column value by name, whether typed or passthrough.
    /// Returns `None` for columns the record does not carry.
    pub fn column_value(&self, column: &str) -> Option<String> {
        match column {
            "place" => Some(self.place.clone()),
            "latitude" => Some(decimal_string(self.latitude)),
            "longitude" => Some(decimal_string(self.longitude)),
            "mag" => Some(decimal_string(self.mag)),
            "depth" => Some(decimal_string(self.depth)),
            other => self.extra.get(other).cloned(),
        }
    }
}

// ---------------------------------------------------------------------------
// EarthquakeDataset – the complete result of one query
// ---------------------------------------------------------------------------

/// The parsed result table of one catalog query.
///
/// Built once by the parser and read-only afterwards: accessors borrow and
/// no mutating API exists. Each query produces a fresh dataset; records keep
/// no identity across queries.
#[derive(Debug, Clone)]
pub struct EarthquakeDataset {
    /// All events, in response order.
    records: Vec<EarthquakeRecord>,
    /// Column names in the order the catalog sent them.
    columns: Vec<String>,
}

impl EarthquakeDataset {
    pub(crate) fn new(columns: Vec<String>, records: Vec<EarthquakeRecord>) -> Self {
        EarthquakeDataset { records, columns }
    }

    /// All records, in response order.
    pub fn records(&self) -> &[EarthquakeRecord] {
        &self.records
    }

    /// Column names as sent by the catalog, headers of any export.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the query matched no events.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Format a float keeping at least one decimal place (`5.0`, not `5`), the
/// way the catalog itself prints numeric columns.
pub(crate) fn decimal_string(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mag: f64) -> EarthquakeRecord {
        EarthquakeRecord {
            place: "somewhere".to_string(),
            latitude: 10.0,
            longitude: 20.0,
            mag,
            depth: 5.0,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn dataset_reports_length_and_order() {
        let ds = EarthquakeDataset::new(
            vec![
                "place".into(),
                "latitude".into(),
                "longitude".into(),
                "mag".into(),
                "depth".into(),
            ],
            vec![record(5.1), record(6.2), record(5.5)],
        );
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.records()[1].mag, 6.2);
        assert_eq!(ds.columns()[3], "mag");
    }

    #[test]
    fn column_value_covers_typed_and_passthrough_fields() {
        let mut r = record(5.0);
        r.extra.insert("magType".to_string(), "mb".to_string());
        assert_eq!(r.column_value("mag").as_deref(), Some("5.0"));
        assert_eq!(r.column_value("place").as_deref(), Some("somewhere"));
        assert_eq!(r.column_value("magType").as_deref(), Some("mb"));
        assert_eq!(r.column_value("nope"), None);
    }

    #[test]
    fn decimal_string_keeps_a_trailing_decimal() {
        assert_eq!(decimal_string(5.0), "5.0");
        assert_eq!(decimal_string(5.25), "5.25");
        assert_eq!(decimal_string(-116.0), "-116.0");
        assert_eq!(decimal_string(7.83), "7.83");
    }
}
