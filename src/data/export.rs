use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

use super::model::EarthquakeDataset;

// ---------------------------------------------------------------------------
// CSV serialization
// ---------------------------------------------------------------------------

/// Serialize a dataset back to comma-separated text: header row first,
/// columns in the order the catalog sent them, quoting only where needed.
pub fn dataset_to_csv(dataset: &EarthquakeDataset) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer
            .write_record(dataset.columns())
            .context("writing csv header")?;

        for record in dataset.records() {
            let row: Vec<String> = dataset
                .columns()
                .iter()
                .map(|col| record.column_value(col).unwrap_or_default())
                .collect();
            writer.write_record(&row).context("writing csv row")?;
        }
        writer.flush().context("flushing csv")?;
    }

    String::from_utf8(buf).context("csv output was not utf-8")
}

// ---------------------------------------------------------------------------
// Download payload – inline data link, no server storage
// ---------------------------------------------------------------------------

/// A self-contained download link: the CSV bytes inline, base64-encoded in a
/// `data:` URI. Valid only for the dataset it was built from; regenerated on
/// every query and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadPayload {
    /// Suggested file name for save dialogs.
    pub filename: String,
    /// `data:file/csv;base64,<payload>`, usable as an href anywhere.
    pub href: String,
}

/// Encode the dataset's CSV into an inline download payload.
pub fn to_downloadable(dataset: &EarthquakeDataset) -> Result<DownloadPayload> {
    let csv_text = dataset_to_csv(dataset)?;
    let encoded = BASE64_STANDARD.encode(csv_text.as_bytes());
    Ok(DownloadPayload {
        filename: "earthquakes.csv".to_string(),
        href: format!("data:file/csv;base64,{encoded}"),
    })
}

/// Write the dataset's CSV wherever the user pointed the save dialog.
pub fn write_csv_file(dataset: &EarthquakeDataset, path: &Path) -> Result<()> {
    let csv_text = dataset_to_csv(dataset)?;
    fs::write(path, csv_text).with_context(|| format!("writing {}", path.display()))
}
