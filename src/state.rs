use chrono::{Duration, Local, NaiveDate};

use crate::data::query::{CatalogClient, QueryParams};
use crate::data::view::{query_catalog, CatalogView};

// ---------------------------------------------------------------------------
// Query form – what the side panel edits
// ---------------------------------------------------------------------------

/// The editable query controls. A fetch snapshots these into
/// [`QueryParams`]; editing the form never mutates an existing view.
pub struct QueryForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Slider position, applied only while `filter_enabled` is on.
    pub min_magnitude: f64,
    pub filter_enabled: bool,
}

impl Default for QueryForm {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            start_date: today - Duration::days(7),
            end_date: today,
            min_magnitude: 5.0,
            filter_enabled: true,
        }
    }
}

impl QueryForm {
    /// Snapshot the form into the parameters one fetch will use.
    pub fn to_params(&self) -> QueryParams {
        QueryParams {
            start_date: self.start_date,
            end_date: self.end_date,
            min_magnitude: self.filter_enabled.then_some(self.min_magnitude),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Query controls as currently edited.
    pub form: QueryForm,

    /// Result of the last successful query (None until one succeeds).
    pub view: Option<CatalogView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a fetch is currently running.
    pub fetching: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: QueryForm::default(),
            view: None,
            status_message: None,
            fetching: false,
        }
    }
}

impl AppState {
    /// Run the query described by the form and install the result.
    pub fn run_query(&mut self, client: &CatalogClient) {
        self.fetching = true;
        let params = self.form.to_params();

        match query_catalog(client, &params) {
            Ok(view) => {
                log::info!(
                    "catalog returned {} events for {} to {}",
                    view.dataset.len(),
                    params.start_date,
                    params.end_date
                );
                self.set_view(view);
            }
            Err(e) => {
                log::error!("catalog query failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.fetching = false;
            }
        }
    }

    /// Install a fresh view; the previous dataset is dropped here.
    pub fn set_view(&mut self, view: CatalogView) {
        self.view = Some(view);
        self.status_message = None;
        self.fetching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_covers_the_last_week() {
        let form = QueryForm::default();
        assert_eq!((form.end_date - form.start_date).num_days(), 7);
        assert_eq!(form.min_magnitude, 5.0);
        assert!(form.filter_enabled);
    }

    #[test]
    fn params_follow_the_filter_toggle() {
        let mut form = QueryForm::default();
        form.min_magnitude = 6.5;

        assert_eq!(form.to_params().min_magnitude, Some(6.5));

        form.filter_enabled = false;
        assert_eq!(form.to_params().min_magnitude, None);
    }
}
