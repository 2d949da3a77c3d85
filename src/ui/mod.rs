//! Presentation layer: immediate-mode panels built on egui.
//!
//! Everything here reads from [`crate::state::AppState`] and draws; the
//! only mutation paths are the query form widgets and the fetch button.

pub mod panels;
pub mod plot;
pub mod table;
