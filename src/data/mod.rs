//! Data layer: the catalog query core, fully decoupled from the UI.
//!
//! Architecture:
//! ```text
//!  QueryParams (date window, magnitude floor)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query   │  validate → URL → one blocking GET
//!   └──────────┘
//!        │  CSV body
//!        ▼
//!   ┌──────────┐
//!   │  parse   │  schema check → EarthquakeDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  view    │  stats summary + export payload → CatalogView
//!   └──────────┘
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod parse;
pub mod query;
pub mod stats;
pub mod view;
