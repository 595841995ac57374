//! Core configuration model for dashboard data displayers.
//!
//! A displayer configuration is the in-memory description of how one
//! visualization is rendered. This crate holds the typed model only; the XML
//! mapping lives in `displayer-rs-xml`.

// --- Foundation Modules ---
pub mod chart;
pub mod displayer;
pub mod domain;
pub mod range;
pub mod table;

// --- Top-level Exports ---
pub use chart::{ChartDisplayer, ChartVariant, SortCriteria, SortOrder, XAxisSettings};
pub use displayer::DataDisplayer;
pub use domain::DomainConfiguration;
pub use range::RangeConfiguration;
pub use table::TableDisplayer;
