//! Data Core
//!
//! Implementations for the dashboard's static inputs: the Latin-1 CSV
//! dataset, the chart catalog and chart image decoding.

pub mod catalog;
pub mod csv_source;
pub mod image_asset;

pub use catalog::{ChartCatalog, CHART_CHOICES};
pub use csv_source::{decode_latin1, load_latin1_csv, parse_latin1_csv, CsvDatasetSource};
pub use image_asset::load_chart_image;
