//! Data Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for the dashboard's static data:
//! - `data_spi` - Dataset model, chart entries, source contract and errors
//! - `data_core` - Latin-1 CSV loading, chart catalog, image decoding
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{ChartCatalog, CsvDatasetSource, DatasetSource};
//!
//! let dataset = CsvDatasetSource::new("Superstore.csv").load().unwrap();
//! println!("{} rows", dataset.row_count());
//!
//! let catalog = ChartCatalog::standard(".");
//! if let Some(path) = catalog.resolve("Total loss by state") {
//!     println!("chart at {}", path.display());
//! }
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from Core
pub use data_core::*;
