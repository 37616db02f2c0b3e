//! Data models for the dashboard.

mod chart;
mod dataset;

pub use chart::ChartEntry;
pub use dataset::Dataset;
