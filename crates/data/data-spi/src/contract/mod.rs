//! Contracts implemented by dataset sources.

mod dataset_source;

pub use dataset_source::DatasetSource;
