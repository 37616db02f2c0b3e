//! Error types for dataset and asset loading.

mod data_error;

pub use data_error::{DataError, Result};
