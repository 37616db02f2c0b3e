//! Chart catalog entry.

use serde::{Deserialize, Serialize};

/// A pre-rendered chart: display label and image file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Label shown in the selector and used as the caption
    pub label: String,
    /// Image file name, relative to the assets directory
    pub file_name: String,
}

impl ChartEntry {
    pub fn new(label: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            file_name: file_name.into(),
        }
    }
}
