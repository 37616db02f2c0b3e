//! Chart catalog: selector labels and the pre-rendered image for each.

use std::path::{Path, PathBuf};

use data_spi::ChartEntry;

/// Labels offered in the chart selector, in display order.
pub const CHART_CHOICES: [&str; 5] = [
    "Sales distribution by region",
    "Sales trend over the years",
    "relationship between sales, state and subcategries",
    "Total loss by state",
    "Total discount by state",
];

const CHART_FILES: [(&str, &str); 6] = [
    ("Sales distribution by region", "Sales distribution by region.png"),
    ("Sales by customers segment", "Sales by customers segment.png"),
    ("Sales trend over the years", "sales trend over the years.png"),
    (
        "relationship between sales, state and subcategries",
        "heatmat.png",
    ),
    ("Total loss by state", "Total loss by state.png"),
    ("Total discount by state", "Total discount by state.png"),
];

/// Static label -> image file mapping rooted at an assets directory.
#[derive(Debug, Clone)]
pub struct ChartCatalog {
    assets_dir: PathBuf,
    entries: Vec<ChartEntry>,
}

impl ChartCatalog {
    pub fn new(assets_dir: impl Into<PathBuf>, entries: Vec<ChartEntry>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            entries,
        }
    }

    /// The dashboard's six pre-rendered charts.
    pub fn standard(assets_dir: impl Into<PathBuf>) -> Self {
        let entries = CHART_FILES
            .iter()
            .map(|(label, file)| ChartEntry::new(*label, *file))
            .collect();
        Self::new(assets_dir, entries)
    }

    /// Selector options.
    pub fn choices(&self) -> &'static [&'static str] {
        &CHART_CHOICES
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Exact-match lookup; `None` for labels outside the catalog.
    pub fn entry(&self, label: &str) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Full image path for a label, or `None` when the label is unmapped.
    pub fn resolve(&self, label: &str) -> Option<PathBuf> {
        self.entry(label)
            .map(|entry| self.assets_dir.join(&entry.file_name))
    }
}
