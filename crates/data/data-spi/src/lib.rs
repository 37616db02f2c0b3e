//! Data Service Provider Interface
//!
//! Defines the dataset snapshot, chart catalog entries, the dataset source
//! contract and the errors raised while loading them.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DatasetSource;
pub use error::{DataError, Result};
pub use model::{ChartEntry, Dataset};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            "Superstore.csv",
            vec!["Row ID".to_string(), "City".to_string(), "Sales".to_string()],
            vec![
                vec!["1".to_string(), "Henderson".to_string(), "261.96".to_string()],
                vec!["2".to_string(), "Henderson".to_string(), "731.94".to_string()],
                vec!["3".to_string(), "Los Angeles".to_string()],
            ],
        )
    }

    #[test]
    fn test_dataset_head_limits_rows() {
        let data = sample();
        assert_eq!(data.head(2).len(), 2);
        assert_eq!(data.head(5).len(), 3);
        assert!(data.head(0).is_empty());
    }

    #[test]
    fn test_dataset_counts() {
        let data = sample();
        assert_eq!(data.row_count(), 3);
        assert_eq!(data.column_count(), 3);
        assert!(!data.is_empty());
        assert!(Dataset::default().is_empty());
    }

    #[test]
    fn test_short_record_reads_empty_cell() {
        let data = sample();
        assert_eq!(data.cell(2, 1), "Los Angeles");
        assert_eq!(data.cell(2, 2), "");
        assert_eq!(data.cell(9, 0), "");
    }

    #[test]
    fn test_chart_entry_new() {
        let entry = ChartEntry::new("Total loss by state", "Total loss by state.png");
        assert_eq!(entry.label, "Total loss by state");
        assert_eq!(entry.file_name, "Total loss by state.png");
    }

    #[test]
    fn test_dataset_source_is_object_safe() {
        struct Fixed;

        impl DatasetSource for Fixed {
            fn name(&self) -> &str {
                "fixed"
            }

            fn load(&self) -> Result<Dataset> {
                Ok(Dataset::default())
            }
        }

        let source: Box<dyn DatasetSource> = Box::new(Fixed);
        assert_eq!(source.name(), "fixed");
        assert!(source.load().unwrap().is_empty());
    }
}
