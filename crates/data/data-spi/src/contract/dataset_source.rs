//! Dataset source trait definition.

use crate::error::Result;
use crate::model::Dataset;

/// Trait for sources that produce the tabular dataset shown in the overview.
///
/// A source is read once at startup; the returned snapshot is immutable.
pub trait DatasetSource: Send + Sync {
    /// Source name, used for logging.
    fn name(&self) -> &str;

    /// Read the full dataset.
    fn load(&self) -> Result<Dataset>;
}
