//! Startup artifact loading.
//!
//! The model, the encoding table and the dataset are read once before the
//! UI starts and then shared read-only for the rest of the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use data_facade::{ChartCatalog, CsvDatasetSource, DataError, Dataset, DatasetSource};
use predictor_facade::{EncodingError, EncodingTable, ModelError, Regressor, TreeEnsemble};

use crate::config::Config;

/// Error type for startup loading. Any variant halts the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Model load failed ({path}): {source}")]
    Model { path: PathBuf, source: ModelError },

    #[error("Encodings load failed ({path}): {source}")]
    Encodings {
        path: PathBuf,
        source: EncodingError,
    },

    #[error("Dataset load failed ({path}): {source}")]
    Dataset { path: PathBuf, source: DataError },
}

/// Everything the pages read from. Immutable after construction.
pub struct Artifacts {
    pub model: Arc<dyn Regressor>,
    pub encodings: EncodingTable,
    pub dataset: Dataset,
    pub catalog: ChartCatalog,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("model", &self.model.name())
            .field("dataset_rows", &self.dataset.row_count())
            .field("assets_dir", &self.catalog.assets_dir())
            .finish()
    }
}

/// Load model, encodings and dataset, in that order. The first failure wins.
pub fn load_artifacts(config: &Config) -> Result<Artifacts, LoadError> {
    let model = load_model(&config.model)?;
    let encodings = load_encodings(&config.encodings)?;
    let dataset = CsvDatasetSource::new(&config.dataset)
        .load()
        .map_err(|source| LoadError::Dataset {
            path: config.dataset.clone(),
            source,
        })?;

    Ok(Artifacts {
        model,
        encodings,
        dataset,
        catalog: ChartCatalog::standard(&config.assets_dir),
    })
}

fn load_model(path: &Path) -> Result<Arc<dyn Regressor>, LoadError> {
    let model = TreeEnsemble::from_path(path).map_err(|source| LoadError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        model = model.name(),
        trees = model.n_trees(),
        nodes = model.node_count(),
        "model loaded"
    );
    Ok(Arc::new(model))
}

fn load_encodings(path: &Path) -> Result<EncodingTable, LoadError> {
    let table = EncodingTable::from_path(path).map_err(|source| LoadError::Encodings {
        path: path.to_path_buf(),
        source,
    })?;
    for feature in predictor_facade::CategoricalFeature::all() {
        tracing::info!(
            feature = feature.key(),
            categories = table.values(*feature).len(),
            "encodings loaded"
        );
    }
    Ok(table)
}
