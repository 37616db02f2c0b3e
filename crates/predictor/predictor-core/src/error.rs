//! Load-time errors for model and encoding artifacts.

use thiserror::Error;

/// Errors raised while loading the serialized regressor.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model file could not be read
    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    /// Model file is not valid JSON or has the wrong shape
    #[error("Failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),

    /// Feature columns differ from the expected names or order
    #[error("Model feature columns do not match: expected {expected:?}, got {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Ensemble contains no trees
    #[error("Model contains no trees")]
    Empty,

    /// A tree failed structural validation
    #[error("Tree {tree}: {reason}")]
    InvalidTree { tree: usize, reason: String },
}

/// Errors raised while loading the categorical encoding table.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Encodings file could not be read
    #[error("Failed to read encodings file: {0}")]
    Io(#[from] std::io::Error),

    /// Encodings file is not valid JSON
    #[error("Failed to parse encodings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top-level value is not an object of objects
    #[error("Invalid encodings layout: {0}")]
    InvalidLayout(String),

    /// A categorical feature required by the model is absent
    #[error("Missing encodings for feature '{0}'")]
    MissingFeature(String),

    /// A code is not an integer
    #[error("Invalid code for {feature} = '{value}': {code}")]
    InvalidCode {
        feature: String,
        value: String,
        code: String,
    },
}
