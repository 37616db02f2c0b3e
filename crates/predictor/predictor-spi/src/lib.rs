//! Predictor Service Provider Interface
//!
//! Defines the trait implemented by pre-trained sales regressors and the
//! errors they report at inference time.

use thiserror::Error;

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictError>;

/// Errors that can occur while running inference
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Row length does not match what the model was trained on
    #[error("Feature count mismatch: model expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    /// A feature value is NaN or infinite
    #[error("Feature '{name}' is not a finite number: {value}")]
    NonFiniteFeature { name: String, value: f64 },

    /// The model structure could not be traversed
    #[error("Malformed model: {0}")]
    MalformedModel(String),
}

/// A pre-trained regressor mapping one feature row to one scalar.
///
/// Implementations are immutable once loaded and are shared read-only
/// across every prediction request.
pub trait Regressor: Send + Sync {
    /// Model name, used for display and logging.
    fn name(&self) -> &str;

    /// Short note shown next to the name, such as validation accuracy.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Number of features every row must contain.
    fn n_features(&self) -> usize;

    /// Predict a single scalar for one row.
    fn predict_row(&self, row: &[f64]) -> Result<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Regressor for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn n_features(&self) -> usize {
            2
        }

        fn predict_row(&self, row: &[f64]) -> Result<f64> {
            if row.len() != self.n_features() {
                return Err(PredictError::FeatureCountMismatch {
                    expected: self.n_features(),
                    actual: row.len(),
                });
            }
            Ok(self.0)
        }
    }

    #[test]
    fn test_regressor_is_object_safe() {
        let model: Box<dyn Regressor> = Box::new(Constant(4.5));
        assert_eq!(model.name(), "constant");
        assert_eq!(model.predict_row(&[1.0, 2.0]).unwrap(), 4.5);
    }

    #[test]
    fn test_feature_count_mismatch_message() {
        let err = Constant(0.0).predict_row(&[1.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Feature count mismatch: model expects 2 features, got 1"
        );
    }

    #[test]
    fn test_non_finite_feature_message() {
        let err = PredictError::NonFiniteFeature {
            name: "Profit".to_string(),
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Feature 'Profit' is not a finite number: NaN");
    }

    #[test]
    fn test_malformed_model_message() {
        let err = PredictError::MalformedModel("node 3 out of range".to_string());
        assert_eq!(err.to_string(), "Malformed model: node 3 out of range");
    }
}
