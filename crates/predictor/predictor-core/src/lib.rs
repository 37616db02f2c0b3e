//! Predictor Core
//!
//! Everything needed to turn dashboard inputs into a sales estimate:
//!
//! - [`encoding`]: categorical value to integer code lookup
//! - [`features`]: the fixed-order 13-column feature vector
//! - [`inputs`]: slider ranges and the raw user selections
//! - [`ensemble`]: the pre-trained tree-ensemble regressor
//! - [`format`]: currency formatting for the result

pub mod encoding;
pub mod ensemble;
mod error;
pub mod features;
pub mod format;
pub mod inputs;

pub use encoding::{CategoricalFeature, CategoryCodes, Encoded, EncodingTable, UNKNOWN_CODE};
pub use ensemble::{RegressionTree, TreeEnsemble, TreeNode};
pub use error::{EncodingError, ModelError};
pub use features::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};
pub use format::format_currency;
pub use inputs::{CategoricalInputs, NumericField, NumericInputs, Slider, SliderSpec};

pub use predictor_spi::{PredictError, Regressor, Result};

/// Run one prediction for an assembled feature vector.
pub fn predict_sales(model: &dyn Regressor, features: &FeatureVector) -> Result<f64> {
    let row = features.to_row();
    let estimate = model.predict_row(&row)?;
    tracing::debug!(model = model.name(), ?row, estimate, "prediction complete");
    Ok(estimate)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::encoding::{CategoricalFeature, Encoded, EncodingTable};
    pub use crate::ensemble::TreeEnsemble;
    pub use crate::features::{FeatureVector, FEATURE_COLUMNS};
    pub use crate::format::format_currency;
    pub use crate::inputs::{CategoricalInputs, NumericField, NumericInputs, Slider};
    pub use crate::predict_sales;
    pub use predictor_spi::{PredictError, Regressor};
}
