//! Tree-ensemble regressor (extremely randomized trees).
//!
//! The ensemble is trained upstream and exported as JSON:
//!
//! ```json
//! {
//!   "name": "ExtraTreesRegressor",
//!   "description": "91% Accuracy",
//!   "feature_names": ["Quantity", "Discount", "..."],
//!   "trees": [
//!     { "nodes": [
//!         { "feature": 2, "threshold": 10.5, "left": 1, "right": 2 },
//!         { "value": 120.0 },
//!         { "value": 480.0 }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A split sends a row left when `row[feature] <= threshold`. The
//! prediction is the mean of the leaf reached in every tree.

use std::fs;
use std::path::Path;

use predictor_spi::{PredictError, Regressor, Result};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::features::FEATURE_COLUMNS;

/// One node of a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal node
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node
    Leaf { value: f64 },
}

/// A single regression tree stored as a flat node array, root at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Structural checks that guarantee [`RegressionTree::predict`] terminates.
    fn validate(&self, n_features: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature}, model has {n_features}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has non-finite threshold"));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {idx} has non-finite value"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf.
    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        let mut idx = 0;
        // Children always sit after their parent, so a walk visits each node at most once.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = row.get(*feature).ok_or_else(|| {
                        PredictError::MalformedModel(format!(
                            "node {idx} reads feature {feature}, row has {}",
                            row.len()
                        ))
                    })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(PredictError::MalformedModel(format!(
                        "node {idx} out of range"
                    )))
                }
            }
        }
        Err(PredictError::MalformedModel(
            "walk did not reach a leaf".to_string(),
        ))
    }
}

/// On-disk model layout.
#[derive(Debug, Deserialize)]
struct EnsembleFile {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    description: Option<String>,
    feature_names: Vec<String>,
    trees: Vec<RegressionTree>,
}

fn default_name() -> String {
    "ExtraTreesRegressor".to_string()
}

/// Averaging ensemble of regression trees over the 13 sales features.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    name: String,
    description: Option<String>,
    feature_names: Vec<String>,
    trees: Vec<RegressionTree>,
}

impl TreeEnsemble {
    /// Build and validate an ensemble.
    ///
    /// `feature_names` must match [`FEATURE_COLUMNS`] exactly, order included.
    pub fn new(
        name: impl Into<String>,
        feature_names: Vec<String>,
        trees: Vec<RegressionTree>,
    ) -> std::result::Result<Self, ModelError> {
        if feature_names.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                actual: feature_names,
            });
        }
        if trees.is_empty() {
            return Err(ModelError::Empty);
        }
        for (tree_idx, tree) in trees.iter().enumerate() {
            tree.validate(feature_names.len())
                .map_err(|reason| ModelError::InvalidTree {
                    tree: tree_idx,
                    reason,
                })?;
        }

        Ok(Self {
            name: name.into(),
            description: None,
            feature_names,
            trees,
        })
    }

    /// Load an ensemble from a JSON model file.
    pub fn from_path(path: impl AsRef<Path>) -> std::result::Result<Self, ModelError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> std::result::Result<Self, ModelError> {
        let file: EnsembleFile = serde_json::from_str(text)?;
        let mut model = Self::new(file.name, file.feature_names, file.trees)?;
        model.description = file.description;
        tracing::debug!(
            model = %model.name,
            trees = model.trees.len(),
            nodes = model.node_count(),
            "model validated"
        );
        Ok(model)
    }

    /// Attach a display note, e.g. the accuracy measured at training time.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn node_count(&self) -> usize {
        self.trees.iter().map(RegressionTree::len).sum()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl Regressor for TreeEnsemble {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.n_features() {
            return Err(PredictError::FeatureCountMismatch {
                expected: self.n_features(),
                actual: row.len(),
            });
        }
        if let Some((name, &value)) = self
            .feature_names
            .iter()
            .zip(row)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(PredictError::NonFiniteFeature {
                name: name.clone(),
                value,
            });
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict(row)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> RegressionTree {
        RegressionTree::new(vec![
            TreeNode::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { value: low },
            TreeNode::Leaf { value: high },
        ])
    }

    fn row(quantity: f64, profit: f64) -> [f64; 13] {
        let mut row = [0.0; 13];
        row[0] = quantity;
        row[2] = profit;
        row
    }

    #[test]
    fn test_stump_goes_left_on_equal() {
        let tree = stump(0, 5.0, 10.0, 20.0);
        assert_eq!(tree.predict(&row(5.0, 0.0)).unwrap(), 10.0);
        assert_eq!(tree.predict(&row(5.5, 0.0)).unwrap(), 20.0);
    }

    #[test]
    fn test_ensemble_averages_trees() {
        let model = TreeEnsemble::new(
            "test",
            columns(),
            vec![stump(0, 5.0, 10.0, 20.0), stump(2, 10.0, 100.0, 200.0)],
        )
        .unwrap();
        assert_eq!(model.predict_row(&row(1.0, 15.0)).unwrap(), (10.0 + 200.0) / 2.0);
        assert_eq!(model.n_trees(), 2);
        assert_eq!(model.node_count(), 6);
    }

    #[test]
    fn test_wrong_row_length_is_an_error() {
        let model = TreeEnsemble::new("test", columns(), vec![stump(0, 5.0, 1.0, 2.0)]).unwrap();
        let err = model.predict_row(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            PredictError::FeatureCountMismatch {
                expected: 13,
                actual: 2
            }
        );
    }

    #[test]
    fn test_non_finite_feature_is_an_error() {
        let model = TreeEnsemble::new("test", columns(), vec![stump(0, 5.0, 1.0, 2.0)]).unwrap();
        let mut bad = row(1.0, 1.0);
        bad[4] = f64::INFINITY;
        let err = model.predict_row(&bad).unwrap_err();
        assert!(err.to_string().contains("'loss'"));
    }

    #[test]
    fn test_feature_order_mismatch_is_rejected() {
        let mut names = columns();
        names.swap(0, 1);
        let err = TreeEnsemble::new("test", names, vec![stump(0, 5.0, 1.0, 2.0)]).unwrap_err();
        assert!(matches!(err, ModelError::FeatureMismatch { .. }));
    }

    #[test]
    fn test_empty_ensemble_is_rejected() {
        let err = TreeEnsemble::new("test", columns(), vec![]).unwrap_err();
        assert!(matches!(err, ModelError::Empty));
    }

    #[test]
    fn test_backward_child_is_rejected() {
        let tree = RegressionTree::new(vec![
            TreeNode::Leaf { value: 1.0 },
            TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 2,
            },
            TreeNode::Leaf { value: 2.0 },
        ]);
        let err = TreeEnsemble::new("test", columns(), vec![tree]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidTree { tree: 0, .. }));
    }

    #[test]
    fn test_out_of_range_feature_is_rejected() {
        let err = TreeEnsemble::new("test", columns(), vec![stump(13, 1.0, 1.0, 2.0)]).unwrap_err();
        assert!(err.to_string().contains("feature 13"));
    }

    #[test]
    fn test_parse_json_model() {
        let names = serde_json::to_string(&FEATURE_COLUMNS).unwrap();
        let text = format!(
            r#"{{
                "name": "ExtraTreesRegressor",
                "feature_names": {names},
                "trees": [
                    {{"nodes": [
                        {{"feature": 0, "threshold": 3.5, "left": 1, "right": 2}},
                        {{"value": 50.0}},
                        {{"value": 150.0}}
                    ]}},
                    {{"nodes": [{{"value": 250.0}}]}}
                ]
            }}"#
        );
        let model = TreeEnsemble::from_json_str(&text).unwrap();
        assert_eq!(model.name(), "ExtraTreesRegressor");
        assert_eq!(model.predict_row(&row(4.0, 0.0)).unwrap(), 200.0);
    }

    #[test]
    fn test_missing_name_uses_default() {
        let names = serde_json::to_string(&FEATURE_COLUMNS).unwrap();
        let text = format!(r#"{{"feature_names": {names}, "trees": [{{"nodes": [{{"value": 1.0}}]}}]}}"#);
        let model = TreeEnsemble::from_json_str(&text).unwrap();
        assert_eq!(model.name(), "ExtraTreesRegressor");
        assert_eq!(model.description(), None);
    }

    #[test]
    fn test_description_is_read_from_file() {
        let names = serde_json::to_string(&FEATURE_COLUMNS).unwrap();
        let text = format!(
            r#"{{"name": "ExtraTreesRegressor", "description": "91% Accuracy",
                "feature_names": {names}, "trees": [{{"nodes": [{{"value": 1.0}}]}}]}}"#
        );
        let model = TreeEnsemble::from_json_str(&text).unwrap();
        assert_eq!(model.description(), Some("91% Accuracy"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = TreeEnsemble::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
