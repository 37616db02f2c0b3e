//! Categorical encoding table.
//!
//! The model only consumes numbers, so every categorical selection is
//! mapped to the integer code it was trained with. Codes come from an
//! `encodings.json` artifact shaped as
//! `{ "<Feature>": { "<raw value>": <code>, ... }, ... }`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::EncodingError;

/// Code fed to the model for a value that has no encoding.
pub const UNKNOWN_CODE: i64 = -1;

/// Categorical features consumed by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalFeature {
    ShipMode,
    Segment,
    City,
    State,
    Region,
    Category,
    SubCategory,
}

impl CategoricalFeature {
    /// Key used in the encodings file.
    pub fn key(self) -> &'static str {
        match self {
            CategoricalFeature::ShipMode => "Ship Mode",
            CategoricalFeature::Segment => "Segment",
            CategoricalFeature::City => "City",
            CategoricalFeature::State => "State",
            CategoricalFeature::Region => "Region",
            CategoricalFeature::Category => "Category",
            CategoricalFeature::SubCategory => "Sub-Category",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }

    /// All features, in dropdown display order.
    pub fn all() -> &'static [CategoricalFeature] {
        &[
            CategoricalFeature::ShipMode,
            CategoricalFeature::Segment,
            CategoricalFeature::City,
            CategoricalFeature::State,
            CategoricalFeature::Region,
            CategoricalFeature::Category,
            CategoricalFeature::SubCategory,
        ]
    }
}

/// Result of an encoding lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded {
    /// Value present in the table
    Known(i64),
    /// Value (or feature) absent from the table
    Unknown,
}

impl Encoded {
    /// Integer handed to the model; [`UNKNOWN_CODE`] for unknown values.
    pub fn code(self) -> i64 {
        match self {
            Encoded::Known(code) => code,
            Encoded::Unknown => UNKNOWN_CODE,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Encoded::Known(_))
    }
}

/// Raw values and codes for one feature, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCodes {
    values: Vec<String>,
    codes: HashMap<String, i64>,
}

impl CategoryCodes {
    fn insert(&mut self, value: String, code: i64) {
        if self.codes.insert(value.clone(), code).is_none() {
            self.values.push(value);
        }
    }

    pub fn get(&self, value: &str) -> Option<i64> {
        self.codes.get(value).copied()
    }

    /// Raw values in the order they appear in the encodings file.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Immutable lookup from categorical value to integer code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodingTable {
    features: HashMap<CategoricalFeature, CategoryCodes>,
}

impl EncodingTable {
    /// Load the table from an encodings JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodingError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Parse the table from JSON text.
    ///
    /// Every feature in [`CategoricalFeature::all`] must be present.
    pub fn from_json_str(text: &str) -> Result<Self, EncodingError> {
        let root: Value = serde_json::from_str(text)?;
        let Value::Object(root) = root else {
            return Err(EncodingError::InvalidLayout(
                "top level must be an object".to_string(),
            ));
        };

        let mut features = HashMap::new();
        for (key, mapping) in root {
            let Some(feature) = CategoricalFeature::from_key(&key) else {
                tracing::debug!(feature = %key, "ignoring encodings for unused feature");
                continue;
            };
            let Value::Object(mapping) = mapping else {
                return Err(EncodingError::InvalidLayout(format!(
                    "'{key}' must map raw values to integer codes"
                )));
            };

            let mut codes = CategoryCodes::default();
            for (value, code) in mapping {
                let parsed = parse_code(&code).ok_or_else(|| EncodingError::InvalidCode {
                    feature: key.clone(),
                    value: value.clone(),
                    code: code.to_string(),
                })?;
                codes.insert(value, parsed);
            }
            features.insert(feature, codes);
        }

        for feature in CategoricalFeature::all() {
            if !features.contains_key(feature) {
                return Err(EncodingError::MissingFeature(feature.key().to_string()));
            }
        }

        Ok(Self { features })
    }

    /// Look up the code for `value`, degrading to [`Encoded::Unknown`].
    pub fn lookup(&self, feature: CategoricalFeature, value: &str) -> Encoded {
        self.features
            .get(&feature)
            .and_then(|codes| codes.get(value))
            .map_or(Encoded::Unknown, Encoded::Known)
    }

    pub fn codes(&self, feature: CategoricalFeature) -> Option<&CategoryCodes> {
        self.features.get(&feature)
    }

    /// Dropdown options for a feature, in file order.
    pub fn values(&self, feature: CategoricalFeature) -> &[String] {
        self.features
            .get(&feature)
            .map(CategoryCodes::values)
            .unwrap_or(&[])
    }
}

/// Accept integers and integral floats (pandas exports may write `3.0`).
fn parse_code(code: &Value) -> Option<i64> {
    if let Some(code) = code.as_i64() {
        return Some(code);
    }
    code.as_f64()
        .filter(|c| c.is_finite() && c.fract() == 0.0)
        .map(|c| c as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Ship Mode": {"Standard Class": 0, "Second Class": 1, "First Class": 2, "Same Day": 3},
        "Segment": {"Consumer": 0, "Corporate": 1, "Home Office": 2},
        "City": {"Henderson": 5, "Los Angeles": 7},
        "State": {"Kentucky": 3, "California": 1},
        "Region": {"South": 2, "West": 3},
        "Category": {"Furniture": 0, "Office Supplies": 1},
        "Sub-Category": {"Bookcases": 4, "Chairs": 5}
    }"#;

    #[test]
    fn test_lookup_known_value() {
        let table = EncodingTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            table.lookup(CategoricalFeature::ShipMode, "Standard Class"),
            Encoded::Known(0)
        );
        assert_eq!(
            table.lookup(CategoricalFeature::City, "Los Angeles"),
            Encoded::Known(7)
        );
    }

    #[test]
    fn test_lookup_unknown_value_is_sentinel() {
        let table = EncodingTable::from_json_str(SAMPLE).unwrap();
        let encoded = table.lookup(CategoricalFeature::City, "Atlantis");
        assert_eq!(encoded, Encoded::Unknown);
        assert_eq!(encoded.code(), -1);
    }

    #[test]
    fn test_lookup_on_empty_table_is_sentinel() {
        let table = EncodingTable::default();
        assert_eq!(table.lookup(CategoricalFeature::Region, "West").code(), UNKNOWN_CODE);
        assert!(table.values(CategoricalFeature::Region).is_empty());
    }

    #[test]
    fn test_values_preserve_file_order() {
        let table = EncodingTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            table.values(CategoricalFeature::ShipMode),
            ["Standard Class", "Second Class", "First Class", "Same Day"]
        );
        assert_eq!(table.values(CategoricalFeature::State), ["Kentucky", "California"]);
    }

    #[test]
    fn test_missing_feature_is_rejected() {
        let text = r#"{"Ship Mode": {"Standard Class": 0}}"#;
        let err = EncodingTable::from_json_str(text).unwrap_err();
        assert!(matches!(err, EncodingError::MissingFeature(ref f) if f == "Segment"));
    }

    #[test]
    fn test_non_integer_code_is_rejected() {
        let text = SAMPLE.replace("\"Henderson\": 5", "\"Henderson\": \"five\"");
        let err = EncodingTable::from_json_str(&text).unwrap_err();
        assert!(matches!(err, EncodingError::InvalidCode { ref value, .. } if value == "Henderson"));
    }

    #[test]
    fn test_integral_float_code_is_accepted() {
        let text = SAMPLE.replace("\"Henderson\": 5", "\"Henderson\": 5.0");
        let table = EncodingTable::from_json_str(&text).unwrap();
        assert_eq!(table.lookup(CategoricalFeature::City, "Henderson"), Encoded::Known(5));
    }

    #[test]
    fn test_unused_feature_is_ignored() {
        let text = SAMPLE.replacen('{', r#"{"Country": {"United States": 0},"#, 1);
        let table = EncodingTable::from_json_str(&text).unwrap();
        assert_eq!(table.lookup(CategoricalFeature::Segment, "Consumer"), Encoded::Known(0));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = EncodingTable::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidLayout(_)));
    }

    #[test]
    fn test_feature_key_round_trip() {
        for feature in CategoricalFeature::all() {
            assert_eq!(CategoricalFeature::from_key(feature.key()), Some(*feature));
        }
        assert_eq!(CategoricalFeature::from_key("Country"), None);
    }
}
