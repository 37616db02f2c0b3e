//! Fixed-order feature vector handed to the regressor.
//!
//! The model was trained on columns in exactly the order of
//! [`FEATURE_COLUMNS`]. [`FeatureVector::to_row`] is the only place that
//! order is spelled out.

use crate::encoding::{CategoricalFeature, Encoded, EncodingTable};
use crate::inputs::{CategoricalInputs, NumericInputs};

/// Number of columns the model consumes.
pub const FEATURE_COUNT: usize = 13;

/// Column names in model order.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "Quantity",
    "Discount",
    "Profit",
    "order year",
    "loss",
    "profit margin",
    "city_encoded",
    "Ship Mode_encoded",
    "Segment_encoded",
    "State_encoded",
    "Region_encoded",
    "Category_encoded",
    "Sub-Category_encoded",
];

/// One prediction request, with named fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub quantity: f64,
    pub discount: f64,
    pub profit: f64,
    pub order_year: f64,
    pub loss: f64,
    pub profit_margin: f64,
    pub city: Encoded,
    pub ship_mode: Encoded,
    pub segment: Encoded,
    pub state: Encoded,
    pub region: Encoded,
    pub category: Encoded,
    pub sub_category: Encoded,
}

impl FeatureVector {
    /// Build a vector from raw selections.
    ///
    /// Numeric fields pass through unchanged; categorical fields go
    /// through the encoding table, unknown values becoming `-1`.
    pub fn encode(
        numeric: &NumericInputs,
        categorical: &CategoricalInputs,
        table: &EncodingTable,
    ) -> Self {
        let lookup = |feature: CategoricalFeature| table.lookup(feature, categorical.get(feature));
        let vector = Self {
            quantity: numeric.quantity,
            discount: numeric.discount,
            profit: numeric.profit,
            order_year: numeric.order_year,
            loss: numeric.loss,
            profit_margin: numeric.profit_margin,
            city: lookup(CategoricalFeature::City),
            ship_mode: lookup(CategoricalFeature::ShipMode),
            segment: lookup(CategoricalFeature::Segment),
            state: lookup(CategoricalFeature::State),
            region: lookup(CategoricalFeature::Region),
            category: lookup(CategoricalFeature::Category),
            sub_category: lookup(CategoricalFeature::SubCategory),
        };

        for feature in CategoricalFeature::all() {
            if !vector.encoded(*feature).is_known() {
                tracing::warn!(
                    feature = feature.key(),
                    value = categorical.get(*feature),
                    "unknown categorical value, encoding as -1"
                );
            }
        }
        vector
    }

    /// Encoded value for a categorical feature.
    pub fn encoded(&self, feature: CategoricalFeature) -> Encoded {
        match feature {
            CategoricalFeature::ShipMode => self.ship_mode,
            CategoricalFeature::Segment => self.segment,
            CategoricalFeature::City => self.city,
            CategoricalFeature::State => self.state,
            CategoricalFeature::Region => self.region,
            CategoricalFeature::Category => self.category,
            CategoricalFeature::SubCategory => self.sub_category,
        }
    }

    /// Row in model column order.
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.quantity,
            self.discount,
            self.profit,
            self.order_year,
            self.loss,
            self.profit_margin,
            self.city.code() as f64,
            self.ship_mode.code() as f64,
            self.segment.code() as f64,
            self.state.code() as f64,
            self.region.code() as f64,
            self.category.code() as f64,
            self.sub_category.code() as f64,
        ]
    }

    /// `(column, value)` pairs in model column order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_COLUMNS.into_iter().zip(self.to_row())
    }
}
