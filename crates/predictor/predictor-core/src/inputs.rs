//! Raw user selections on the prediction page.
//!
//! Numeric fields are bounded sliders; categorical fields hold the raw
//! string picked from the encoding table's options.

use std::collections::HashMap;

use crate::encoding::CategoricalFeature;

/// Numeric inputs, in slider display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Discount,
    Quantity,
    Profit,
    ProfitMargin,
    Loss,
    OrderYear,
}

impl NumericField {
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Discount => "Discount",
            NumericField::Quantity => "Quantity",
            NumericField::Profit => "Profit",
            NumericField::ProfitMargin => "Profit Margin",
            NumericField::Loss => "Loss",
            NumericField::OrderYear => "Order Year",
        }
    }

    /// Slider bounds the model's training data supports.
    pub fn spec(self) -> SliderSpec {
        match self {
            NumericField::Discount => SliderSpec::new(0.0, 5.0, 0.5),
            NumericField::Quantity => SliderSpec::integer(1, 10),
            NumericField::Profit => SliderSpec::new(5.0, 20.0, 1.0),
            NumericField::ProfitMargin => SliderSpec::new(0.0, 0.5, 0.5),
            NumericField::Loss => SliderSpec::new(0.0, 7000.0, 500.0),
            NumericField::OrderYear => SliderSpec::integer(2011, 2014),
        }
    }

    pub fn all() -> &'static [NumericField] {
        &[
            NumericField::Discount,
            NumericField::Quantity,
            NumericField::Profit,
            NumericField::ProfitMargin,
            NumericField::Loss,
            NumericField::OrderYear,
        ]
    }
}

/// Bounds and step of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Whether values display without decimals
    pub integer: bool,
}

impl SliderSpec {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            integer: false,
        }
    }

    pub fn integer(min: i64, max: i64) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            step: 1.0,
            integer: true,
        }
    }

    /// Highest step index.
    pub fn last_index(&self) -> usize {
        if self.step <= 0.0 || self.max <= self.min {
            return 0;
        }
        ((self.max - self.min) / self.step).floor() as usize
    }

    /// Value at a step index, clamped to the bounds.
    pub fn value_at(&self, index: usize) -> f64 {
        let index = index.min(self.last_index());
        (self.min + index as f64 * self.step).min(self.max)
    }

    pub fn format(&self, value: f64) -> String {
        if self.integer {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        }
    }
}

/// A slider positioned by step index so values never drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    spec: SliderSpec,
    index: usize,
}

impl Slider {
    /// New slider resting at its minimum.
    pub fn new(spec: SliderSpec) -> Self {
        Self { spec, index: 0 }
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.spec.value_at(self.index)
    }

    /// Fraction of the range covered, for drawing a gauge.
    pub fn ratio(&self) -> f64 {
        match self.spec.last_index() {
            0 => 0.0,
            last => self.index as f64 / last as f64,
        }
    }

    pub fn increment(&mut self) {
        if self.index < self.spec.last_index() {
            self.index += 1;
        }
    }

    pub fn decrement(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn display(&self) -> String {
        self.spec.format(self.value())
    }
}

/// Numeric selections passed through to the model unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericInputs {
    pub discount: f64,
    pub quantity: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub loss: f64,
    pub order_year: f64,
}

impl Default for NumericInputs {
    /// Every slider at its minimum.
    fn default() -> Self {
        let mut inputs = Self {
            discount: 0.0,
            quantity: 0.0,
            profit: 0.0,
            profit_margin: 0.0,
            loss: 0.0,
            order_year: 0.0,
        };
        for field in NumericField::all() {
            inputs.set(*field, field.spec().min);
        }
        inputs
    }
}

impl NumericInputs {
    pub fn get(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Discount => self.discount,
            NumericField::Quantity => self.quantity,
            NumericField::Profit => self.profit,
            NumericField::ProfitMargin => self.profit_margin,
            NumericField::Loss => self.loss,
            NumericField::OrderYear => self.order_year,
        }
    }

    pub fn set(&mut self, field: NumericField, value: f64) {
        let slot = match field {
            NumericField::Discount => &mut self.discount,
            NumericField::Quantity => &mut self.quantity,
            NumericField::Profit => &mut self.profit,
            NumericField::ProfitMargin => &mut self.profit_margin,
            NumericField::Loss => &mut self.loss,
            NumericField::OrderYear => &mut self.order_year,
        };
        *slot = value;
    }
}

/// Raw categorical selections. Unset features read as the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoricalInputs {
    selected: HashMap<CategoricalFeature, String>,
}

impl CategoricalInputs {
    pub fn get(&self, feature: CategoricalFeature) -> &str {
        self.selected.get(&feature).map_or("", String::as_str)
    }

    pub fn set(&mut self, feature: CategoricalFeature, value: impl Into<String>) {
        self.selected.insert(feature, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_starts_at_min() {
        for field in NumericField::all() {
            let slider = Slider::new(field.spec());
            assert_eq!(slider.value(), field.spec().min, "{}", field.label());
        }
    }

    #[test]
    fn test_slider_clamps_at_bounds() {
        let mut slider = Slider::new(NumericField::OrderYear.spec());
        slider.decrement();
        assert_eq!(slider.value(), 2011.0);
        for _ in 0..10 {
            slider.increment();
        }
        assert_eq!(slider.value(), 2014.0);
    }

    #[test]
    fn test_fractional_steps_do_not_drift() {
        let mut slider = Slider::new(NumericField::Discount.spec());
        for _ in 0..10 {
            slider.increment();
        }
        assert_eq!(slider.value(), 5.0);
        slider.decrement();
        assert_eq!(slider.value(), 4.5);
    }

    #[test]
    fn test_profit_margin_has_two_positions() {
        let spec = NumericField::ProfitMargin.spec();
        assert_eq!(spec.last_index(), 1);
        assert_eq!(spec.value_at(0), 0.0);
        assert_eq!(spec.value_at(1), 0.5);
        assert_eq!(spec.value_at(5), 0.5);
    }

    #[test]
    fn test_loss_steps() {
        let spec = NumericField::Loss.spec();
        assert_eq!(spec.last_index(), 14);
        assert_eq!(spec.value_at(3), 1500.0);
    }

    #[test]
    fn test_slider_ratio() {
        let mut slider = Slider::new(NumericField::Quantity.spec());
        assert_eq!(slider.ratio(), 0.0);
        for _ in 0..9 {
            slider.increment();
        }
        assert_eq!(slider.ratio(), 1.0);
    }

    #[test]
    fn test_display_formats() {
        let mut year = Slider::new(NumericField::OrderYear.spec());
        year.increment();
        assert_eq!(year.display(), "2012");
        let discount = Slider::new(NumericField::Discount.spec());
        assert_eq!(discount.display(), "0.0");
    }

    #[test]
    fn test_numeric_defaults_are_slider_minimums() {
        let inputs = NumericInputs::default();
        assert_eq!(inputs.quantity, 1.0);
        assert_eq!(inputs.profit, 5.0);
        assert_eq!(inputs.order_year, 2011.0);
        assert_eq!(inputs.discount, 0.0);
    }

    #[test]
    fn test_categorical_unset_reads_empty() {
        let mut inputs = CategoricalInputs::default();
        assert_eq!(inputs.get(CategoricalFeature::City), "");
        inputs.set(CategoricalFeature::City, "Dallas");
        assert_eq!(inputs.get(CategoricalFeature::City), "Dallas");
    }
}
