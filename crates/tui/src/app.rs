//! Application state management for the TUI.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use data_facade::{load_chart_image, CHART_CHOICES};
use image::RgbImage;
use predictor_facade::{
    format_currency, predict_sales, CategoricalFeature, CategoricalInputs, EncodingTable,
    FeatureVector, NumericField, NumericInputs, Slider,
};

use crate::services::Artifacts;
use crate::widgets::ScaleCache;

/// Rows shown in the dataset preview.
pub const PREVIEW_ROWS: usize = 5;

/// Outcome of loading the startup artifacts.
pub enum Startup {
    Ready(Arc<Artifacts>),
    /// Loading failed; no page is ever rendered.
    Failed(String),
}

/// Main application state.
pub struct App {
    /// Loaded artifacts, or the reason they could not be loaded
    pub startup: Startup,
    /// Current active page
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// Dataset preview scroll state
    pub overview: OverviewState,
    /// Chart selector state
    pub charts: ChartState,
    /// Prediction inputs and last result
    pub form: PredictionForm,
}

impl App {
    pub fn new(artifacts: Arc<Artifacts>) -> Self {
        Self::with_startup(Startup::Ready(artifacts))
    }

    /// App that only shows a startup error.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::with_startup(Startup::Failed(error.into()))
    }

    fn with_startup(startup: Startup) -> Self {
        Self {
            startup,
            current_tab: Tab::default(),
            should_quit: false,
            status_message: None,
            overview: OverviewState::default(),
            charts: ChartState::default(),
            form: PredictionForm::new(),
        }
    }

    pub fn artifacts(&self) -> Option<&Arc<Artifacts>> {
        match &self.startup {
            Startup::Ready(artifacts) => Some(artifacts),
            Startup::Failed(_) => None,
        }
    }

    /// Whether startup failed and the dashboard is halted.
    pub fn is_halted(&self) -> bool {
        matches!(self.startup, Startup::Failed(_))
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Move to next page.
    pub fn next_tab(&mut self) {
        self.switch_to(self.current_tab.next());
    }

    /// Move to previous page.
    pub fn previous_tab(&mut self) {
        self.switch_to(self.current_tab.previous());
    }

    /// Jump to a specific page by number (1-3).
    pub fn goto_tab(&mut self, num: u8) {
        self.switch_to(Tab::from_num(num));
    }

    fn switch_to(&mut self, tab: Tab) {
        self.current_tab = tab;
        if tab == Tab::Visualizations && !self.charts.loaded {
            self.refresh_chart();
        }
    }

    /// Scroll the dataset preview one column right.
    pub fn scroll_columns_right(&mut self) {
        let columns = self
            .artifacts()
            .map_or(0, |a| a.dataset.column_count());
        if self.overview.column_offset + 1 < columns {
            self.overview.column_offset += 1;
        }
    }

    /// Scroll the dataset preview one column left.
    pub fn scroll_columns_left(&mut self) {
        self.overview.column_offset = self.overview.column_offset.saturating_sub(1);
    }

    pub fn select_next_chart(&mut self) {
        self.charts.selected = (self.charts.selected + 1) % CHART_CHOICES.len();
        self.refresh_chart();
    }

    pub fn select_previous_chart(&mut self) {
        self.charts.selected = self
            .charts
            .selected
            .checked_sub(1)
            .unwrap_or(CHART_CHOICES.len() - 1);
        self.refresh_chart();
    }

    /// Resolve the selected label and decode its image.
    ///
    /// A label missing from the catalog leaves the panel empty.
    pub fn refresh_chart(&mut self) {
        let Some(artifacts) = self.artifacts().cloned() else {
            return;
        };
        let label = self.charts.selected_label();
        self.charts.loaded = true;

        let Some(path) = artifacts.catalog.resolve(label) else {
            tracing::debug!(label, "no image mapped for chart label");
            self.charts.view = None;
            return;
        };

        let image = load_chart_image(&path).map_err(|e| e.to_string());
        if let Err(error) = &image {
            tracing::warn!(label, path = %path.display(), %error, "chart unavailable");
        }
        self.charts.view = Some(ChartView {
            label: label.to_string(),
            path,
            image,
            scaled: ScaleCache::default(),
        });
    }

    pub fn focus_next_field(&mut self) {
        self.form.focus = (self.form.focus + 1) % self.form.field_count();
    }

    pub fn focus_previous_field(&mut self) {
        self.form.focus = self
            .form
            .focus
            .checked_sub(1)
            .unwrap_or(self.form.field_count() - 1);
    }

    /// Step the focused slider or cycle the focused dropdown.
    pub fn adjust_focused_field(&mut self, forward: bool) {
        let Some(artifacts) = self.artifacts().cloned() else {
            return;
        };
        self.form.adjust(forward, &artifacts.encodings);
    }

    /// Encode the current inputs and run the model once.
    pub fn run_prediction(&mut self) {
        let Some(artifacts) = self.artifacts().cloned() else {
            return;
        };
        let features = self.form.feature_vector(&artifacts.encodings);
        let outcome = match predict_sales(artifacts.model.as_ref(), &features) {
            Ok(estimate) => {
                tracing::info!(estimate, "prediction succeeded");
                PredictionOutcome::Estimate(estimate)
            }
            Err(error) => {
                tracing::warn!(%error, "prediction failed");
                PredictionOutcome::Failed(error.to_string())
            }
        };
        self.set_status(outcome.message());
        self.form.outcome = Some(outcome);
    }
}

/// Pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Visualizations,
    Prediction,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Overview => Tab::Visualizations,
            Tab::Visualizations => Tab::Prediction,
            Tab::Prediction => Tab::Overview,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Overview => Tab::Prediction,
            Tab::Visualizations => Tab::Overview,
            Tab::Prediction => Tab::Visualizations,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            1 => Tab::Overview,
            2 => Tab::Visualizations,
            3 => Tab::Prediction,
            _ => Tab::Overview,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Visualizations => 1,
            Tab::Prediction => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Overview => "Project Overview",
            Tab::Visualizations => "Visualizations",
            Tab::Prediction => "Sales Prediction",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Visualizations, Tab::Prediction]
    }
}

/// Dataset preview state.
#[derive(Debug, Clone, Default)]
pub struct OverviewState {
    /// First visible column
    pub column_offset: usize,
}

/// Chart selector state.
#[derive(Debug, Default)]
pub struct ChartState {
    /// Index into the selector options
    pub selected: usize,
    /// Image for the selected label, `None` when the label is unmapped
    pub view: Option<ChartView>,
    /// Whether `view` reflects `selected`
    pub loaded: bool,
}

impl ChartState {
    pub fn selected_label(&self) -> &'static str {
        CHART_CHOICES[self.selected % CHART_CHOICES.len()]
    }
}

/// A resolved chart.
#[derive(Debug)]
pub struct ChartView {
    /// Caption
    pub label: String,
    pub path: PathBuf,
    /// Decoded pixels, or why they could not be read
    pub image: Result<RgbImage, String>,
    /// `image` scaled to the last drawn panel size
    pub scaled: ScaleCache,
}

/// Which input has focus on the prediction page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Slider(usize),
    Dropdown(usize),
}

/// A categorical selector over the encoding table's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    pub feature: CategoricalFeature,
    /// Index into the feature's values; 0 is the first key in the file
    pub selected: usize,
}

impl Dropdown {
    pub fn value<'a>(&self, encodings: &'a EncodingTable) -> &'a str {
        encodings
            .values(self.feature)
            .get(self.selected)
            .map_or("", String::as_str)
    }
}

/// Result of the last Predict action.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Estimate(f64),
    Failed(String),
}

impl PredictionOutcome {
    pub fn message(&self) -> String {
        match self {
            PredictionOutcome::Estimate(value) => {
                format!("Predicted Sales: {}", format_currency(*value))
            }
            PredictionOutcome::Failed(reason) => format!("Prediction failed: {reason}"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionOutcome::Estimate(_))
    }
}

/// Inputs on the prediction page.
#[derive(Debug, Clone)]
pub struct PredictionForm {
    pub sliders: Vec<(NumericField, Slider)>,
    pub dropdowns: Vec<Dropdown>,
    /// Focused field; sliders first, then dropdowns
    pub focus: usize,
    pub outcome: Option<PredictionOutcome>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionForm {
    pub fn new() -> Self {
        Self {
            sliders: NumericField::all()
                .iter()
                .map(|field| (*field, Slider::new(field.spec())))
                .collect(),
            dropdowns: CategoricalFeature::all()
                .iter()
                .map(|feature| Dropdown {
                    feature: *feature,
                    selected: 0,
                })
                .collect(),
            focus: 0,
            outcome: None,
        }
    }

    pub fn field_count(&self) -> usize {
        self.sliders.len() + self.dropdowns.len()
    }

    pub fn focused(&self) -> FormField {
        if self.focus < self.sliders.len() {
            FormField::Slider(self.focus)
        } else {
            FormField::Dropdown(self.focus - self.sliders.len())
        }
    }

    pub fn adjust(&mut self, forward: bool, encodings: &EncodingTable) {
        match self.focused() {
            FormField::Slider(idx) => {
                let slider = &mut self.sliders[idx].1;
                if forward {
                    slider.increment();
                } else {
                    slider.decrement();
                }
            }
            FormField::Dropdown(idx) => {
                let dropdown = &mut self.dropdowns[idx];
                let options = encodings.values(dropdown.feature).len();
                if options == 0 {
                    return;
                }
                dropdown.selected = if forward {
                    (dropdown.selected + 1) % options
                } else {
                    dropdown.selected.checked_sub(1).unwrap_or(options - 1)
                };
            }
        }
    }

    pub fn numeric_inputs(&self) -> NumericInputs {
        let mut inputs = NumericInputs::default();
        for (field, slider) in &self.sliders {
            inputs.set(*field, slider.value());
        }
        inputs
    }

    pub fn categorical_inputs(&self, encodings: &EncodingTable) -> CategoricalInputs {
        let mut inputs = CategoricalInputs::default();
        for dropdown in &self.dropdowns {
            inputs.set(dropdown.feature, dropdown.value(encodings));
        }
        inputs
    }

    pub fn feature_vector(&self, encodings: &EncodingTable) -> FeatureVector {
        FeatureVector::encode(
            &self.numeric_inputs(),
            &self.categorical_inputs(encodings),
            encodings,
        )
    }
}
