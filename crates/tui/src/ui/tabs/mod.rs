//! Page-specific UI modules.

mod overview;
mod predict;
mod visualizations;

pub use overview::draw_overview_tab;
pub use predict::draw_prediction_tab;
pub use visualizations::draw_visualizations_tab;
