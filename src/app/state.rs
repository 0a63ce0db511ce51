//! Application state
//!
//! Every user-editable field is kept as the raw text the user typed; it is
//! only parsed when a command runs, so invalid text never leaks into the
//! chart or the selected algorithm.

use crate::animation::BarChart;
use crate::config::VisualizerConfig;
use crate::registry::Algorithm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// "Min Value" field
    pub min_value: String,
    /// "Max Value" field
    pub max_value: String,
    /// "Num Elements" field
    pub num_elements: String,
    /// The editable list literal, e.g. `[5, 3, 8, 1]`
    pub list_text: String,
    /// "Search Value" field
    pub search_value: String,
    /// Single-choice algorithm selection
    pub selected: Algorithm,
    /// What the display surface currently shows
    pub chart: BarChart,
}

impl AppState {
    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self {
            min_value: config.min_value.clone(),
            max_value: config.max_value.clone(),
            num_elements: config.num_elements.clone(),
            list_text: String::new(),
            search_value: String::new(),
            selected: Algorithm::default(),
            chart: BarChart::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&VisualizerConfig::default())
    }
}
