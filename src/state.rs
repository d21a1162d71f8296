use std::sync::Arc;

use crate::chart::series::{Figure, Series};
use crate::chart::transform::{compare_names, single_name_figure};
use crate::color::SeriesColors;
use crate::config::DashboardConfig;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Table loaded at startup, shared read-only.
    pub dataset: Arc<Dataset>,

    pub config: DashboardConfig,

    /// Current value of the single-name dropdown.
    pub single_name: String,
    /// Search text typed into the single-name dropdown.
    pub single_query: String,
    /// Figure produced by the last single-name selection.
    pub single_figure: Figure,

    /// Current value of the comparison dropdown, in selection order.
    pub chosen_names: Vec<String>,
    /// Search text typed into the comparison dropdown.
    pub compare_query: String,
    /// Figure produced by the last comparison selection.
    pub comparison_figure: Figure,

    pub colors: SeriesColors,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        let single_name = config.default_name.clone();
        let chosen_names = config.default_comparison.clone();
        for name in std::iter::once(&single_name).chain(&chosen_names) {
            if !dataset.names().contains(name) {
                log::warn!("Default selection '{name}' is not in the dataset; its chart will be empty");
            }
        }
        let mut state = Self {
            dataset,
            config,
            single_name,
            single_query: String::new(),
            single_figure: Figure::NoChart,
            chosen_names,
            compare_query: String::new(),
            comparison_figure: Figure::NoChart,
            colors: SeriesColors::new(),
        };
        state.refresh_single();
        state.refresh_comparison();
        state
    }

    /// Choose the name shown in the single-name chart.
    pub fn select_single(&mut self, name: &str) {
        if self.single_name != name {
            self.single_name = name.to_string();
            self.refresh_single();
        }
    }

    /// Add a name to the comparison, or remove it if it is already there.
    pub fn toggle_compared(&mut self, name: &str) {
        match self.chosen_names.iter().position(|n| n == name) {
            Some(idx) => {
                self.chosen_names.remove(idx);
            }
            None => self.chosen_names.push(name.to_string()),
        }
        self.refresh_comparison();
    }

    /// Remove a name from the comparison.
    pub fn remove_compared(&mut self, name: &str) {
        let before = self.chosen_names.len();
        self.chosen_names.retain(|n| n != name);
        if self.chosen_names.len() != before {
            self.refresh_comparison();
        }
    }

    /// Empty the comparison selection.
    pub fn clear_compared(&mut self) {
        if !self.chosen_names.is_empty() {
            self.chosen_names.clear();
            self.refresh_comparison();
        }
    }

    pub fn is_compared(&self, name: &str) -> bool {
        self.chosen_names.iter().any(|n| n == name)
    }

    fn refresh_single(&mut self) {
        self.single_figure = single_name_figure(&self.dataset, &self.single_name);
        log::debug!(
            "single-name figure for '{}' ({} points): {}",
            self.single_name,
            point_count(&self.single_figure),
            self.single_figure.to_json(&self.config.layout)
        );
    }

    fn refresh_comparison(&mut self) {
        self.comparison_figure = compare_names(&self.dataset, self.chosen_names.as_slice());
        log::debug!(
            "comparison figure for {:?} ({} points): {}",
            self.chosen_names,
            point_count(&self.comparison_figure),
            self.comparison_figure.to_json(&self.config.layout)
        );
    }
}

fn point_count(figure: &Figure) -> usize {
    figure.series().iter().map(Series::len).sum()
}
