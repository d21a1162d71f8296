//! Dashboard configuration.

use crate::chart::layout::ChartLayout;
use crate::data::loader::DatasetSource;

pub const SCOTLAND_DATA_URL: &str = "https://raw.githubusercontent.com/asongtoruin/dash_data/master\
/Baby%20Names/Filtered%20Names%20Scotland.csv";

pub const DATA_SOURCE_URL: &str = "https://www.nrscotland.gov.uk/statistics-and-data/statistics\
/statistics-by-theme/vital-events/names/babies-first-names";

pub const PROJECT_URL: &str = "https://github.com/asongtoruin/baby_dash";

/// Static settings for the dashboard window and its charts
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Window title and brand text
    pub title: String,
    /// Where the table is loaded from at startup
    pub source: DatasetSource,
    /// Link to the publisher of the data
    pub data_source_link: String,
    /// Link to the project page
    pub project_link: String,
    /// Initial value of the single-name dropdown
    pub default_name: String,
    /// Initial value of the comparison dropdown
    pub default_comparison: Vec<String>,
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// Layout shared by both charts
    pub layout: ChartLayout,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Scottish Baby Names".to_string(),
            source: DatasetSource::from(SCOTLAND_DATA_URL),
            data_source_link: DATA_SOURCE_URL.to_string(),
            project_link: PROJECT_URL.to_string(),
            default_name: "Adam".to_string(),
            default_comparison: vec!["Adam".to_string()],
            window_size: [1100.0, 900.0],
            layout: ChartLayout::standard(),
        }
    }
}
