//! DTOs for the dashboard and its charts.

use serde::{Deserialize, Serialize};

use crate::domain::chart::{ChartPoint, TimeRange};
use crate::domain::insight::StatCard;

/// Query parameters of the chart endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub range: Option<String>,
}

/// Time-range tab rendered above a chart.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RangeTab {
    pub slug: &'static str,
    pub label: String,
    pub active: bool,
}

/// One chart window ready for a charting library.
#[derive(Debug, Serialize)]
pub struct ChartView {
    pub key: String,
    pub title: String,
    pub total_value: u64,
    pub value_label: String,
    pub max_value: f64,
    pub range: TimeRange,
    pub ranges: Vec<RangeTab>,
    pub ticks: Vec<f64>,
    pub points: Vec<ChartPoint>,
}

/// Data required to render the dashboard template.
#[derive(Debug)]
pub struct DashboardPageData {
    pub stats: Vec<StatCard>,
    pub charts: Vec<ChartView>,
}
