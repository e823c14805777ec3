//! Serializable chart configuration consumed by the charting front-end
//!
//! The front-end owns rendering; this crate only hands it labels, values and
//! display options. Field names serialize in the camelCase convention the
//! charting library expects.

use serde::Serialize;

/// Chart kinds understood by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Doughnut,
    Pie,
}

/// Which axis carries the category labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    /// Vertical bars
    X,
    /// Horizontal bars
    Y,
}

/// Legend placement; `Hidden` omits the legend entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Hidden,
}

/// One rendered series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    pub label: String,
    pub data: Vec<f64>,
    /// One color per value for single-series charts, a single entry otherwise
    pub background_color: Vec<String>,
    pub border_width: u8,
}

/// Labels plus the series drawn against them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesData>,
}

/// Display options for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: IndexAxis,
    pub stacked: bool,
    pub legend: LegendPosition,
    /// Chart-level title, when the chart names its own grouping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,
    /// Grand total backing "N alunos (P%)" tooltips; absent when the tooltip
    /// shows only the count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_total: Option<f64>,
}

/// Complete configuration for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}
