//! Per-chart aggregation over dataset records

use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::dataset::Dataset;

/// Label shown when a category value is missing from the source row
pub const UNINFORMED_LABEL: &str = "Não informado";

/// Policy for rows whose label column is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingLabel {
    /// Replace the empty label with "Não informado"
    Substitute,
    /// Drop the row from the tally
    Skip,
    /// Keep the empty label as-is
    Keep,
}

/// One category label with its count
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItem {
    pub label: String,
    pub value: f64,
}

/// Extract (label, count) pairs for a single-category chart
///
/// Labels and values are taken from the same record, so a skipped row drops
/// its count along with its label.
pub fn tally(
    dataset: &Dataset,
    label_col: &str,
    value_col: &str,
    missing: MissingLabel,
    sort_desc: bool,
) -> Vec<CategoryItem> {
    let mut items = Vec::with_capacity(dataset.len());
    for record in dataset.records() {
        let raw = record.text(label_col);
        let label = if raw.is_empty() {
            match missing {
                MissingLabel::Substitute => UNINFORMED_LABEL.to_string(),
                MissingLabel::Skip => continue,
                MissingLabel::Keep => String::new(),
            }
        } else {
            raw.to_string()
        };
        items.push(CategoryItem {
            label,
            value: record.number(value_col),
        });
    }

    if sort_desc {
        items.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    }
    items
}

/// Sum of the item counts
pub fn total(items: &[CategoryItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}

/// Coerce a raw field value to a number, yielding 0 when it does not parse
pub fn safe_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Share of `part` in `total` as a 0..=100 value; a zero total yields 0
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (part / total) * 100.0
}

/// Which of the two cross-tab columns drives the axis
///
/// Passed explicitly into the chart builders so both orientations are pure
/// functions of (dataset, grouping) and a page can hold several independent
/// chart instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// First column on the axis, second as the series
    #[default]
    Primary,
    /// Second column on the axis, first as the series
    Swapped,
}

impl Grouping {
    /// The other orientation, for a "switch grouping" control
    pub fn toggled(self) -> Self {
        match self {
            Grouping::Primary => Grouping::Swapped,
            Grouping::Swapped => Grouping::Primary,
        }
    }
}

/// One cross-tab series: a name and one value per axis label
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Two-dimensional aggregation of one column against another
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab {
    pub labels: Vec<String>,
    pub series: Vec<CrossSeries>,
}

/// Build a cross-tabulation of `axis_col` against `series_col`
///
/// Distinct values keep first-seen order; `sort_series` orders the series
/// names lexicographically instead. Each cell is resolved by a linear scan
/// matching both columns, which is fine at the dataset sizes involved (a few
/// dozen rows). When `axis_default` is set, empty axis values take that label
/// and still match their cells.
pub fn cross_tab(
    dataset: &Dataset,
    axis_col: &str,
    series_col: &str,
    value_col: &str,
    axis_default: Option<&str>,
    sort_series: bool,
) -> CrossTab {
    let axis_label = |raw: &str| -> String {
        match axis_default {
            Some(default) if raw.is_empty() => default.to_string(),
            _ => raw.to_string(),
        }
    };

    let labels: IndexSet<String> = dataset
        .records()
        .iter()
        .map(|record| axis_label(record.text(axis_col)))
        .collect();

    let names: IndexSet<String> = dataset
        .records()
        .iter()
        .map(|record| record.text(series_col).to_string())
        .collect();
    let mut names: Vec<String> = names.into_iter().collect();
    if sort_series {
        names.sort();
    }

    let series = names
        .into_iter()
        .map(|name| {
            let values = labels
                .iter()
                .map(|label| {
                    dataset
                        .records()
                        .iter()
                        .find(|record| {
                            axis_label(record.text(axis_col)) == *label
                                && record.text(series_col) == name
                        })
                        .map(|record| record.number(value_col))
                        .unwrap_or(0.0)
                })
                .collect();
            CrossSeries { name, values }
        })
        .collect();

    CrossTab {
        labels: labels.into_iter().collect(),
        series,
    }
}
