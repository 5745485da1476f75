// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-category input data.

extern crate alloc;

use alloc::string::String;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Values attached to one category (typically a month).
///
/// All numeric fields are optional. Absent, non-finite or negative values render as
/// zero-height bars or are skipped on lines; they never produce invalid geometry.
///
/// The serialized form accepts the field names `month`, `barValues`, `lineValue` and
/// `multiLineValues`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Category label drawn under the x axis.
    #[serde(alias = "month")]
    pub label: String,
    /// Bar segment values. One value is a simple bar; several are stacked or grouped
    /// depending on [`ChartKind`](crate::ChartKind).
    #[serde(default)]
    pub bar_values: SmallVec<[f64; 4]>,
    /// Value of the single line series.
    #[serde(default)]
    pub line_value: Option<f64>,
    /// One value per line series in multi-line mode.
    #[serde(default)]
    pub multi_line_values: SmallVec<[f64; 4]>,
}

impl DataPoint {
    /// Creates a point with a label and no values.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Appends one bar segment value.
    pub fn with_bar(mut self, value: f64) -> Self {
        self.bar_values.push(value);
        self
    }

    /// Replaces the bar segment values.
    pub fn with_bars(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.bar_values = values.into_iter().collect();
        self
    }

    /// Sets the single-line value.
    pub fn with_line(mut self, value: f64) -> Self {
        self.line_value = Some(value);
        self
    }

    /// Replaces the multi-line values.
    pub fn with_lines(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.multi_line_values = values.into_iter().collect();
        self
    }

    /// Number of bar segments.
    pub fn segment_count(&self) -> usize {
        self.bar_values.len()
    }

    /// Sanitized bar segment value (`0` when absent or invalid).
    pub fn bar(&self, segment: usize) -> f64 {
        self.bar_values
            .get(segment)
            .copied()
            .and_then(sanitize)
            .unwrap_or(0.0)
    }

    /// Sum of the sanitized bar segment values.
    pub fn bar_total(&self) -> f64 {
        (0..self.bar_values.len()).map(|j| self.bar(j)).sum()
    }

    /// Sanitized single-line value.
    pub fn line(&self) -> Option<f64> {
        self.line_value.and_then(sanitize)
    }

    /// Sanitized value of line series `series`.
    pub fn multi_line(&self, series: usize) -> Option<f64> {
        self.multi_line_values.get(series).copied().and_then(sanitize)
    }
}

/// Number of multi-line series: the longest `multi_line_values` row.
pub fn series_count(data: &[DataPoint]) -> usize {
    data.iter()
        .map(|p| p.multi_line_values.len())
        .max()
        .unwrap_or(0)
}

/// Maps non-finite values to `None` and clamps negatives to `0`.
fn sanitize(v: f64) -> Option<f64> {
    v.is_finite().then(|| v.max(0.0))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn invalid_values_are_sanitized() {
        let p = DataPoint::new("Jan")
            .with_bars([10.0, f64::NAN, -5.0])
            .with_line(f64::INFINITY)
            .with_lines([1.0, -2.0]);
        assert_eq!(p.bar(0), 10.0);
        assert_eq!(p.bar(1), 0.0);
        assert_eq!(p.bar(2), 0.0);
        assert_eq!(p.bar(7), 0.0);
        assert_eq!(p.bar_total(), 10.0);
        assert_eq!(p.line(), None);
        assert_eq!(p.multi_line(1), Some(0.0));
        assert_eq!(p.multi_line(2), None);
    }

    #[test]
    fn series_count_uses_longest_row() {
        let data = vec![
            DataPoint::new("a").with_lines([1.0]),
            DataPoint::new("b").with_lines([1.0, 2.0, 3.0]),
            DataPoint::new("c"),
        ];
        assert_eq!(series_count(&data), 3);
        assert_eq!(series_count(&[]), 0);
    }
}
