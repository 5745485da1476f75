// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis scales.
//!
//! Both vertical axes start at zero. The data maximum sits one tick below the top of the
//! axis, which leaves a step of headroom above the tallest bar or line point.

extern crate alloc;

use alloc::vec::Vec;

use crate::data::{DataPoint, series_count};
use crate::options::ChartKind;

/// Default number of ticks per vertical axis.
pub const DEFAULT_TICK_COUNT: usize = 6;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 || !denom.is_finite() {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// A zero-based value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    max_value: f64,
    tick_count: usize,
}

impl AxisScale {
    /// Creates a scale for a data maximum. Non-finite or negative maxima become `0`.
    pub fn new(max_value: f64, tick_count: usize) -> Self {
        let max_value = if max_value.is_finite() {
            max_value.max(0.0)
        } else {
            0.0
        };
        Self {
            max_value,
            tick_count,
        }
    }

    /// Creates a scale covering the largest of `values`.
    pub fn from_values(values: impl IntoIterator<Item = f64>, tick_count: usize) -> Self {
        let max = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        Self::new(max, tick_count)
    }

    /// The data maximum this scale was built for.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Number of ticks.
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Value distance between consecutive ticks.
    pub fn step(&self) -> f64 {
        let intervals = self.tick_count.saturating_sub(2).max(1);
        self.max_value / intervals as f64
    }

    /// Tick values, starting at zero.
    pub fn ticks(&self) -> Vec<f64> {
        let step = self.step();
        (0..self.tick_count).map(|k| k as f64 * step).collect()
    }

    /// Value at the top tick (`0` without ticks).
    pub fn axis_max(&self) -> f64 {
        self.tick_count.saturating_sub(1) as f64 * self.step()
    }

    /// Returns `true` if the axis has ticks.
    pub fn has_ticks(&self) -> bool {
        self.tick_count > 0
    }

    /// Maps values onto `range`, `(baseline_y, top_y)` in scene coordinates.
    pub fn linear(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new((0.0, self.axis_max()), range)
    }
}

/// Evenly spaced category positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryScale {
    /// Position of the primary axis.
    pub origin: f64,
    /// Distance between neighbouring categories.
    pub gap: f64,
    /// Number of categories.
    pub count: usize,
}

impl CategoryScale {
    /// Center x of category `index`; category 0 sits one gap right of the origin.
    pub fn x(&self, index: usize) -> f64 {
        self.origin + self.gap * (index + 1) as f64
    }
}

/// Primary (left) and secondary (right) scales for a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    /// Scale for bars, or for lines when no bars are drawn.
    pub primary: AxisScale,
    /// Scale for the line series.
    pub secondary: AxisScale,
    /// Number of multi-line series in the data.
    pub series_count: usize,
}

impl ChartScales {
    /// Computes both scales.
    pub fn compute(kind: ChartKind, data: &[DataPoint], tick_count: usize) -> Self {
        Self {
            primary: AxisScale::new(primary_max(kind, data), tick_count),
            secondary: AxisScale::new(secondary_max(kind, data), tick_count),
            series_count: series_count(data),
        }
    }
}

/// Data maximum of the primary axis for `kind`.
pub fn primary_max(kind: ChartKind, data: &[DataPoint]) -> f64 {
    match kind {
        ChartKind::Line => max_of(data.iter().filter_map(DataPoint::line)),
        ChartKind::MultiLine => max_of(multi_line_values(data)),
        ChartKind::Bar => max_of(
            data.iter()
                .flat_map(|p| (0..p.segment_count()).map(move |j| p.bar(j))),
        ),
        ChartKind::StackedBar | ChartKind::All => max_of(data.iter().map(DataPoint::bar_total)),
    }
}

/// Data maximum of the secondary axis for `kind`.
pub fn secondary_max(kind: ChartKind, data: &[DataPoint]) -> f64 {
    if kind.draws_multi_line(series_count(data)) {
        max_of(multi_line_values(data))
    } else {
        max_of(data.iter().filter_map(DataPoint::line))
    }
}

fn multi_line_values(data: &[DataPoint]) -> impl Iterator<Item = f64> + '_ {
    data.iter()
        .flat_map(|p| (0..p.multi_line_values.len()).filter_map(move |s| p.multi_line(s)))
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn two_month_example_has_headroom() {
        let data = vec![
            DataPoint::new("Jan").with_bar(150.0),
            DataPoint::new("Feb").with_bar(450.0),
        ];
        let scales = ChartScales::compute(ChartKind::StackedBar, &data, 6);
        assert_eq!(scales.primary.step(), 112.5);
        assert_eq!(
            scales.primary.ticks(),
            vec![0.0, 112.5, 225.0, 337.5, 450.0, 562.5]
        );
        assert_eq!(scales.primary.axis_max(), 562.5);
    }

    #[test]
    fn degenerate_tick_counts() {
        assert!(AxisScale::new(10.0, 0).ticks().is_empty());
        assert_eq!(AxisScale::new(10.0, 1).ticks(), vec![0.0]);
        assert_eq!(AxisScale::new(10.0, 2).ticks(), vec![0.0, 10.0]);
    }

    #[test]
    fn zero_max_maps_to_baseline() {
        let scale = AxisScale::new(0.0, 6);
        assert!(scale.ticks().iter().all(|t| *t == 0.0));
        assert_eq!(scale.linear((350.0, 20.0)).map(0.0), 350.0);
    }

    #[test]
    fn linear_maps_axis_max_to_top() {
        let scale = AxisScale::new(400.0, 6).linear((350.0, 20.0));
        assert_eq!(scale.map(0.0), 350.0);
        assert_eq!(scale.map(500.0), 20.0);
    }

    #[test]
    fn primary_max_depends_on_kind() {
        let data = vec![
            DataPoint::new("a").with_bars([10.0, 30.0]).with_line(7.0),
            DataPoint::new("b").with_bars([25.0, 5.0]).with_lines([90.0, 3.0]),
        ];
        assert_eq!(primary_max(ChartKind::Bar, &data), 30.0);
        assert_eq!(primary_max(ChartKind::StackedBar, &data), 40.0);
        assert_eq!(primary_max(ChartKind::All, &data), 40.0);
        assert_eq!(primary_max(ChartKind::Line, &data), 7.0);
        assert_eq!(primary_max(ChartKind::MultiLine, &data), 90.0);
    }

    #[test]
    fn secondary_max_prefers_multi_lines_when_drawn() {
        let with_series = vec![DataPoint::new("a").with_line(7.0).with_lines([12.0])];
        assert_eq!(secondary_max(ChartKind::All, &with_series), 12.0);
        assert_eq!(secondary_max(ChartKind::Line, &with_series), 7.0);
        let without = vec![DataPoint::new("a").with_line(7.0)];
        assert_eq!(secondary_max(ChartKind::All, &without), 7.0);
    }

    #[test]
    fn categories_start_one_gap_in() {
        let cats = CategoryScale {
            origin: 50.0,
            gap: 40.0,
            count: 3,
        };
        assert_eq!(cats.x(0), 90.0);
        assert_eq!(cats.x(2), 170.0);
    }
}
