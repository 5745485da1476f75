// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel layout of the chart frame.
//!
//! Layout depends only on the container size, margins, category count, tick count, scroll
//! mode and marker radius. It never reads data values, so a layout can be reused across
//! data updates of the same shape.

use kurbo::{Point, Rect};

use crate::scale::CategoryScale;

/// Category spacing used in scroll mode.
pub const SCROLL_GAP: f64 = 40.0;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

/// Space reserved around the plot for axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Left margin (primary tick labels).
    pub left: f64,
    /// Right margin (secondary tick labels).
    pub right: f64,
    /// Bottom margin (category labels).
    pub bottom: f64,
    /// Screen padding; also the top margin.
    pub padding: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 50.0,
            right: 30.0,
            bottom: 50.0,
            padding: 20.0,
        }
    }
}

/// Layout inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayoutSpec {
    /// Container (viewport) size.
    pub view_size: Size,
    /// Margins around the plot.
    pub margins: Margins,
    /// Number of categories.
    pub category_count: usize,
    /// Ticks per vertical axis.
    pub tick_count: usize,
    /// Fixed-gap scrollable layout.
    pub scroll: bool,
    /// Line marker radius; pads the scrollable content and the pinned axis.
    pub marker_radius: f64,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// The container bounds.
    pub view: Rect,
    /// Bounds of the drawable content; wider than `view` in scroll mode.
    pub content: Rect,
    /// The plot: `x0` is the primary axis, `x1` the secondary axis (x axis end), `y0` the
    /// axis top and `y1` the baseline.
    pub plot: Rect,
    /// Category x positions.
    pub categories: CategoryScale,
    /// Ticks per vertical axis.
    pub tick_count: usize,
    /// Vertical distance between neighbouring ticks.
    pub tick_spacing: f64,
    /// The pinned primary-axis overlay in scroll mode.
    pub pinned_axis: Option<Rect>,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    ///
    /// Degenerate containers clamp the plot to zero width or height.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let w = finite_non_negative(spec.view_size.width);
        let h = finite_non_negative(spec.view_size.height);
        let m = spec.margins;
        let radius = finite_non_negative(spec.marker_radius);
        let n = spec.category_count;

        let top = m.padding;
        let baseline = (h - m.bottom).max(top);

        let (gap, x_end, content_w) = if spec.scroll {
            let x_end = m.left + SCROLL_GAP + SCROLL_GAP * n as f64;
            (SCROLL_GAP, x_end, x_end + radius + SCROLL_GAP)
        } else {
            let available = (w - m.left - m.right - m.padding).max(0.0);
            let gap = available / (n + 1) as f64;
            let x_end = (w - m.padding - m.right).max(m.left);
            (gap, x_end, w)
        };

        let intervals = spec.tick_count.saturating_sub(1);
        let tick_spacing = if intervals == 0 {
            0.0
        } else {
            (baseline - top) / intervals as f64
        };

        Self {
            view: Rect::new(0.0, 0.0, w, h),
            content: Rect::new(0.0, 0.0, content_w, h),
            plot: Rect::new(m.left, top, x_end, baseline),
            categories: CategoryScale {
                origin: m.left,
                gap,
                count: n,
            },
            tick_count: spec.tick_count,
            tick_spacing,
            pinned_axis: spec
                .scroll
                .then(|| Rect::new(0.0, 0.0, m.left + radius, h)),
        }
    }

    /// The y of the x axis.
    pub fn baseline(&self) -> f64 {
        self.plot.y1
    }

    /// The y of the top of both vertical axes.
    pub fn axis_top(&self) -> f64 {
        self.plot.y0
    }

    /// The x where the x axis (and the secondary axis) ends.
    pub fn x_end(&self) -> f64 {
        self.plot.x1
    }

    /// Center x of category `index`.
    pub fn category_x(&self, index: usize) -> f64 {
        self.categories.x(index)
    }

    /// The y of tick `index`, counted from the baseline.
    pub fn tick_y(&self, index: usize) -> f64 {
        self.baseline() - index as f64 * self.tick_spacing
    }

    /// `(baseline, top)`; the range of both value scales.
    pub fn value_range(&self) -> (f64, f64) {
        (self.baseline(), self.axis_top())
    }

    /// The x axis origin.
    pub fn origin(&self) -> Point {
        Point::new(self.plot.x0, self.baseline())
    }

    /// Returns `true` if the primary axis is drawn in a separate, non-scrolling overlay.
    pub fn is_scrollable(&self) -> bool {
        self.pinned_axis.is_some()
    }
}

fn finite_non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: f64, height: f64, n: usize, scroll: bool) -> ChartLayoutSpec {
        ChartLayoutSpec {
            view_size: Size { width, height },
            margins: Margins::default(),
            category_count: n,
            tick_count: 6,
            scroll,
            marker_radius: 5.0,
        }
    }

    #[test]
    fn fit_mode_spreads_categories() {
        let layout = ChartLayout::arrange(&spec(375.0, 400.0, 4, false));
        assert_eq!(layout.plot, Rect::new(50.0, 20.0, 325.0, 350.0));
        assert_eq!(layout.categories.gap, 55.0);
        assert_eq!(layout.category_x(0), 105.0);
        assert_eq!(layout.tick_spacing, 66.0);
        assert_eq!(layout.tick_y(5), 20.0);
        assert_eq!(layout.content, layout.view);
        assert!(layout.pinned_axis.is_none());
    }

    #[test]
    fn scroll_mode_uses_fixed_gap() {
        let layout = ChartLayout::arrange(&spec(375.0, 400.0, 12, true));
        assert_eq!(layout.categories.gap, SCROLL_GAP);
        assert_eq!(layout.x_end(), 50.0 + 40.0 + 480.0);
        assert_eq!(layout.content.width(), 570.0 + 5.0 + 40.0);
        assert_eq!(layout.pinned_axis, Some(Rect::new(0.0, 0.0, 55.0, 400.0)));
    }

    #[test]
    fn tiny_containers_do_not_invert() {
        let layout = ChartLayout::arrange(&spec(10.0, 10.0, 3, false));
        assert!(layout.plot.width() >= 0.0);
        assert!(layout.plot.height() >= 0.0);
        assert!(layout.tick_spacing.is_finite());
        assert!(layout.categories.gap >= 0.0);
    }

    #[test]
    fn single_tick_has_no_spacing() {
        let mut s = spec(375.0, 400.0, 3, false);
        s.tick_count = 1;
        let layout = ChartLayout::arrange(&s);
        assert_eq!(layout.tick_spacing, 0.0);
        assert_eq!(layout.tick_y(0), layout.baseline());
    }
}
