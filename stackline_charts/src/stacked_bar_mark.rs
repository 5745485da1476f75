// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use stackline_core::Mark;

use crate::bar_mark::{BarSegment, bar_hit_areas, bar_marks};
use crate::data::DataPoint;
use crate::interaction::HitArea;
use crate::layout::ChartLayout;
use crate::scale::ScaleLinear;
use crate::z_order;

/// One bar per category with its segments stacked bottom to top.
///
/// Segment `j` spans from the sum of segments `0..j` to the sum of segments `0..=j`, so the
/// stack height is the sum of the segment heights.
#[derive(Clone, Debug)]
pub struct StackedBarMarkSpec {
    /// Id layer; marks use `MarkId::compose(layer, category, segment)`.
    pub layer: u16,
    /// Maps values to y.
    pub y_scale: ScaleLinear,
    /// Bar width.
    pub bar_width: f64,
    /// Fill per segment index, cycled.
    pub fills: Vec<Brush>,
    /// Rendering order hint (`stackline_core::Mark::z_index`).
    pub z_index: i32,
}

impl StackedBarMarkSpec {
    /// Creates a spec with 30px bars and a default fill.
    pub fn new(layer: u16, y_scale: ScaleLinear) -> Self {
        Self {
            layer,
            y_scale,
            bar_width: 30.0,
            fills: Vec::new(),
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the bar width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the per-segment fill palette.
    pub fn with_fills(mut self, fills: Vec<Brush>) -> Self {
        self.fills = fills;
        self
    }

    /// Computes segment geometry.
    pub fn segments(&self, layout: &ChartLayout, data: &[DataPoint]) -> Vec<BarSegment> {
        let baseline = layout.baseline();
        let mut out = Vec::new();
        for (category, point) in data.iter().enumerate() {
            let x0 = layout.category_x(category) - self.bar_width / 2.0;
            let x1 = x0 + self.bar_width;
            let mut below = 0.0;
            for segment in 0..point.segment_count() {
                let value = point.bar(segment);
                let bottom = self.y_scale.map(below).min(baseline);
                let top = self.y_scale.map(below + value).min(bottom);
                below += value;
                out.push(BarSegment {
                    category,
                    segment,
                    rect: Rect::new(x0, top, x1, bottom),
                    value,
                });
            }
        }
        out
    }

    /// Generates one rect mark per segment.
    pub fn marks(&self, layout: &ChartLayout, data: &[DataPoint]) -> Vec<Mark> {
        bar_marks(
            self.layer,
            self.z_index,
            &self.fills,
            &self.segments(layout, data),
        )
    }

    /// Generates one hit area per segment.
    pub fn hit_areas(&self, layout: &ChartLayout, data: &[DataPoint]) -> Vec<HitArea> {
        bar_hit_areas(self.layer, self.z_index, &self.segments(layout, data))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::bar_mark::ValueLabelSpec;
    use crate::layout::{ChartLayoutSpec, Margins, Size};
    use crate::scale::AxisScale;

    fn layout() -> ChartLayout {
        ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size {
                width: 375.0,
                height: 400.0,
            },
            margins: Margins::default(),
            category_count: 2,
            tick_count: 6,
            scroll: false,
            marker_radius: 5.0,
        })
    }

    #[test]
    fn segments_are_contiguous() {
        let layout = layout();
        let data = vec![
            DataPoint::new("a").with_bars([10.0, 20.0, 30.0]),
            DataPoint::new("b").with_bars([5.0]),
        ];
        let scale = AxisScale::new(60.0, 6).linear(layout.value_range());
        let segments = StackedBarMarkSpec::new(1, scale).segments(&layout, &data);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].rect.y1, layout.baseline());
        assert_eq!(segments[0].rect.y0, segments[1].rect.y1);
        assert_eq!(segments[1].rect.y0, segments[2].rect.y1);
        let total: f64 = segments[..3].iter().map(|s| s.rect.height()).sum();
        let expected = layout.baseline() - scale.map(60.0);
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn stacked_labels_sit_on_segment_bottoms() {
        let layout = layout();
        let data = vec![DataPoint::new("a").with_bars([10.0, 20.0])];
        let scale = AxisScale::new(30.0, 6).linear(layout.value_range());
        let segments = StackedBarMarkSpec::new(1, scale).segments(&layout, &data);
        let marks = ValueLabelSpec::new(2, true).marks(&data, &segments, 1.0);
        let rule_bottom = marks[2].bounds().map(|b| b.y1);
        assert_eq!(rule_bottom, Some(segments[1].rect.y1));
    }
}
