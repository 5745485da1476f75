// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped bar mark generation and per-bar value labels.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use stackline_core::{HitShape, Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::data::DataPoint;
use crate::format::format_value;
use crate::interaction::{HitArea, HitTarget};
use crate::layout::ChartLayout;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::ScaleLinear;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// One drawn bar rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSegment {
    /// Category index.
    pub category: usize,
    /// Segment index within the category.
    pub segment: usize,
    /// Geometry; `y1` is the bottom edge.
    pub rect: Rect,
    /// Sanitized value.
    pub value: f64,
}

/// Bars drawn side by side within each category.
///
/// The whole group is `bar_width` wide and centered on the category, so a category with a
/// single value draws one full-width bar.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Id layer; marks use `MarkId::compose(layer, category, segment)`.
    pub layer: u16,
    /// Maps values to y.
    pub y_scale: ScaleLinear,
    /// Width of a category's bar group.
    pub bar_width: f64,
    /// Fill per segment index, cycled.
    pub fills: Vec<Brush>,
    /// Rendering order hint (`stackline_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a spec with 30px groups and a default fill.
    pub fn new(layer: u16, y_scale: ScaleLinear) -> Self {
        Self {
            layer,
            y_scale,
            bar_width: 30.0,
            fills: Vec::new(),
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the group width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the per-segment fill palette.
    pub fn with_fills(mut self, fills: Vec<Brush>) -> Self {
        self.fills = fills;
        self
    }

    /// Computes bar geometry.
    pub fn segments(&self, layout: &ChartLayout, data: &[DataPoint]) -> Vec<BarSegment> {
        let baseline = layout.baseline();
        let mut out = Vec::new();
        for (category, point) in data.iter().enumerate() {
            let count = point.segment_count();
            if count == 0 {
                continue;
            }
            let w = self.bar_width / count as f64;
            let x0 = layout.category_x(category) - self.bar_width / 2.0;
            for segment in 0..count {
                let value = point.bar(segment);
                let left = x0 + w * segment as f64;
                let top = self.y_scale.map(value).min(baseline);
                out.push(BarSegment {
                    category,
                    segment,
                    rect: Rect::new(left, top, left + w, baseline),
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

pub(crate) fn bar_marks(
    layer: u16,
    z_index: i32,
    fills: &[Brush],
    segments: &[BarSegment],
) -> Vec<Mark> {
    segments
        .iter()
        .map(|s| {
            let fill = if fills.is_empty() {
                Brush::default()
            } else {
                fills[s.segment % fills.len()].clone()
            };
            Mark::builder(MarkId::compose(layer, s.category, s.segment))
                .rect(s.rect)
                .z_index(z_index)
                .fill(fill)
                .build()
        })
        .collect()
}

pub(crate) fn bar_hit_areas(layer: u16, z_index: i32, segments: &[BarSegment]) -> Vec<HitArea> {
    segments
        .iter()
        .map(|s| HitArea {
            id: MarkId::compose(layer, s.category, s.segment),
            z_index,
            shape: HitShape::Rect(s.rect),
            target: HitTarget::Bar {
                category: s.category,
                segment: s.segment,
            },
        })
        .collect()
}

/// Value label styling.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabelStyle {
    /// Leader rule stroke.
    pub rule: StrokeStyle,
    /// Text fill.
    pub text_fill: Brush,
    /// Text size.
    pub font_size: f64,
    /// Leader rule length.
    pub rule_length: f64,
}

impl Default for ValueLabelStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::solid(css::WHITE, 2.0),
            text_fill: Brush::Solid(css::WHITE),
            font_size: 10.0,
            rule_length: 10.0,
        }
    }
}

/// A short leader rule plus the value above each bar segment.
///
/// Labels sit on the top edge of a bar. In a stack of several segments each label sits on
/// its segment's lower edge instead, so labels of adjacent segments do not collide.
#[derive(Clone, Debug)]
pub struct ValueLabelSpec {
    /// Id layer; rules use minor ids `2 * segment`, texts `2 * segment + 1`.
    pub layer: u16,
    /// Styling.
    pub style: ValueLabelStyle,
    /// Whether segments are stacked.
    pub stacked: bool,
}

impl ValueLabelSpec {
    /// Creates a spec with the default style.
    pub fn new(layer: u16, stacked: bool) -> Self {
        Self {
            layer,
            style: ValueLabelStyle::default(),
            stacked,
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: ValueLabelStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates labels for `segments`, faded by `opacity`.
    pub fn marks(&self, data: &[DataPoint], segments: &[BarSegment], opacity: f64) -> Vec<Mark> {
        let mut out = Vec::with_capacity(segments.len() * 2);
        for s in segments {
            let in_stack = self.stacked
                && data
                    .get(s.category)
                    .is_some_and(|p| p.segment_count() > 1);
            let anchor = if in_stack { s.rect.y1 } else { s.rect.y0 };
            let x = s.rect.center().x;
            let tip = anchor - self.style.rule_length;
            out.push(
                RuleMarkSpec::vertical(
                    MarkId::compose(self.layer, s.category, 2 * s.segment),
                    x,
                    anchor,
                    tip,
                )
                .with_style(&self.style.rule)
                .with_opacity(opacity)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::compose(self.layer, s.category, 2 * s.segment + 1),
                    Point::new(x, tip - 2.0),
                    format_value(s.value, ""),
                )
                .with_font_size(self.style.font_size)
                .with_fill(self.style.text_fill.clone())
                .with_opacity(opacity)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
        }
        out
    }
}
