// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and gridline mark generation.
//!
//! One [`AxisSpec`] type covers the three axes of a combo chart, selected by
//! [`AxisOrient`]. Each axis draws round end caps, a domain line whose length follows the
//! entrance animation, optional tick marks and unshaped tick labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use stackline_core::{Mark, MarkId, TextAnchor};

use crate::animation::AnimationFrame;
use crate::format::format_value;
use crate::layout::ChartLayout;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::AxisScale;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks, gridlines, series lines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the domain line, tick marks and end caps.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Radius of the round end caps.
    pub cap_radius: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::solid(Color::from_rgba8(0x99, 0xcc, 0xcc, 0xff), 2.0),
            label_fill: Brush::Solid(css::WHITE),
            label_font_size: 10.0,
            cap_radius: 5.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(Color::from_rgba8(0xed, 0xed, 0xed, 0xff), 1.0),
        }
    }
}

/// Axis placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// The category axis along the baseline.
    Bottom,
    /// The primary value axis.
    Left,
    /// The secondary value axis at the end of the x axis.
    Right,
}

/// An axis specification.
///
/// Mark ids are offsets from `id_base`: the domain line at `+0`, end caps at `+1` and `+2`,
/// tick marks from `+100`, labels from `+1000` and gridlines from `+5000`.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Axis placement.
    pub orient: AxisOrient,
    /// One label per tick: category labels for the bottom axis, formatted tick values
    /// otherwise.
    pub labels: Vec<String>,
    /// Tick line length.
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Gap between the tick end and the label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional gridlines spanning the plot.
    pub grid: Option<GridStyle>,
}

impl AxisSpec {
    /// Creates an axis with 10px ticks and a 5px label gap.
    pub fn new(id_base: u64, orient: AxisOrient, labels: Vec<String>) -> Self {
        Self {
            id_base,
            orient,
            labels,
            tick_size: 10.0,
            ticks: true,
            tick_padding: 5.0,
            style: AxisStyle::default(),
            grid: None,
        }
    }

    /// Creates the category axis.
    pub fn bottom<'a>(id_base: u64, labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            id_base,
            AxisOrient::Bottom,
            labels.into_iter().map(String::from).collect(),
        )
    }

    /// Creates a value axis labelled with the ticks of `scale`.
    pub fn value(id_base: u64, orient: AxisOrient, scale: &AxisScale, suffix: &str) -> Self {
        let labels = scale
            .ticks()
            .into_iter()
            .map(|t| format_value(t, suffix))
            .collect();
        Self::new(id_base, orient, labels)
    }

    /// Enables or disables tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables gridlines.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Generates the domain line, caps, ticks and labels for one animation frame.
    pub fn marks(&self, layout: &ChartLayout, frame: &AnimationFrame) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(layout, frame),
            AxisOrient::Left => self.marks_vertical(layout, frame, layout.plot.x0, -1.0),
            AxisOrient::Right => self.marks_vertical(layout, frame, layout.x_end(), 1.0),
        }
    }

    /// Generates gridlines, if enabled.
    ///
    /// A bottom axis draws one vertical line per category slot plus one; a value axis draws
    /// one horizontal line per tick.
    pub fn grid_marks(&self, layout: &ChartLayout) -> Vec<Mark> {
        let Some(grid) = &self.grid else {
            return Vec::new();
        };
        let base = self.id_base + 5_000;
        let top = layout.axis_top();
        let baseline = layout.baseline();
        match self.orient {
            AxisOrient::Bottom => (0..=layout.categories.count)
                .map(|i| {
                    let x = layout.category_x(i);
                    RuleMarkSpec::vertical(MarkId::from_raw(base + i as u64), x, baseline, top)
                        .with_style(&grid.stroke)
                        .with_z_index(z_order::GRID_LINES)
                        .mark()
                })
                .collect(),
            AxisOrient::Left | AxisOrient::Right => (0..self.labels.len())
                .map(|i| {
                    let y = layout.tick_y(i);
                    RuleMarkSpec::horizontal(
                        MarkId::from_raw(base + i as u64),
                        y,
                        layout.plot.x0,
                        layout.x_end(),
                    )
                    .with_style(&grid.stroke)
                    .with_z_index(z_order::GRID_LINES)
                    .mark()
                })
                .collect(),
        }
    }

    fn marks_bottom(&self, layout: &ChartLayout, frame: &AnimationFrame) -> Vec<Mark> {
        let mut out = Vec::new();
        let baseline = layout.baseline();
        let rule = &self.style.rule;

        out.push(self.cap(1, Point::new(layout.x_end(), baseline), frame));
        out.push(
            RuleMarkSpec::horizontal(
                MarkId::from_raw(self.id_base),
                baseline,
                layout.plot.x0,
                frame.x_axis_end,
            )
            .with_style(rule)
            .mark(),
        );

        for (i, label) in self.labels.iter().enumerate() {
            let x = layout.category_x(i);
            if self.ticks {
                out.push(
                    RuleMarkSpec::vertical(
                        MarkId::from_raw(self.id_base + 100 + i as u64),
                        x,
                        baseline,
                        baseline + self.tick_size,
                    )
                    .with_style(rule)
                    .with_opacity(frame.axis_opacity)
                    .mark(),
                );
            }
            let y = baseline + self.tick_size + self.style.label_font_size;
            out.push(self.label(i, Point::new(x, y), label, TextAnchor::Middle));
        }
        out
    }

    /// `side` is `-1` for ticks pointing left and `1` for ticks pointing right.
    fn marks_vertical(
        &self,
        layout: &ChartLayout,
        frame: &AnimationFrame,
        x: f64,
        side: f64,
    ) -> Vec<Mark> {
        let mut out = Vec::new();
        let baseline = layout.baseline();
        let rule = &self.style.rule;
        let font_size = self.style.label_font_size;

        out.push(self.cap(1, Point::new(x, layout.axis_top()), frame));
        out.push(self.cap(2, Point::new(x, baseline), frame));
        out.push(
            RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), x, frame.y_axis_top, baseline)
                .with_style(rule)
                .mark(),
        );

        let anchor = if side < 0.0 {
            TextAnchor::End
        } else {
            TextAnchor::Start
        };
        for (i, label) in self.labels.iter().enumerate() {
            let y = layout.tick_y(i);
            if self.ticks {
                out.push(
                    RuleMarkSpec::horizontal(
                        MarkId::from_raw(self.id_base + 100 + i as u64),
                        y,
                        x,
                        x + side * self.tick_size,
                    )
                    .with_style(rule)
                    .with_opacity(frame.axis_opacity)
                    .mark(),
                );
            }
            let lx = x + side * (self.tick_size + self.tick_padding);
            out.push(self.label(i, Point::new(lx, y + font_size / 3.0), label, anchor));
        }
        out
    }

    fn cap(&self, offset: u64, center: Point, frame: &AnimationFrame) -> Mark {
        let circle = Circle::new(center, self.style.cap_radius);
        Mark::builder(MarkId::from_raw(self.id_base + offset))
            .path(circle.to_path(0.1))
            .z_index(z_order::AXIS_RULES)
            .opacity(frame.axis_opacity)
            .fill(self.style.rule.brush.clone())
            .build()
    }

    fn label(&self, index: usize, pos: Point, text: &str, anchor: TextAnchor) -> Mark {
        TextMarkSpec::new(MarkId::from_raw(self.id_base + 1000 + index as u64), pos, text)
            .with_font_size(self.style.label_font_size)
            .with_fill(self.style.label_fill.clone())
            .with_anchor(anchor)
            .mark()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use stackline_core::{MarkKind, MarkPayload};

    use super::*;
    use crate::layout::{ChartLayoutSpec, Margins, Size};

    fn layout(n: usize) -> ChartLayout {
        ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size {
                width: 375.0,
                height: 400.0,
            },
            margins: Margins::default(),
            category_count: n,
            tick_count: 6,
            scroll: false,
            marker_radius: 5.0,
        })
    }

    fn texts(marks: &[Mark]) -> Vec<&str> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn value_axis_labels_carry_suffix() {
        let layout = layout(2);
        let axis = AxisSpec::value(0, AxisOrient::Left, &AxisScale::new(450.0, 6), "k");
        let marks = axis.marks(&layout, &AnimationFrame::settled(&layout));
        assert_eq!(
            texts(&marks),
            vec!["0k", "112.5k", "225k", "337.5k", "450k", "562.5k"]
        );
        // 2 caps + domain + 6 ticks + 6 labels
        assert_eq!(marks.len(), 15);
    }

    #[test]
    fn ticks_can_be_hidden() {
        let layout = layout(3);
        let axis = AxisSpec::bottom(0, ["a", "b", "c"]).with_ticks(false);
        let marks = axis.marks(&layout, &AnimationFrame::settled(&layout));
        // 1 cap + domain + 3 labels
        assert_eq!(marks.len(), 5);
    }

    #[test]
    fn domain_follows_frame() {
        let layout = layout(3);
        let mut frame = AnimationFrame::settled(&layout);
        frame.x_axis_end = layout.plot.x0;
        let axis = AxisSpec::bottom(0, ["a", "b", "c"]);
        let marks = axis.marks(&layout, &frame);
        let domain = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(0))
            .and_then(Mark::bounds);
        let domain = domain.unwrap();
        assert_eq!(domain.width(), 0.0);
    }

    #[test]
    fn grid_counts() {
        let layout = layout(4);
        let x = AxisSpec::bottom(0, ["a", "b", "c", "d"]).with_grid(GridStyle::default());
        assert_eq!(x.grid_marks(&layout).len(), 5);
        let y = AxisSpec::value(0, AxisOrient::Left, &AxisScale::new(10.0, 6), "")
            .with_grid(GridStyle::default());
        let grid = y.grid_marks(&layout);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|m| m.kind() == MarkKind::Path));
        assert!(AxisSpec::bottom(0, ["a"]).grid_marks(&layout).is_empty());
    }
}
