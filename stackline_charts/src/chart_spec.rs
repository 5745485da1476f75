// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition.
//!
//! [`ComboChartSpec`] owns the options and data of one chart and wires the pieces together:
//! scales, layout, axes, gridlines, bars, lines, markers, value labels and the tooltip popup.
//! The output is split into scrollable content and a fixed overlay so hosts can implement
//! scroll mode without knowing which marks are pinned.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use stackline_core::{HitShape, Mark, MarkId};
use tracing::{debug, trace, warn};

use crate::animation::{AnimationFrame, Timeline};
use crate::axis::{AxisOrient, AxisSpec, StrokeStyle};
use crate::bar_mark::{BarMarkSpec, BarSegment, ValueLabelSpec};
use crate::data::DataPoint;
use crate::error::ChartResult;
use crate::interaction::{ChartInteraction, HitArea, HitTarget, hit_test};
use crate::layout::{ChartLayout, ChartLayoutSpec, Margins};
use crate::line_mark::LineMarkSpec;
use crate::options::ChartOptions;
use crate::point_mark::PointMarkSpec;
use crate::scale::{ChartScales, ScaleLinear};
use crate::stacked_bar_mark::StackedBarMarkSpec;
use crate::tooltip::TooltipSpec;
use crate::z_order;

// Id layers, the top 16 bits of every mark id.
const LAYER_BACKGROUND: u16 = 1;
const LAYER_AXIS_X: u16 = 2;
const LAYER_AXIS_Y: u16 = 3;
const LAYER_AXIS_Y2: u16 = 4;
const LAYER_BARS: u16 = 5;
const LAYER_VALUE_LABELS: u16 = 6;
const LAYER_LINE: u16 = 7;
const LAYER_LINE_POINTS: u16 = 8;
const LAYER_MULTI_LINE: u16 = 9;
const LAYER_MULTI_LINE_POINTS: u16 = 10;
const LAYER_PINNED: u16 = 11;
const LAYER_TOOLTIP: u16 = 12;

fn id_base(layer: u16) -> u64 {
    MarkId::compose(layer, 0, 0).0
}

/// A bar, stacked-bar, line and multi-line chart over shared axes.
#[derive(Clone, Debug, Default)]
pub struct ComboChartSpec {
    /// Configuration.
    pub options: ChartOptions,
    /// One entry per category, in display order.
    pub data: Vec<DataPoint>,
}

impl ComboChartSpec {
    /// Creates a chart after validating `options`.
    pub fn new(options: ChartOptions, data: Vec<DataPoint>) -> ChartResult<Self> {
        options.validate()?;
        Ok(Self::new_unchecked(options, data))
    }

    /// Creates a chart without validating `options`.
    ///
    /// Rendering still never fails; degenerate options produce degenerate geometry.
    pub fn new_unchecked(options: ChartOptions, data: Vec<DataPoint>) -> Self {
        Self { options, data }
    }

    /// Axis scales for the current data.
    pub fn scales(&self) -> ChartScales {
        ChartScales::compute(self.options.kind, &self.data, self.options.tick_count)
    }

    /// Pixel layout for the current options and category count.
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::arrange(&ChartLayoutSpec {
            view_size: self.options.size,
            margins: Margins::default(),
            category_count: self.data.len(),
            tick_count: self.options.tick_count,
            scroll: self.options.toggles.scroll,
            marker_radius: self.options.marker.radius,
        })
    }

    /// The entrance animation.
    pub fn timeline(&self) -> Timeline {
        Timeline::entrance(&self.layout(), self.options.toggles.animate)
    }

    /// Marks in their final, settled state.
    pub fn marks(&self, interaction: &ChartInteraction) -> ChartMarks {
        let layout = self.layout();
        self.marks_at(interaction, &AnimationFrame::settled(&layout))
    }

    /// Marks for one animation frame.
    pub fn marks_at(&self, interaction: &ChartInteraction, frame: &AnimationFrame) -> ChartMarks {
        let options = &self.options;
        let toggles = options.toggles;
        let data = self.data.as_slice();
        let layout = self.layout();
        let scales = self.scales();

        debug!(
            kind = ?options.kind,
            categories = data.len(),
            series = scales.series_count,
            tick_count = options.tick_count,
            scroll = toggles.scroll,
            primary_max = scales.primary.max_value(),
            secondary_max = scales.secondary.max_value(),
            "building chart marks"
        );
        if data.is_empty() {
            warn!("chart has no data; only axes are drawn");
        }
        if options.tick_count < 2 {
            warn!(tick_count = options.tick_count, "tick count below 2");
        }
        if scales.series_count > 0
            && data
                .iter()
                .any(|p| p.multi_line_values.len() != scales.series_count)
        {
            warn!(
                series = scales.series_count,
                "ragged multi-line rows; missing values are skipped"
            );
        }

        let mut out = ChartMarks {
            layout,
            content: Vec::new(),
            overlay: Vec::new(),
            hits: Vec::new(),
            overlay_hits: Vec::new(),
        };

        out.content.push(
            Mark::builder(MarkId::compose(LAYER_BACKGROUND, 0, 0))
                .rect(layout.content)
                .z_index(z_order::PLOT_BACKGROUND)
                .fill(options.background.clone())
                .build(),
        );

        let primary = scales.primary.linear(layout.value_range());
        let secondary = scales.secondary.linear(layout.value_range());
        let has_ticks = scales.primary.has_ticks();

        // Guides.
        let labels = data.iter().map(|p| p.label.as_str());
        let mut x_axis = AxisSpec::bottom(id_base(LAYER_AXIS_X), labels)
            .with_ticks(toggles.axis_ticks)
            .with_style(options.axis.clone());
        if toggles.grid_x {
            x_axis = x_axis.with_grid(options.grid.clone());
            out.content.extend(x_axis.grid_marks(&layout));
        }
        out.content.extend(x_axis.marks(&layout, frame));

        if has_ticks {
            let mut y_axis = AxisSpec::value(
                id_base(LAYER_AXIS_Y),
                AxisOrient::Left,
                &scales.primary,
                &options.primary_suffix,
            )
            .with_ticks(toggles.axis_ticks)
            .with_style(options.axis.clone());
            if toggles.grid_y {
                y_axis = y_axis.with_grid(options.grid.clone());
                out.content.extend(y_axis.grid_marks(&layout));
            }
            match layout.pinned_axis {
                Some(pinned) => {
                    out.overlay.push(
                        Mark::builder(MarkId::compose(LAYER_PINNED, 0, 0))
                            .rect(pinned)
                            .z_index(z_order::PINNED_BACKGROUND)
                            .fill(options.background.clone())
                            .build(),
                    );
                    out.overlay.extend(y_axis.marks(&layout, frame));
                }
                None => out.content.extend(y_axis.marks(&layout, frame)),
            }

            if toggles.secondary_axis {
                let y2_axis = AxisSpec::value(
                    id_base(LAYER_AXIS_Y2),
                    AxisOrient::Right,
                    &scales.secondary,
                    &options.secondary_suffix,
                )
                .with_ticks(toggles.axis_ticks)
                .with_style(options.axis.clone());
                out.content.extend(y2_axis.marks(&layout, frame));
            }
        }

        // Series.
        if options.kind.draws_bars() {
            let segments = self.draw_bars(&mut out, primary);
            trace!(segments = segments.len(), "bars");
            if toggles.value_labels {
                let labels = ValueLabelSpec::new(LAYER_VALUE_LABELS, options.kind.stacks_bars())
                    .with_style(options.value_labels.clone());
                out.content
                    .extend(labels.marks(data, &segments, frame.axis_opacity));
            }
        }

        if scales.secondary.has_ticks() {
            if options.kind.draws_line(scales.series_count) {
                let values: Vec<Option<f64>> = data.iter().map(DataPoint::line).collect();
                let line = LineMarkSpec::new(MarkId::compose(LAYER_LINE, 0, 0), secondary)
                    .with_stroke(options.line.clone());
                let points = PointMarkSpec::new(LAYER_LINE_POINTS)
                    .with_radius(options.marker.radius)
                    .with_fill(options.marker.fill.clone());
                out.content.extend(line.marks(&layout, &values, frame));
                out.content.extend(points.marks(&line, &layout, &values));
                out.hits.extend(points.hit_areas(&line, &layout, &values));
            }
            if options.kind.draws_multi_line(scales.series_count) {
                for series in 0..scales.series_count {
                    let values: Vec<Option<f64>> =
                        data.iter().map(|p| p.multi_line(series)).collect();
                    trace!(
                        series,
                        points = values.iter().flatten().count(),
                        "multi-line series"
                    );
                    let line = LineMarkSpec::new(
                        MarkId::compose(LAYER_MULTI_LINE, series, 0),
                        secondary,
                    )
                    .with_stroke(StrokeStyle {
                        brush: options.line_color(series),
                        stroke_width: options.line.stroke_width,
                    });
                    let points = PointMarkSpec::new(LAYER_MULTI_LINE_POINTS)
                        .with_series(series)
                        .with_radius(options.marker.radius)
                        .with_fill(options.marker_fill(series));
                    out.content.extend(line.marks(&layout, &values, frame));
                    out.content.extend(points.marks(&line, &layout, &values));
                    out.hits.extend(points.hit_areas(&line, &layout, &values));
                }
            }
        }

        // Tooltip.
        if toggles.tooltip_popup
            && let Some(item) = interaction.selected()
        {
            let tooltip =
                TooltipSpec::new(id_base(LAYER_TOOLTIP)).with_style(options.tooltip.clone());
            out.overlay.extend(tooltip.marks(layout.view, item));
            out.overlay_hits.push(tooltip.hit_area(layout.view));
        }

        sort_marks(&mut out.content);
        sort_marks(&mut out.overlay);
        out
    }

    /// Adds bar marks and hit areas to `out` and returns the segments for value labels.
    fn draw_bars(&self, out: &mut ChartMarks, y_scale: ScaleLinear) -> Vec<BarSegment> {
        let layout = out.layout;
        let data = self.data.as_slice();
        let fills = self.options.bar_fills.clone();
        let (segments, marks, hits) = if self.options.kind.stacks_bars() {
            let spec = StackedBarMarkSpec::new(LAYER_BARS, y_scale)
                .with_bar_width(self.options.bar_width)
                .with_fills(fills);
            (
                spec.segments(&layout, data),
                spec.marks(&layout, data),
                spec.hit_areas(&layout, data),
            )
        } else {
            let spec = BarMarkSpec::new(LAYER_BARS, y_scale)
                .with_bar_width(self.options.bar_width)
                .with_fills(fills);
            (
                spec.segments(&layout, data),
                spec.marks(&layout, data),
                spec.hit_areas(&layout, data),
            )
        };
        out.content.extend(marks);
        out.hits.extend(hits);
        segments
    }
}

fn sort_marks(marks: &mut [Mark]) {
    marks.sort_by_key(|m| (m.z_index, m.id));
}

/// Output of one render pass.
#[derive(Clone, Debug)]
pub struct ChartMarks {
    /// The layout the marks were built for.
    pub layout: ChartLayout,
    /// Marks in content coordinates, in render order. In scroll mode the content is wider
    /// than the viewport and scrolls horizontally.
    pub content: Vec<Mark>,
    /// Marks in viewport coordinates drawn above the content: the pinned primary axis in
    /// scroll mode and the tooltip popup.
    pub overlay: Vec<Mark>,
    /// Tappable regions in content coordinates.
    pub hits: Vec<HitArea>,
    /// Tappable regions in viewport coordinates.
    pub overlay_hits: Vec<HitArea>,
}

impl ChartMarks {
    /// Resolves a tap at `pos` (viewport coordinates) with the content scrolled by `scroll_x`.
    ///
    /// Overlay regions are tested first. The pinned axis strip of scroll mode covers the
    /// content beneath it, so taps on it resolve to nothing.
    pub fn hit_test(&self, pos: Point, scroll_x: f64) -> Option<HitTarget> {
        if let Some(target) = hit_test(&self.overlay_hits, pos) {
            return Some(target);
        }
        if self
            .layout
            .pinned_axis
            .is_some_and(|strip| HitShape::Rect(strip).contains(pos))
        {
            return None;
        }
        hit_test(&self.hits, Point::new(pos.x + scroll_x, pos.y))
    }

    /// All marks, content first, each group in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.content.iter().chain(self.overlay.iter())
    }

    /// Consumes the output and returns every mark, content first.
    pub fn into_marks(self) -> Vec<Mark> {
        let mut all = self.content;
        all.extend(self.overlay);
        all
    }

    /// Bounds of the scrollable content.
    pub fn content_bounds(&self) -> Rect {
        self.layout.content
    }
}
