// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle markers on line vertices.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Shape};
use peniko::Brush;
use stackline_core::{HitShape, Mark, MarkId};

use crate::interaction::{HitArea, HitTarget};
use crate::layout::ChartLayout;
use crate::line_mark::LineMarkSpec;

/// One filled circle per line vertex.
///
/// Every marker is tappable. Markers of the single line resolve to [`HitTarget::Line`];
/// markers of a multi-line series resolve to [`HitTarget::MultiLine`].
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Id layer; markers use `MarkId::compose(layer, series, category)`.
    pub layer: u16,
    /// Multi-line series index, or `None` for the single line.
    pub series: Option<usize>,
    /// Circle radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint (`stackline_core::Mark::z_index`).
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates markers of radius 5 for the single line.
    pub fn new(layer: u16) -> Self {
        Self {
            layer,
            series: None,
            radius: 5.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Attributes the markers to a multi-line series.
    pub fn with_series(mut self, series: usize) -> Self {
        self.series = Some(series);
        self
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    fn circles(
        &self,
        line: &LineMarkSpec,
        layout: &ChartLayout,
        values: &[Option<f64>],
    ) -> Vec<(usize, Circle)> {
        line.points(layout, values)
            .into_iter()
            .map(|(i, pt)| (i, Circle::new(pt, self.radius)))
            .collect()
    }

    fn id(&self, category: usize) -> MarkId {
        MarkId::compose(self.layer, self.series.unwrap_or(0), category)
    }

    /// Generates one marker per vertex of `line`.
    pub fn marks(
        &self,
        line: &LineMarkSpec,
        layout: &ChartLayout,
        values: &[Option<f64>],
    ) -> Vec<Mark> {
        self.circles(line, layout, values)
            .into_iter()
            .map(|(i, c)| {
                Mark::builder(self.id(i))
                    .path(c.to_path(0.1))
                    .z_index(self.z_index)
                    .fill(self.fill.clone())
                    .build()
            })
            .collect()
    }

    /// Generates one circular hit area per vertex of `line`.
    pub fn hit_areas(
        &self,
        line: &LineMarkSpec,
        layout: &ChartLayout,
        values: &[Option<f64>],
    ) -> Vec<HitArea> {
        self.circles(line, layout, values)
            .into_iter()
            .map(|(category, c)| HitArea {
                id: self.id(category),
                z_index: self.z_index,
                shape: HitShape::Circle(c),
                target: match self.series {
                    None => HitTarget::Line { category },
                    Some(series) => HitTarget::MultiLine { series, category },
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::*;
    use crate::layout::{ChartLayoutSpec, Margins, Size};
    use crate::scale::AxisScale;

    #[test]
    fn markers_follow_line_vertices() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size {
                width: 375.0,
                height: 400.0,
            },
            margins: Margins::default(),
            category_count: 3,
            tick_count: 6,
            scroll: false,
            marker_radius: 5.0,
        });
        let scale = AxisScale::new(8.0, 6).linear(layout.value_range());
        let line = LineMarkSpec::new(MarkId(1), scale);
        let values = [Some(2.0), None, Some(8.0)];
        let points = PointMarkSpec::new(3).with_series(1);
        assert_eq!(points.marks(&line, &layout, &values).len(), 2);

        let hits = points.hit_areas(&line, &layout, &values);
        assert_eq!(
            hits[1].target,
            HitTarget::MultiLine {
                series: 1,
                category: 2
            }
        );
        let center = Point::new(layout.category_x(2), scale.map(8.0));
        assert!(hits[1].shape.contains(center + Vec2::new(3.0, 3.0)));
        assert!(!hits[1].shape.contains(center + Vec2::new(4.0, 4.0)));
    }
}
