// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Shape};
use stackline_core::{Dash, Mark, MarkId};

use crate::animation::AnimationFrame;
use crate::axis::StrokeStyle;
use crate::layout::ChartLayout;
use crate::scale::ScaleLinear;

/// Accuracy used when measuring path length for the reveal dash.
const LENGTH_ACCURACY: f64 = 1e-3;

/// A polyline through one value per category.
///
/// This generates a single [`stackline_core::MarkKind::Path`] mark. Categories without a
/// value are skipped and the line joins their neighbours.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable id for the mark emitted by this spec.
    pub id: MarkId,
    /// Maps values to y.
    pub y_scale: ScaleLinear,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Rendering order hint (`stackline_core::Mark::z_index`).
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark spec with a black stroke at width 1.
    pub fn new(id: MarkId, y_scale: ScaleLinear) -> Self {
        Self {
            id,
            y_scale,
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Vertices as `(category, point)`, skipping categories without a value.
    pub fn points(&self, layout: &ChartLayout, values: &[Option<f64>]) -> Vec<(usize, Point)> {
        values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| {
                v.map(|v| (i, Point::new(layout.category_x(i), self.y_scale.map(v))))
            })
            .collect()
    }

    /// Builds the path: a move to the first vertex, then straight segments.
    pub fn path(&self, layout: &ChartLayout, values: &[Option<f64>]) -> BezPath {
        let mut p = BezPath::new();
        for (n, (_, pt)) in self.points(layout, values).into_iter().enumerate() {
            if n == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }

    /// Generates the line for one animation frame.
    ///
    /// The dash length is the path length; the dash offset is `frame.dash_fraction` of it.
    /// Returns no marks when no category has a value.
    pub fn marks(
        &self,
        layout: &ChartLayout,
        values: &[Option<f64>],
        frame: &AnimationFrame,
    ) -> Vec<Mark> {
        let path = self.path(layout, values);
        if path.elements().is_empty() {
            return Vec::new();
        }
        let length = path.perimeter(LENGTH_ACCURACY);
        let line = Mark::builder(self.id)
            .path(path)
            .z_index(self.z_index)
            .opacity(frame.line_opacity)
            .stroke(self.stroke.brush.clone(), self.stroke.stroke_width)
            .dash(Dash {
                length,
                offset: length * frame.dash_fraction,
            })
            .build();
        alloc::vec![line]
    }
}
