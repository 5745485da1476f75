// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use stackline_core::{Mark, MarkId, TextAnchor, TextBaseline};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Group opacity.
    pub opacity: f64,
    /// Rendering order hint (`stackline_core::Mark::z_index`).
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec, centered horizontally on `pos`.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 10.0,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::default(),
            opacity: 1.0,
            z_index: crate::z_order::AXIS_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the group opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .text(self.pos, self.text.clone())
            .z_index(self.z_index)
            .opacity(self.opacity)
            .font_size(self.font_size)
            .fill(self.fill.clone())
            .anchor(self.anchor)
            .baseline(self.baseline)
            .build()
    }
}
