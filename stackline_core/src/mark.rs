// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: the drawable output of a chart.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity for a mark across render passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Composes an id from a layer tag and two indices.
    ///
    /// The layer occupies the top 16 bits and each index 24 bits; larger indices wrap.
    pub fn compose(layer: u16, major: usize, minor: usize) -> Self {
        const MASK: u64 = 0x00FF_FFFF;
        let major = (major as u64) & MASK;
        let minor = (minor as u64) & MASK;
        Self((u64::from(layer) << 48) | (major << 24) | minor)
    }
}

/// The kind of a mark, derived from its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Filled axis-aligned rectangle.
    Rect,
    /// Filled and/or stroked path.
    Path,
    /// Unshaped text run.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is the start of the run.
    #[default]
    Start,
    /// The anchor point is the middle of the run.
    Middle,
    /// The anchor point is the end of the run.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor y is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor y is the vertical middle of the run.
    Middle,
    /// The anchor y is the hanging baseline (top).
    Hanging,
}

/// A dash pattern of a single dash and a single gap of equal length.
///
/// Renderers draw `stroke-dasharray: length` and `stroke-dashoffset: offset`. With `length`
/// equal to the path perimeter, animating `offset` from `length` to `0` reveals the path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    /// Dash (and gap) length.
    pub length: f64,
    /// Dash offset.
    pub offset: f64,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint (transparent for open polylines).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
    /// Optional dash pattern.
    pub dash: Option<Dash>,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A path.
    Path(PathPayload),
    /// A text run.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, ignoring stroke width.
    ///
    /// Text has no bounds here since it is unshaped.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A single drawable mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Render order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder { id }
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns geometric bounds if the payload has any.
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

/// Entry point of the mark builders; picks the payload kind.
#[derive(Clone, Copy, Debug)]
pub struct MarkBuilder {
    id: MarkId,
}

impl MarkBuilder {
    /// Builds a rectangle mark.
    pub fn rect(self, rect: Rect) -> RectBuilder {
        RectBuilder {
            id: self.id,
            z_index: 0,
            opacity: 1.0,
            payload: RectPayload {
                rect,
                fill: Brush::default(),
            },
        }
    }

    /// Builds a path mark. Defaults to a transparent fill and no stroke.
    pub fn path(self, path: BezPath) -> PathBuilder {
        PathBuilder {
            id: self.id,
            z_index: 0,
            opacity: 1.0,
            payload: PathPayload {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: Brush::default(),
                stroke_width: 0.0,
                dash: None,
            },
        }
    }

    /// Builds a text mark.
    pub fn text(self, pos: Point, text: impl Into<String>) -> TextBuilder {
        TextBuilder {
            id: self.id,
            z_index: 0,
            opacity: 1.0,
            payload: TextPayload {
                pos,
                text: text.into(),
                font_size: 12.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                angle: 0.0,
                fill: Brush::default(),
            },
        }
    }
}

/// Builder for rectangle marks.
#[derive(Clone, Debug)]
pub struct RectBuilder {
    id: MarkId,
    z_index: i32,
    opacity: f64,
    payload: RectPayload,
}

impl RectBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the group opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            opacity: self.opacity,
            payload: MarkPayload::Rect(self.payload),
        }
    }
}

/// Builder for path marks.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    id: MarkId,
    z_index: i32,
    opacity: f64,
    payload: PathPayload,
}

impl PathBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the group opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Sets stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.payload.stroke = stroke.into();
        self.payload.stroke_width = stroke_width;
        self
    }

    /// Sets a dash pattern.
    pub fn dash(mut self, dash: Dash) -> Self {
        self.payload.dash = Some(dash);
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            opacity: self.opacity,
            payload: MarkPayload::Path(self.payload),
        }
    }
}

/// Builder for text marks.
#[derive(Clone, Debug)]
pub struct TextBuilder {
    id: MarkId,
    z_index: i32,
    opacity: f64,
    payload: TextPayload,
}

impl TextBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the group opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.payload.font_size = font_size;
        self
    }

    /// Sets the horizontal anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.payload.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.payload.baseline = baseline;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.payload.angle = angle;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            opacity: self.opacity,
            payload: MarkPayload::Text(self.payload),
        }
    }
}
