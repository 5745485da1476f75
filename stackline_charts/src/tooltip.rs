// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip popup marks.
//!
//! The popup floats over the viewport (not the scrollable content): a rounded box inset
//! from the left and right edges with the selected values centered inside.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, RoundedRect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use stackline_core::{HitShape, Mark, MarkId, TextBaseline};

use crate::interaction::{HitArea, HitTarget, SelectedItem};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Popup styling.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipStyle {
    /// Distance from the left and right viewport edges.
    pub inset_x: f64,
    /// Distance from the top viewport edge.
    pub top: f64,
    /// Box height.
    pub height: f64,
    /// Corner radius.
    pub corner_radius: f64,
    /// Box fill.
    pub fill: Brush,
    /// Text fill.
    pub text_fill: Brush,
    /// Text size.
    pub font_size: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            inset_x: 80.0,
            top: 50.0,
            height: 80.0,
            corner_radius: 10.0,
            fill: Brush::Solid(Color::from_rgba8(0xcf, 0xcf, 0xcf, 0xff)),
            text_fill: Brush::Solid(css::BLACK),
            font_size: 20.0,
        }
    }
}

/// Builds the popup for a selection.
#[derive(Clone, Debug)]
pub struct TooltipSpec {
    /// Id base; the box uses `+0` and the text `+1`.
    pub id_base: u64,
    /// Styling.
    pub style: TooltipStyle,
}

impl TooltipSpec {
    /// Creates a spec with the default style.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            style: TooltipStyle::default(),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: TooltipStyle) -> Self {
        self.style = style;
        self
    }

    /// The popup box within `view`. Narrow views collapse it to zero width.
    pub fn rect(&self, view: Rect) -> Rect {
        let x0 = view.x0 + self.style.inset_x;
        let x1 = (view.x1 - self.style.inset_x).max(x0);
        let y0 = view.y0 + self.style.top;
        Rect::new(x0, y0, x1, y0 + self.style.height)
    }

    /// Generates the box and text marks.
    pub fn marks(&self, view: Rect, item: &SelectedItem) -> Vec<Mark> {
        let rect = self.rect(view);
        let radius = self.style.corner_radius.min(rect.width() / 2.0).max(0.0);
        let shape = RoundedRect::from_rect(rect, radius);
        vec![
            Mark::builder(MarkId::from_raw(self.id_base))
                .path(shape.to_path(0.1))
                .z_index(z_order::TOOLTIP)
                .fill(self.style.fill.clone())
                .build(),
            TextMarkSpec::new(MarkId::from_raw(self.id_base + 1), rect.center(), item.text())
                .with_font_size(self.style.font_size)
                .with_fill(self.style.text_fill.clone())
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::TOOLTIP_TEXT)
                .mark(),
        ]
    }

    /// The popup's hit area.
    pub fn hit_area(&self, view: Rect) -> HitArea {
        HitArea {
            id: MarkId::from_raw(self.id_base),
            z_index: z_order::TOOLTIP,
            shape: HitShape::Rect(self.rect(view)),
            target: HitTarget::Popup,
        }
    }
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;
    use stackline_core::MarkPayload;

    use super::*;

    #[test]
    fn popup_is_inset_and_centered() {
        let spec = TooltipSpec::new(0);
        let view = Rect::new(0.0, 0.0, 375.0, 400.0);
        assert_eq!(spec.rect(view), Rect::new(80.0, 50.0, 295.0, 130.0));
        let item = SelectedItem {
            label: "Feb".into(),
            values: SmallVec::from_slice(&[450.0]),
        };
        let marks = spec.marks(view, &item);
        let MarkPayload::Text(text) = &marks[1].payload else {
            panic!("expected a text mark");
        };
        assert_eq!(text.text, "450");
        assert_eq!(text.pos, spec.rect(view).center());
    }

    #[test]
    fn narrow_views_do_not_invert() {
        let spec = TooltipSpec::new(0);
        let view = Rect::new(0.0, 0.0, 100.0, 400.0);
        assert_eq!(spec.rect(view).width(), 0.0);
        let item = SelectedItem {
            label: "a".into(),
            values: SmallVec::new(),
        };
        assert_eq!(spec.marks(view, &item).len(), 2);
    }
}
