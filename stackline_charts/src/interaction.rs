// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap handling: hit areas, the tooltip state machine and press callbacks.
//!
//! The host owns touch dispatch. It maps a tap position to a [`HitTarget`] with
//! [`ChartMarks::hit_test`](crate::ChartMarks::hit_test) and passes the target to
//! [`ChartInteraction::tap`]. Depending on
//! [`ChartToggles::tooltip_popup`](crate::ChartToggles::tooltip_popup) the tap either
//! updates the tooltip state or is handed to the press callbacks; never both.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;
use stackline_core::{HitShape, MarkId};
use tracing::trace;

use crate::data::DataPoint;
use crate::format::format_value;
use crate::options::ChartOptions;

/// What a tap landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// A bar segment.
    Bar {
        /// Category index.
        category: usize,
        /// Segment index.
        segment: usize,
    },
    /// A marker of the single line.
    Line {
        /// Category index.
        category: usize,
    },
    /// A marker of a multi-line series.
    MultiLine {
        /// Series index.
        series: usize,
        /// Category index.
        category: usize,
    },
    /// The tooltip popup.
    Popup,
}

/// A tappable region tied to the mark it covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitArea {
    /// Id of the covered mark.
    pub id: MarkId,
    /// Render order of the covered mark.
    pub z_index: i32,
    /// Region geometry.
    pub shape: HitShape,
    /// Semantic target.
    pub target: HitTarget,
}

/// Returns the target of the topmost area containing `pt`.
///
/// Areas are ordered like marks, by `(z_index, id)`; the largest wins.
pub fn hit_test(areas: &[HitArea], pt: Point) -> Option<HitTarget> {
    areas
        .iter()
        .filter(|a| a.shape.contains(pt))
        .max_by_key(|a| (a.z_index, a.id))
        .map(|a| a.target)
}

/// The category and values shown by the tooltip popup.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedItem {
    /// Category label.
    pub label: String,
    /// All bar values of the category, or the single tapped line value.
    pub values: SmallVec<[f64; 4]>,
}

impl SelectedItem {
    /// Popup text: the values joined with `,`.
    pub fn text(&self) -> String {
        self.values
            .iter()
            .map(|v| format_value(*v, ""))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Tooltip popup state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    /// No popup.
    #[default]
    Idle,
    /// The popup shows an item.
    Selected(SelectedItem),
}

/// Payload of [`ChartOptions::on_bar_press`].
#[derive(Clone, Copy, Debug)]
pub struct BarPress<'a> {
    /// Category index.
    pub category: usize,
    /// Tapped segment.
    pub segment: usize,
    /// The category's data.
    pub point: &'a DataPoint,
}

/// Payload of [`ChartOptions::on_line_press`].
#[derive(Clone, Copy, Debug)]
pub struct LinePress<'a> {
    /// Category index.
    pub category: usize,
    /// Multi-line series, or `None` for the single line.
    pub series: Option<usize>,
    /// Tapped value.
    pub value: f64,
    /// The category's data.
    pub point: &'a DataPoint,
}

/// Result of [`ChartInteraction::tap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tooltip now shows the tapped item.
    Selected,
    /// The tooltip was closed.
    Dismissed,
    /// A press callback was invoked.
    Delegated,
    /// Nothing happened.
    Ignored,
}

/// Per-chart interaction state.
#[derive(Clone, Debug, Default)]
pub struct ChartInteraction {
    state: TooltipState,
}

impl ChartInteraction {
    /// Creates an idle interaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tooltip state.
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// The selected item, if the popup is open.
    pub fn selected(&self) -> Option<&SelectedItem> {
        match &self.state {
            TooltipState::Idle => None,
            TooltipState::Selected(item) => Some(item),
        }
    }

    /// Closes the popup. Returns `true` if it was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.selected().is_some();
        self.state = TooltipState::Idle;
        was_open
    }

    /// Handles a tap on `target`.
    ///
    /// With the popup enabled, series taps select (replacing any previous selection) and a
    /// popup tap dismisses. With the popup disabled, series taps call the matching callback
    /// and the state never changes.
    pub fn tap(
        &mut self,
        target: HitTarget,
        data: &[DataPoint],
        options: &ChartOptions,
    ) -> TapOutcome {
        trace!(?target, "tap");
        let popup = options.toggles.tooltip_popup;
        match target {
            HitTarget::Popup => {
                if self.dismiss() {
                    TapOutcome::Dismissed
                } else {
                    TapOutcome::Ignored
                }
            }
            HitTarget::Bar { category, segment } => {
                let Some(point) = data.get(category) else {
                    return TapOutcome::Ignored;
                };
                if popup {
                    let values = (0..point.segment_count()).map(|j| point.bar(j)).collect();
                    self.select(point, values)
                } else if let Some(f) = &options.on_bar_press {
                    f(&BarPress {
                        category,
                        segment,
                        point,
                    });
                    TapOutcome::Delegated
                } else {
                    TapOutcome::Ignored
                }
            }
            HitTarget::Line { category } => {
                self.line_tap(data.get(category), category, None, options, popup)
            }
            HitTarget::MultiLine { series, category } => {
                self.line_tap(data.get(category), category, Some(series), options, popup)
            }
        }
    }

    fn line_tap(
        &mut self,
        point: Option<&DataPoint>,
        category: usize,
        series: Option<usize>,
        options: &ChartOptions,
        popup: bool,
    ) -> TapOutcome {
        let Some(point) = point else {
            return TapOutcome::Ignored;
        };
        let value = match series {
            None => point.line(),
            Some(s) => point.multi_line(s),
        };
        let Some(value) = value else {
            return TapOutcome::Ignored;
        };
        if popup {
            self.select(point, SmallVec::from_slice(&[value]))
        } else if let Some(f) = &options.on_line_press {
            f(&LinePress {
                category,
                series,
                value,
                point,
            });
            TapOutcome::Delegated
        } else {
            TapOutcome::Ignored
        }
    }

    fn select(&mut self, point: &DataPoint, values: SmallVec<[f64; 4]>) -> TapOutcome {
        self.state = TooltipState::Selected(SelectedItem {
            label: point.label.clone(),
            values,
        });
        TapOutcome::Selected
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Circle, Rect};

    use super::*;

    fn area(id: u64, z_index: i32, shape: HitShape, target: HitTarget) -> HitArea {
        HitArea {
            id: MarkId(id),
            z_index,
            shape,
            target,
        }
    }

    #[test]
    fn topmost_area_wins() {
        let bar = HitTarget::Bar {
            category: 0,
            segment: 0,
        };
        let marker = HitTarget::Line { category: 0 };
        let areas = [
            area(1, 0, HitShape::Rect(Rect::new(0.0, 0.0, 20.0, 20.0)), bar),
            area(2, 20, HitShape::Circle(Circle::new((10.0, 10.0), 5.0)), marker),
        ];
        assert_eq!(hit_test(&areas, Point::new(10.0, 10.0)), Some(marker));
        assert_eq!(hit_test(&areas, Point::new(1.0, 1.0)), Some(bar));
        assert_eq!(hit_test(&areas, Point::new(30.0, 1.0)), None);
    }

    #[test]
    fn retapping_replaces_selection() {
        let data = vec![
            DataPoint::new("Jan").with_bar(150.0).with_line(3.0),
            DataPoint::new("Feb").with_bar(450.0),
        ];
        let options = ChartOptions::default();
        let mut ix = ChartInteraction::new();
        ix.tap(
            HitTarget::Bar {
                category: 0,
                segment: 0,
            },
            &data,
            &options,
        );
        assert_eq!(ix.selected().map(|s| s.label.as_str()), Some("Jan"));
        ix.tap(HitTarget::Line { category: 0 }, &data, &options);
        assert_eq!(ix.selected().map(SelectedItem::text).as_deref(), Some("3"));
    }

    #[test]
    fn missing_line_value_is_ignored() {
        let data = vec![DataPoint::new("Jan").with_bar(1.0)];
        let mut ix = ChartInteraction::new();
        let outcome = ix.tap(HitTarget::Line { category: 0 }, &data, &ChartOptions::default());
        assert_eq!(outcome, TapOutcome::Ignored);
        assert_eq!(ix.state(), &TooltipState::Idle);
    }

    #[test]
    fn popup_tap_when_idle_is_ignored() {
        let mut ix = ChartInteraction::new();
        let outcome = ix.tap(HitTarget::Popup, &[], &ChartOptions::default());
        assert_eq!(outcome, TapOutcome::Ignored);
    }

    #[test]
    fn multiple_values_join_with_commas() {
        let item = SelectedItem {
            label: "Jan".into(),
            values: SmallVec::from_slice(&[1.0, 2.5, 3.0]),
        };
        assert_eq!(item.text(), "1,2.5,3");
    }
}
