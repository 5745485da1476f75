// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative entrance animation.
//!
//! The chart does not run animations. It describes them as a [`Timeline`] of tracks that a
//! host can play back with its own animation system, or sample with [`Timeline::sample`] and
//! feed the resulting [`AnimationFrame`] back into the chart.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{CubicBez, ParamCurve};
use serde::{Deserialize, Serialize};

use crate::layout::ChartLayout;

/// Timing function of a track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
        }
    }
}

/// Solves a CSS cubic-bezier timing function at `t` by bisecting on the x component.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let curve = CubicBez::new((0.0, 0.0), (x1, y1), (x2, y2), (1.0, 1.0));
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..40 {
        let mid = 0.5 * (lo + hi);
        if curve.eval(mid).x < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve.eval(0.5 * (lo + hi)).y
}

/// The animated property a track drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationTarget {
    /// Opacity of axis end caps, tick marks and value labels.
    AxisOpacity,
    /// The x where the x axis domain line ends.
    XAxisEnd,
    /// The y where both vertical domain lines start.
    YAxisTop,
    /// Opacity of line paths.
    LineOpacity,
    /// Dash offset of line paths, as a fraction of each path's length.
    LineDashOffset,
}

/// One animated property.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Animated property.
    pub target: AnimationTarget,
    /// Value before the track starts.
    pub from: f64,
    /// Value after the track ends.
    pub to: f64,
    /// Start delay in milliseconds.
    pub delay_ms: u32,
    /// Duration in milliseconds; `0` jumps to `to` at the end of the delay.
    pub duration_ms: u32,
    /// Timing function.
    pub easing: Easing,
}

impl Track {
    /// Value of this track at `t_ms` milliseconds after the timeline starts.
    pub fn value_at(&self, t_ms: f64) -> f64 {
        let start = f64::from(self.delay_ms);
        if t_ms < start {
            return self.from;
        }
        if self.duration_ms == 0 || t_ms >= f64::from(self.end_ms()) {
            return self.to;
        }
        let progress = (t_ms - start) / f64::from(self.duration_ms);
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Time at which the track reaches `to`.
    pub fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// A set of tracks started together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Tracks in declaration order.
    pub tracks: Vec<Track>,
}

impl Timeline {
    /// The chart entrance: axes fade in and grow, then lines fade in and draw themselves.
    ///
    /// With `animate` off, the axis tracks have no delay and no duration.
    pub fn entrance(layout: &ChartLayout, animate: bool) -> Self {
        let axis = |delay_ms: u32, duration_ms: u32| {
            if animate {
                (delay_ms, duration_ms)
            } else {
                (0, 0)
            }
        };
        let (d0, t0) = axis(0, 1500);
        let (d1, t1) = axis(500, 1000);
        Self {
            tracks: vec![
                Track {
                    target: AnimationTarget::AxisOpacity,
                    from: 0.0,
                    to: 1.0,
                    delay_ms: d0,
                    duration_ms: t0,
                    easing: Easing::Linear,
                },
                Track {
                    target: AnimationTarget::XAxisEnd,
                    from: layout.plot.x0,
                    to: layout.x_end(),
                    delay_ms: d1,
                    duration_ms: t1,
                    easing: Easing::Linear,
                },
                Track {
                    target: AnimationTarget::YAxisTop,
                    from: layout.baseline(),
                    to: layout.axis_top(),
                    delay_ms: d1,
                    duration_ms: t1,
                    easing: Easing::Linear,
                },
                Track {
                    target: AnimationTarget::LineOpacity,
                    from: 0.0,
                    to: 1.0,
                    delay_ms: 0,
                    duration_ms: 100,
                    easing: Easing::Ease,
                },
                Track {
                    target: AnimationTarget::LineDashOffset,
                    from: 1.0,
                    to: 0.0,
                    delay_ms: 1000,
                    duration_ms: 1500,
                    easing: Easing::Ease,
                },
            ],
        }
    }

    /// Time at which every track has finished.
    pub fn duration_ms(&self) -> u32 {
        self.tracks.iter().map(Track::end_ms).max().unwrap_or(0)
    }

    /// Returns `true` if every track has reached its final value at `t_ms`.
    pub fn is_finished(&self, t_ms: f64) -> bool {
        t_ms >= f64::from(self.duration_ms())
    }

    /// Evaluates every track at `t_ms`.
    ///
    /// Properties without a track keep their settled value for `layout`.
    pub fn sample(&self, layout: &ChartLayout, t_ms: f64) -> AnimationFrame {
        let mut frame = AnimationFrame::settled(layout);
        for track in &self.tracks {
            let v = track.value_at(t_ms);
            match track.target {
                AnimationTarget::AxisOpacity => frame.axis_opacity = v,
                AnimationTarget::XAxisEnd => frame.x_axis_end = v,
                AnimationTarget::YAxisTop => frame.y_axis_top = v,
                AnimationTarget::LineOpacity => frame.line_opacity = v,
                AnimationTarget::LineDashOffset => frame.dash_fraction = v,
            }
        }
        frame
    }
}

/// Values of all animated properties at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Opacity of axis end caps, tick marks and value labels.
    pub axis_opacity: f64,
    /// End x of the x axis domain line.
    pub x_axis_end: f64,
    /// Start y of the vertical domain lines.
    pub y_axis_top: f64,
    /// Opacity of line paths.
    pub line_opacity: f64,
    /// Dash offset of line paths as a fraction of their length; `1` hides the line.
    pub dash_fraction: f64,
}

impl AnimationFrame {
    /// The frame after the entrance has finished.
    pub fn settled(layout: &ChartLayout) -> Self {
        Self {
            axis_opacity: 1.0,
            x_axis_end: layout.x_end(),
            y_axis_top: layout.axis_top(),
            line_opacity: 1.0,
            dash_fraction: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ChartLayoutSpec, Margins, Size};

    fn layout() -> ChartLayout {
        ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size {
                width: 375.0,
                height: 400.0,
            },
            margins: Margins::default(),
            category_count: 4,
            tick_count: 6,
            scroll: false,
            marker_radius: 5.0,
        })
    }

    #[test]
    fn ease_matches_css_endpoints_and_midpoint() {
        assert_eq!(Easing::Ease.apply(0.0), 0.0);
        assert!((Easing::Ease.apply(1.0) - 1.0).abs() < 1e-9);
        // CSS `ease` at 50% time is about 80% progress.
        assert!((Easing::Ease.apply(0.5) - 0.8024).abs() < 1e-3);
    }

    #[test]
    fn entrance_starts_hidden_and_settles() {
        let layout = layout();
        let timeline = Timeline::entrance(&layout, true);
        let start = timeline.sample(&layout, 0.0);
        assert_eq!(start.axis_opacity, 0.0);
        assert_eq!(start.x_axis_end, layout.plot.x0);
        assert_eq!(start.y_axis_top, layout.baseline());
        assert_eq!(start.dash_fraction, 1.0);

        assert_eq!(timeline.duration_ms(), 2500);
        assert!(timeline.is_finished(2500.0));
        let end = timeline.sample(&layout, 2500.0);
        assert_eq!(end, AnimationFrame::settled(&layout));
    }

    #[test]
    fn axis_growth_waits_for_delay() {
        let layout = layout();
        let timeline = Timeline::entrance(&layout, true);
        let frame = timeline.sample(&layout, 1000.0);
        let mid_x = layout.plot.x0 + 0.5 * (layout.x_end() - layout.plot.x0);
        assert!((frame.x_axis_end - mid_x).abs() < 1e-9);
        assert_eq!(frame.dash_fraction, 1.0);
    }

    #[test]
    fn disabled_animation_only_draws_lines() {
        let layout = layout();
        let timeline = Timeline::entrance(&layout, false);
        let frame = timeline.sample(&layout, 0.0);
        assert_eq!(frame.axis_opacity, 1.0);
        assert_eq!(frame.x_axis_end, layout.x_end());
        assert_eq!(frame.y_axis_top, layout.axis_top());
        assert_eq!(frame.dash_fraction, 1.0);
    }
}
