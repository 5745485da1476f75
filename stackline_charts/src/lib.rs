// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A combo chart component: bars, stacked bars, a line and multi-line series over shared
//! axes, generated as `stackline_core` marks.
//!
//! The crate is a pure function from data and options to marks:
//! - **Scales** derive zero-based axis maxima and ticks from the data.
//! - **Layout** places axes, ticks and categories from the container size alone.
//! - **Shape generators** turn both into rect, path and text marks.
//! - **Interaction** resolves taps to targets and runs the tooltip state machine.
//! - **Animation** describes the entrance as a serializable timeline.
//!
//! Rendering, touch dispatch and animation playback belong to the host.
//!
//! ```
//! use stackline_charts::{ChartInteraction, ChartKind, ChartOptions, ComboChartSpec, DataPoint};
//!
//! let data = vec![
//!     DataPoint::new("Jan").with_bar(150.0).with_line(12.0),
//!     DataPoint::new("Feb").with_bar(450.0).with_line(30.0),
//! ];
//! let chart = ComboChartSpec::new(ChartOptions::default().with_kind(ChartKind::All), data)
//!     .expect("default options are valid");
//! assert_eq!(chart.scales().primary.step(), 112.5);
//!
//! let marks = chart.marks(&ChartInteraction::new());
//! assert!(!marks.content.is_empty());
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod animation;
mod axis;
mod bar_mark;
mod chart_spec;
mod data;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interaction;
mod layout;
mod line_mark;
mod options;
mod point_mark;
mod rule_mark;
mod scale;
mod stacked_bar_mark;
mod text_mark;
mod tooltip;
mod z_order;

pub use animation::{AnimationFrame, AnimationTarget, Easing, Timeline, Track};
pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle};
pub use bar_mark::{BarMarkSpec, BarSegment, ValueLabelSpec, ValueLabelStyle};
pub use chart_spec::{ChartMarks, ComboChartSpec};
pub use data::{DataPoint, series_count};
pub use error::{ChartError, ChartResult};
pub use format::format_value;
pub use interaction::{
    BarPress, ChartInteraction, HitArea, HitTarget, LinePress, SelectedItem, TapOutcome,
    TooltipState, hit_test,
};
pub use layout::{ChartLayout, ChartLayoutSpec, Margins, SCROLL_GAP, Size};
pub use line_mark::LineMarkSpec;
pub use options::{
    BarPressHandler, ChartKind, ChartOptions, ChartToggles, LinePressHandler, MarkerStyle,
    default_bar_fills,
};
pub use point_mark::PointMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{
    AxisScale, CategoryScale, ChartScales, DEFAULT_TICK_COUNT, ScaleLinear, primary_max,
    secondary_max,
};
pub use stacked_bar_mark::StackedBarMarkSpec;
pub use text_mark::TextMarkSpec;
pub use tooltip::{TooltipSpec, TooltipStyle};
pub use z_order::*;
