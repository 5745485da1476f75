// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)`; hit testing walks the same order backwards.

/// Chart background fill.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (bars).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines).
pub const SERIES_STROKE: i32 = 10;
/// Line markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Axis domain lines, end caps and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Per-bar value labels and their leader rules.
pub const VALUE_LABELS: i32 = 45;

/// Background of the pinned axis overlay in scroll mode.
pub const PINNED_BACKGROUND: i32 = 25;
/// Tooltip popup box.
pub const TOOLTIP: i32 = 90;
/// Tooltip popup text.
pub const TOOLTIP_TEXT: i32 = 91;
