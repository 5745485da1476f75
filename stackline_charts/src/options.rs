// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time chart configuration.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};
use serde::{Deserialize, Serialize};

use crate::axis::{AxisStyle, GridStyle, StrokeStyle};
use crate::bar_mark::ValueLabelStyle;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{BarPress, LinePress};
use crate::layout::Size;
use crate::scale::DEFAULT_TICK_COUNT;
use crate::tooltip::TooltipStyle;

/// Which series a chart draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Bars only; multiple segment values are drawn side by side.
    #[serde(alias = "barchart")]
    Bar,
    /// Bars only; multiple segment values are stacked.
    StackedBar,
    /// A single line series on the secondary scale.
    #[serde(alias = "linechart")]
    Line,
    /// One line per `multi_line_values` column.
    #[serde(alias = "multilinechart")]
    MultiLine,
    /// Stacked bars plus the line (or multi-line) overlay.
    #[default]
    All,
}

impl ChartKind {
    /// Whether bars are drawn.
    pub fn draws_bars(self) -> bool {
        matches!(self, Self::Bar | Self::StackedBar | Self::All)
    }

    /// Whether bar segments stack (as opposed to sitting side by side).
    pub fn stacks_bars(self) -> bool {
        matches!(self, Self::StackedBar | Self::All)
    }

    /// Whether the single line is drawn, given the number of multi-line series in the data.
    pub fn draws_line(self, series_count: usize) -> bool {
        match self {
            Self::Line => true,
            Self::All => series_count == 0,
            _ => false,
        }
    }

    /// Whether multi-line series are drawn, given their count.
    pub fn draws_multi_line(self, series_count: usize) -> bool {
        series_count > 0 && matches!(self, Self::MultiLine | Self::All)
    }
}

/// Boolean switches. Serializable so hosts can persist or ship them as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartToggles {
    /// Vertical gridlines at category positions.
    pub grid_x: bool,
    /// Horizontal gridlines at primary ticks.
    pub grid_y: bool,
    /// Tick marks on all axes.
    pub axis_ticks: bool,
    /// Per-bar value labels.
    pub value_labels: bool,
    /// Taps open the internal tooltip popup instead of calling the press callbacks.
    pub tooltip_popup: bool,
    /// Fixed category spacing with horizontally scrollable content and a pinned primary axis.
    pub scroll: bool,
    /// Draw the secondary (right) axis.
    pub secondary_axis: bool,
    /// Line markers always use the marker color instead of the series color.
    pub marker_color_priority: bool,
    /// Run the axis entrance animation (line reveal always runs).
    pub animate: bool,
}

impl Default for ChartToggles {
    fn default() -> Self {
        Self {
            grid_x: false,
            grid_y: false,
            axis_ticks: true,
            value_labels: true,
            tooltip_popup: true,
            scroll: false,
            secondary_axis: true,
            marker_color_priority: false,
            animate: true,
        }
    }
}

/// Line marker styling.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Circle radius.
    pub radius: f64,
    /// Fill used when no series color applies (or when forced by
    /// [`ChartToggles::marker_color_priority`]).
    pub fill: Brush,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            fill: Brush::Solid(css::GOLDENROD),
        }
    }
}

/// Callback invoked for bar taps when the tooltip popup is disabled.
pub type BarPressHandler = Arc<dyn Fn(&BarPress<'_>)>;
/// Callback invoked for line and marker taps when the tooltip popup is disabled.
pub type LinePressHandler = Arc<dyn Fn(&LinePress<'_>)>;

/// Full chart configuration. Every field has a default.
#[derive(Clone)]
pub struct ChartOptions {
    /// Container (viewport) size.
    pub size: Size,
    /// Series selection.
    pub kind: ChartKind,
    /// Boolean switches.
    pub toggles: ChartToggles,
    /// Ticks per vertical axis.
    pub tick_count: usize,
    /// Background fill.
    pub background: Brush,
    /// Axis styling shared by all three axes.
    pub axis: AxisStyle,
    /// Gridline styling.
    pub grid: GridStyle,
    /// Suffix appended to primary tick labels.
    pub primary_suffix: String,
    /// Suffix appended to secondary tick labels.
    pub secondary_suffix: String,
    /// Line marker styling.
    pub marker: MarkerStyle,
    /// Stroke of the single line and fallback stroke for multi-line series.
    pub line: StrokeStyle,
    /// Bar (or grouped sub-bar) width.
    pub bar_width: f64,
    /// Bar segment fills, indexed by segment and cycled when short.
    pub bar_fills: Vec<Brush>,
    /// Multi-line series colors. `None` reuses `bar_fills`.
    pub line_colors: Option<Vec<Brush>>,
    /// Value label styling.
    pub value_labels: ValueLabelStyle,
    /// Tooltip popup styling.
    pub tooltip: TooltipStyle,
    /// Bar tap callback.
    pub on_bar_press: Option<BarPressHandler>,
    /// Line tap callback.
    pub on_line_press: Option<LinePressHandler>,
}

impl core::fmt::Debug for ChartOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChartOptions")
            .field("size", &self.size)
            .field("kind", &self.kind)
            .field("toggles", &self.toggles)
            .field("tick_count", &self.tick_count)
            .field("background", &self.background)
            .field("axis", &self.axis)
            .field("grid", &self.grid)
            .field("primary_suffix", &self.primary_suffix)
            .field("secondary_suffix", &self.secondary_suffix)
            .field("marker", &self.marker)
            .field("line", &self.line)
            .field("bar_width", &self.bar_width)
            .field("bar_fills", &self.bar_fills.len())
            .field("line_colors", &self.line_colors.as_ref().map(|v| v.len()))
            .field("value_labels", &self.value_labels)
            .field("tooltip", &self.tooltip)
            .field("on_bar_press", &self.on_bar_press.is_some())
            .field("on_line_press", &self.on_line_press.is_some())
            .finish()
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: Size {
                width: 375.0,
                height: 400.0,
            },
            kind: ChartKind::default(),
            toggles: ChartToggles::default(),
            tick_count: DEFAULT_TICK_COUNT,
            background: Brush::Solid(css::BLACK),
            axis: AxisStyle::default(),
            grid: GridStyle::default(),
            primary_suffix: String::from("k"),
            secondary_suffix: String::from("%"),
            marker: MarkerStyle::default(),
            line: StrokeStyle::solid(css::GOLDENROD, 2.0),
            bar_width: 30.0,
            bar_fills: default_bar_fills(),
            line_colors: None,
            value_labels: ValueLabelStyle::default(),
            tooltip: TooltipStyle::default(),
            on_bar_press: None,
            on_line_press: None,
        }
    }
}

impl ChartOptions {
    /// Sets the container size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size { width, height };
        self
    }

    /// Sets the chart kind.
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replaces all toggles.
    pub fn with_toggles(mut self, toggles: ChartToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Sets the number of ticks per vertical axis.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Enables or disables scroll mode.
    pub fn with_scroll(mut self, scroll: bool) -> Self {
        self.toggles.scroll = scroll;
        self
    }

    /// Enables or disables vertical (`x`) and horizontal (`y`) gridlines.
    pub fn with_grid(mut self, x: bool, y: bool) -> Self {
        self.toggles.grid_x = x;
        self.toggles.grid_y = y;
        self
    }

    /// Enables or disables the internal tooltip popup.
    pub fn with_tooltip_popup(mut self, popup: bool) -> Self {
        self.toggles.tooltip_popup = popup;
        self
    }

    /// Enables or disables per-bar value labels.
    pub fn with_value_labels(mut self, labels: bool) -> Self {
        self.toggles.value_labels = labels;
        self
    }

    /// Enables or disables the axis entrance animation.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.toggles.animate = animate;
        self
    }

    /// Sets the bar width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the bar segment palette.
    pub fn with_bar_fills(mut self, fills: Vec<Brush>) -> Self {
        self.bar_fills = fills;
        self
    }

    /// Sets the multi-line palette.
    pub fn with_line_colors(mut self, colors: Vec<Brush>) -> Self {
        self.line_colors = Some(colors);
        self
    }

    /// Sets the single-line stroke.
    pub fn with_line_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.line = stroke;
        self
    }

    /// Sets the tick label suffixes of the primary and secondary axes.
    pub fn with_suffixes(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_suffix = primary.into();
        self.secondary_suffix = secondary.into();
        self
    }

    /// Sets the bar tap callback.
    pub fn on_bar_press(mut self, f: impl Fn(&BarPress<'_>) + 'static) -> Self {
        self.on_bar_press = Some(Arc::new(f));
        self
    }

    /// Sets the line tap callback.
    pub fn on_line_press(mut self, f: impl Fn(&LinePress<'_>) + 'static) -> Self {
        self.on_line_press = Some(Arc::new(f));
        self
    }

    /// Checks sizes and counts.
    pub fn validate(&self) -> ChartResult<()> {
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidContainer { width, height });
        }
        if self.tick_count < 2 {
            return Err(ChartError::TickCount(self.tick_count));
        }
        positive("bar_width", self.bar_width)?;
        non_negative("marker.radius", self.marker.radius)?;
        non_negative("line.stroke_width", self.line.stroke_width)?;
        non_negative("axis.rule.stroke_width", self.axis.rule.stroke_width)?;
        positive("axis.label_font_size", self.axis.label_font_size)?;
        Ok(())
    }

    /// Stroke paint of multi-line series `series`, falling back to the line color.
    pub fn line_color(&self, series: usize) -> Brush {
        self.line_palette()
            .get(series)
            .cloned()
            .unwrap_or_else(|| self.line.brush.clone())
    }

    /// Marker fill for multi-line series `series`.
    pub fn marker_fill(&self, series: usize) -> Brush {
        if self.toggles.marker_color_priority {
            return self.marker.fill.clone();
        }
        self.line_palette()
            .get(series)
            .cloned()
            .unwrap_or_else(|| self.marker.fill.clone())
    }

    fn line_palette(&self) -> &[Brush] {
        self.line_colors.as_deref().unwrap_or(&self.bar_fills)
    }
}

/// The default bar palette: orange, sage, salmon, gray.
pub fn default_bar_fills() -> Vec<Brush> {
    const PALETTE: [Color; 4] = [
        Color::from_rgba8(0xff, 0x99, 0x00, 0xff),
        Color::from_rgba8(0x99, 0xcc, 0x99, 0xff),
        Color::from_rgba8(0xff, 0x99, 0x99, 0xff),
        Color::from_rgba8(0x99, 0x99, 0x99, 0xff),
    ];
    PALETTE.iter().copied().map(Brush::Solid).collect()
}

fn positive(field: &'static str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidDimension { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidDimension { field, value })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(ChartOptions::default().validate(), Ok(()));
    }

    #[test]
    fn tick_count_below_two_is_rejected() {
        let options = ChartOptions::default().with_tick_count(1);
        assert_eq!(options.validate(), Err(ChartError::TickCount(1)));
    }

    #[test]
    fn zero_container_is_rejected() {
        let options = ChartOptions::default().with_size(0.0, 300.0);
        assert!(matches!(
            options.validate(),
            Err(ChartError::InvalidContainer { .. })
        ));
    }

    #[test]
    fn short_line_palette_falls_back_to_line_color() {
        let options = ChartOptions::default().with_line_colors(vec![Brush::Solid(css::RED)]);
        assert_eq!(options.line_color(0), Brush::Solid(css::RED));
        assert_eq!(options.line_color(1), options.line.brush);
        assert_eq!(options.marker_fill(1), options.marker.fill);
    }

    #[test]
    fn kind_accepts_original_names() {
        let kind: ChartKind = serde_json::from_str("\"multilinechart\"").unwrap();
        assert_eq!(kind, ChartKind::MultiLine);
        let kind: ChartKind = serde_json::from_str("\"stacked_bar\"").unwrap();
        assert_eq!(kind, ChartKind::StackedBar);
    }
}
