// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for scales, layout and bar geometry.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use stackline_charts::{
    AxisScale, ChartInteraction, ChartKind, ChartLayout, ChartLayoutSpec, ChartOptions,
    ComboChartSpec, DataPoint, HitTarget, Margins, Size, StackedBarMarkSpec,
};

fn layout(width: f64, height: f64, categories: usize, tick_count: usize) -> ChartLayout {
    ChartLayout::arrange(&ChartLayoutSpec {
        view_size: Size { width, height },
        margins: Margins::default(),
        category_count: categories,
        tick_count,
        scroll: false,
        marker_radius: 5.0,
    })
}

proptest! {
    #[test]
    fn axis_covers_every_value(
        values in prop::collection::vec(0.0f64..1.0e6, 1..24),
        tick_count in 2usize..12
    ) {
        let max = values.iter().copied().fold(0.0, f64::max);
        prop_assume!(max > 0.0);
        let scale = AxisScale::from_values(values.iter().copied(), tick_count);
        prop_assert!(scale.axis_max() + 1e-9 >= max);

        let ticks = scale.ticks();
        prop_assert_eq!(ticks.len(), tick_count);
        prop_assert_eq!(ticks[0], 0.0);
        prop_assert!(ticks.windows(2).all(|w| w[0] < w[1]), "ticks not increasing: {:?}", ticks);
    }

    #[test]
    fn stack_height_is_sum_of_segments(
        rows in prop::collection::vec(prop::collection::vec(0.0f64..500.0, 1..5), 1..8),
        width in 200.0f64..1200.0,
        height in 200.0f64..1200.0
    ) {
        let data: Vec<DataPoint> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| DataPoint::new(format!("c{i}")).with_bars(r.iter().copied()))
            .collect();
        let layout = layout(width, height, data.len(), 6);
        let scale = AxisScale::from_values(data.iter().map(DataPoint::bar_total), 6)
            .linear(layout.value_range());
        let segments = StackedBarMarkSpec::new(1, scale).segments(&layout, &data);

        for (category, point) in data.iter().enumerate() {
            let stack: Vec<_> = segments.iter().filter(|s| s.category == category).collect();
            prop_assert_eq!(stack.len(), point.segment_count());
            let drawn: f64 = stack.iter().map(|s| s.rect.height()).sum();
            let expected = layout.baseline() - scale.map(point.bar_total());
            assert_abs_diff_eq!(drawn, expected, epsilon = 1e-6);
            prop_assert!(stack.iter().all(|s| s.rect.y0 >= layout.axis_top() - 1e-9));
        }
    }

    #[test]
    fn layout_depends_only_on_size_and_count(
        a in prop::collection::vec(0.0f64..1000.0, 3),
        b in prop::collection::vec(0.0f64..1000.0, 3),
        width in 100.0f64..2000.0,
        height in 100.0f64..2000.0
    ) {
        let options = ChartOptions::default().with_size(width, height);
        let chart = |values: &[f64]| {
            let data = values
                .iter()
                .enumerate()
                .map(|(i, v)| DataPoint::new(format!("c{i}")).with_bar(*v).with_line(*v))
                .collect();
            ComboChartSpec::new(options.clone(), data).expect("valid options")
        };
        prop_assert_eq!(chart(&a).layout(), chart(&b).layout());
    }

    #[test]
    fn tick_rows_are_evenly_spaced(
        tick_count in 2usize..12,
        height in 150.0f64..1500.0
    ) {
        let layout = layout(375.0, height, 4, tick_count);
        assert_abs_diff_eq!(layout.tick_y(0), layout.baseline());
        assert_abs_diff_eq!(layout.tick_y(tick_count - 1), layout.axis_top(), epsilon = 1e-9);
        for k in 1..tick_count {
            assert_abs_diff_eq!(
                layout.tick_y(k - 1) - layout.tick_y(k),
                layout.tick_spacing,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn garbage_values_never_escape_the_plot(
        values in prop::collection::vec(
            prop_oneof![
                Just(f64::NAN),
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY),
                -1.0e9f64..1.0e9,
            ],
            1..10
        )
    ) {
        let data: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(format!("c{i}")).with_bar(*v).with_line(*v))
            .collect();
        let chart = ComboChartSpec::new(ChartOptions::default(), data).expect("valid options");
        let marks = chart.marks(&ChartInteraction::new());
        let plot = marks.layout.content;
        for mark in marks.iter() {
            if let Some(b) = mark.bounds() {
                prop_assert!(b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite());
                prop_assert!(b.y1 <= plot.y1 + 1e-9, "mark {:?} below the view", mark.id);
            }
        }
    }

    #[test]
    fn every_bar_is_hittable_at_its_center(
        rows in prop::collection::vec(prop::collection::vec(1.0f64..500.0, 1..4), 1..6),
        stacked in any::<bool>()
    ) {
        let data: Vec<DataPoint> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| DataPoint::new(format!("c{i}")).with_bars(r.iter().copied()))
            .collect();
        let kind = if stacked { ChartKind::StackedBar } else { ChartKind::Bar };
        let chart = ComboChartSpec::new(ChartOptions::default().with_kind(kind), data)
            .expect("valid options");
        let marks = chart.marks(&ChartInteraction::new());
        for area in &marks.hits {
            let center = area.shape.bounds().center();
            prop_assume!(area.shape.bounds().height() > 1e-6);
            prop_assert_eq!(marks.hit_test(center, 0.0), Some(area.target));
            prop_assert!(
                matches!(area.target, HitTarget::Bar { .. }),
                "hit target should be a bar: {:?}",
                area.target
            );
        }
    }
}
