// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tap handling: hit testing, the tooltip state machine and press callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use stackline_charts::{
    ChartInteraction, ChartKind, ChartOptions, ComboChartSpec, DataPoint, HitTarget, TapOutcome,
    TooltipState,
};
use stackline_core::MarkPayload;

const SAMPLE: &str = r#"[
    { "month": "Jan", "barValues": [120, 80], "lineValue": 12, "multiLineValues": [10, 30] },
    { "month": "Feb", "barValues": [200, 40], "lineValue": 18, "multiLineValues": [25, 15] },
    { "month": "Mar", "barValues": [90, 60],  "lineValue": 9,  "multiLineValues": [5, 40] }
]"#;

fn sample() -> Vec<DataPoint> {
    serde_json::from_str(SAMPLE).expect("sample data parses")
}

fn overlay_texts(chart: &ComboChartSpec, interaction: &ChartInteraction) -> Vec<String> {
    chart
        .marks(interaction)
        .overlay
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn stacked_bar_popup_lists_every_segment() {
    let chart = ComboChartSpec::new(ChartOptions::default(), sample()).expect("valid options");
    let mut interaction = ChartInteraction::new();
    let marks = chart.marks(&interaction);

    let area = marks
        .hits
        .iter()
        .find(|h| {
            h.target
                == HitTarget::Bar {
                    category: 1,
                    segment: 1,
                }
        })
        .expect("Feb top segment is tappable");
    let target = marks
        .hit_test(area.shape.bounds().center(), 0.0)
        .expect("segment center hits");

    assert_eq!(
        interaction.tap(target, &chart.data, &chart.options),
        TapOutcome::Selected
    );
    assert_eq!(overlay_texts(&chart, &interaction), vec!["200,40"]);
}

#[test]
fn selecting_another_item_replaces_the_popup() {
    let options = ChartOptions::default().with_kind(ChartKind::MultiLine);
    let chart = ComboChartSpec::new(options, sample()).expect("valid options");
    let mut interaction = ChartInteraction::new();

    let marks = chart.marks(&interaction);
    let marker = |series, category| {
        marks
            .hits
            .iter()
            .find(|h| h.target == HitTarget::MultiLine { series, category })
            .map(|h| h.shape.bounds().center())
            .expect("marker is tappable")
    };

    let first = marks.hit_test(marker(1, 2), 0.0).expect("marker hit");
    interaction.tap(first, &chart.data, &chart.options);
    assert_eq!(overlay_texts(&chart, &interaction), vec!["40"]);

    let second = marks.hit_test(marker(0, 0), 0.0).expect("marker hit");
    assert_eq!(
        interaction.tap(second, &chart.data, &chart.options),
        TapOutcome::Selected
    );
    let TooltipState::Selected(item) = interaction.state() else {
        panic!("expected a selection");
    };
    assert_eq!(item.label, "Jan");
    assert_eq!(item.text(), "10");
}

#[test]
fn popup_tap_without_selection_is_ignored() {
    let chart = ComboChartSpec::new(ChartOptions::default(), sample()).expect("valid options");
    let mut interaction = ChartInteraction::new();
    assert_eq!(
        interaction.tap(HitTarget::Popup, &chart.data, &chart.options),
        TapOutcome::Ignored
    );
    assert!(!interaction.dismiss());
    assert!(chart.marks(&interaction).overlay_hits.is_empty());
}

#[test]
fn line_presses_reach_the_callback() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let options = ChartOptions::default()
        .with_kind(ChartKind::Line)
        .with_tooltip_popup(false)
        .on_line_press(move |press| {
            sink.borrow_mut()
                .push((press.category, press.series, press.value, press.point.label.clone()));
        });
    let chart = ComboChartSpec::new(options, sample()).expect("valid options");
    let mut interaction = ChartInteraction::new();
    let marks = chart.marks(&interaction);

    let center = marks
        .hits
        .iter()
        .find(|h| h.target == HitTarget::Line { category: 1 })
        .map(|h| h.shape.bounds().center())
        .expect("line marker is tappable");
    let target = marks.hit_test(center, 0.0).expect("marker hit");
    assert_eq!(
        interaction.tap(target, &chart.data, &chart.options),
        TapOutcome::Delegated
    );
    assert_eq!(
        seen.borrow().as_slice(),
        &[(1, None, 18.0, String::from("Feb"))]
    );
    assert_eq!(interaction.state(), &TooltipState::Idle);
}

#[test]
fn disabled_popup_never_draws_a_tooltip() {
    let options = ChartOptions::default().with_tooltip_popup(false);
    let chart = ComboChartSpec::new(options, sample()).expect("valid options");
    let mut interaction = ChartInteraction::new();
    let outcome = interaction.tap(
        HitTarget::Bar {
            category: 0,
            segment: 0,
        },
        &chart.data,
        &chart.options,
    );
    assert_eq!(outcome, TapOutcome::Ignored);
    assert!(chart.marks(&interaction).overlay.is_empty());
}

#[test]
fn taps_outside_any_region_resolve_to_nothing() {
    let chart = ComboChartSpec::new(ChartOptions::default(), sample()).expect("valid options");
    let marks = chart.marks(&ChartInteraction::new());
    assert_eq!(marks.hit_test(kurbo::Point::new(5.0, 5.0), 0.0), None);
}
