// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `stackline_charts`.
//!
//! Reads category data from JSON (defaults to `data/sample.json`), renders every chart kind
//! plus a few interaction and animation states to `stackline_demo.html`, and writes the
//! entrance timeline to `stackline_timeline.json`.

mod svg;

use std::error::Error;
use std::path::PathBuf;

use kurbo::Point;
use peniko::Color;
use stackline_charts::{
    ChartInteraction, ChartKind, ChartMarks, ChartOptions, ComboChartSpec, DataPoint,
};
use stackline_core::Scene;
use tracing::info;

struct Section {
    title: String,
    svg: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let path = std::env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample.json"),
        PathBuf::from,
    );
    let data: Vec<DataPoint> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    info!(path = %path.display(), categories = data.len(), "loaded data");

    let mut sections = Vec::new();
    for (title, kind) in [
        ("Bar (grouped)", ChartKind::Bar),
        ("Stacked bar", ChartKind::StackedBar),
        ("Line", ChartKind::Line),
        ("Multi-line", ChartKind::MultiLine),
        ("All", ChartKind::All),
    ] {
        let options = ChartOptions::default()
            .with_kind(kind)
            .with_grid(true, true);
        let chart = ComboChartSpec::new(options, data.clone())?;
        sections.push(render_section(title, &chart, &ChartInteraction::new()));
    }

    sections.push(scroll_demo(&data)?);
    sections.push(tooltip_demo(&data)?);
    sections.extend(animation_demo(&data)?);

    std::fs::write("stackline_demo.html", render_report("stackline demo", &sections))?;
    info!("wrote stackline_demo.html");

    let timeline = ComboChartSpec::new(ChartOptions::default(), data)?.timeline();
    std::fs::write(
        "stackline_timeline.json",
        serde_json::to_string_pretty(&timeline)?,
    )?;
    info!(
        duration_ms = timeline.duration_ms(),
        "wrote stackline_timeline.json"
    );
    Ok(())
}

fn render_section(title: &str, chart: &ComboChartSpec, interaction: &ChartInteraction) -> Section {
    let marks = chart.marks(interaction);
    Section {
        title: title.to_string(),
        svg: render_marks(marks),
    }
}

/// Pushes content and overlay through separate scenes, as a host with a scroll view would.
fn render_marks(marks: ChartMarks) -> String {
    let view_box = marks.content_bounds().union(marks.layout.view);
    let mut content = svg::SvgScene::default();
    content.apply_diffs(&Scene::new().tick(marks.content));
    let mut overlay = svg::SvgScene::default();
    overlay.apply_diffs(&Scene::new().tick(marks.overlay));
    svg::to_svg_string(view_box, &[&content, &overlay])
}

fn scroll_demo(data: &[DataPoint]) -> Result<Section, Box<dyn Error>> {
    // Twice the sample, so the content overflows the viewport.
    let wide: Vec<DataPoint> = data
        .iter()
        .chain(data)
        .enumerate()
        .map(|(i, p)| DataPoint {
            label: format!("{}{}", p.label, i / data.len().max(1) + 1),
            ..p.clone()
        })
        .collect();
    let options = ChartOptions::default()
        .with_kind(ChartKind::StackedBar)
        .with_scroll(true)
        .with_value_labels(false);
    let chart = ComboChartSpec::new(options, wide)?;
    Ok(render_section(
        "Scroll mode (pinned primary axis)",
        &chart,
        &ChartInteraction::new(),
    ))
}

fn tooltip_demo(data: &[DataPoint]) -> Result<Section, Box<dyn Error>> {
    let options = ChartOptions::default()
        .with_kind(ChartKind::All)
        .with_line_colors(vec![
            Color::from_rgb8(0x4e, 0xa8, 0xde).into(),
            Color::from_rgb8(0xe0, 0x6c, 0x75).into(),
            Color::from_rgb8(0x98, 0xc3, 0x79).into(),
        ]);
    let chart = ComboChartSpec::new(options, data.to_vec())?;
    let mut interaction = ChartInteraction::new();

    // Tap the middle of the second category's bottom segment.
    let layout = chart.layout();
    let tap = Point::new(layout.category_x(1), layout.baseline() - 5.0);
    if let Some(target) = chart.marks(&interaction).hit_test(tap, 0.0) {
        let outcome = interaction.tap(target, &chart.data, &chart.options);
        info!(?target, ?outcome, "simulated tap");
    }
    Ok(render_section(
        "Tooltip popup after tapping a bar",
        &chart,
        &interaction,
    ))
}

fn animation_demo(data: &[DataPoint]) -> Result<Vec<Section>, Box<dyn Error>> {
    let chart = ComboChartSpec::new(ChartOptions::default(), data.to_vec())?;
    let layout = chart.layout();
    let timeline = chart.timeline();
    let interaction = ChartInteraction::new();
    Ok([0.0, 750.0, 1500.0, 2000.0]
        .into_iter()
        .map(|t_ms| {
            let frame = timeline.sample(&layout, t_ms);
            Section {
                title: format!("Entrance at {t_ms} ms"),
                svg: render_marks(chart.marks_at(&interaction, &frame)),
            }
        })
        .collect())
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str(
        "<style>body{font-family:sans-serif;background:#222;color:#eee}\
         section{display:inline-block;margin:12px;vertical-align:top}\
         .scroll{max-width:375px;overflow-x:auto}</style>",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str(&format!(
            "<section><h2>{}</h2><div class=\"scroll\">{}</div></section>\n",
            section.title, section.svg
        ));
    }
    out.push_str("</body></html>\n");
    out
}
