// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `stackline_demo`.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use stackline_core::{Mark, MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

/// Retained marks of one layer, kept in sync through scene diffs.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, Mark>,
}

impl SvgScene {
    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, new, .. } | MarkDiff::Update { id, new, .. } => {
                    self.marks.insert(*id, (**new).clone());
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    fn write_marks(&self, out: &mut String) {
        let mut marks: Vec<&Mark> = self.marks.values().collect();
        marks.sort_by_key(|m| (m.z_index, m.id));
        for mark in marks {
            write_mark(out, mark);
        }
    }
}

/// Renders `layers` bottom to top into one SVG document.
pub(crate) fn to_svg_string(view_box: Rect, layers: &[&SvgScene]) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    );
    for layer in layers {
        out.push_str("<g>\n");
        layer.write_marks(&mut out);
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            );
            write_paint_attr(out, "fill", &r.fill);
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            );
            if t.angle != 0.0 {
                let _ = write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                );
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            write_opacity(out, mark.opacity);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
            return;
        }
        MarkPayload::Path(p) => {
            let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
            }
            if let Some(dash) = p.dash {
                let _ = write!(
                    out,
                    r#" stroke-dasharray="{0} {0}" stroke-dashoffset="{1}""#,
                    dash.length, dash.offset
                );
            }
        }
    }
    write_opacity(out, mark.opacity);
    out.push_str("/>\n");
}

fn write_opacity(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        let _ = write!(out, r#" opacity="{opacity}""#);
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
