// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `axlabel_demo`.

use axlabel::{AxisSide, PlotCanvas, TextMeasurer};
use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

#[derive(Debug)]
enum SvgItem {
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Text {
        bounds: Rect,
        text: String,
        font_size: f64,
        angle: f64,
        fill: Color,
    },
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    items: Vec<SvgItem>,
}

impl SvgScene {
    /// Captures the plot frame, both y-axis gutters and every drawn label of `canvas`.
    pub(crate) fn from_canvas<M: TextMeasurer>(canvas: &PlotCanvas<M>) -> Self {
        let mut scene = Self::default();
        let gutter_fill = css::BLACK.with_alpha(20.0 / 255.0);
        for side in [AxisSide::Primary, AxisSide::Secondary] {
            scene.items.push(SvgItem::Rect {
                rect: canvas.y_axis_rect(side),
                fill: Some(gutter_fill),
                stroke: None,
            });
        }
        scene.items.push(SvgItem::Rect {
            rect: canvas.plot(),
            fill: None,
            stroke: Some(css::BLACK),
        });
        for mark in canvas.marks() {
            scene.items.push(SvgItem::Text {
                bounds: canvas.mark_bounds(mark),
                text: mark.text.clone(),
                font_size: mark.font_size,
                angle: mark.angle,
                fill: mark.fill,
            });
        }
        scene
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box()
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for item in &self.items {
            match item {
                SvgItem::Rect { rect, fill, stroke } => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    ));
                    match fill {
                        Some(fill) => write_paint_attr(&mut out, "fill", *fill),
                        None => out.push_str(r#" fill="none""#),
                    }
                    if let Some(stroke) = stroke {
                        write_paint_attr(&mut out, "stroke", *stroke);
                    }
                    out.push_str("/>\n");
                }
                SvgItem::Text {
                    bounds,
                    text,
                    font_size,
                    angle,
                    fill,
                } => {
                    // Alignment was resolved on the rotated box, so draw centered in it.
                    let c = bounds.center();
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="central""#,
                        c.x, c.y, font_size
                    ));
                    if *angle != 0.0 {
                        // Label angles are counter-clockwise; SVG rotates clockwise.
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            -angle, c.x, c.y
                        ));
                    }
                    write_paint_attr(&mut out, "fill", *fill);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn view_box(&self) -> Option<Rect> {
        let rect = self
            .items
            .iter()
            .map(|item| match item {
                SvgItem::Rect { rect, .. } => *rect,
                SvgItem::Text { bounds, .. } => *bounds,
            })
            .reduce(|a, b| a.union(b))?;
        // Add a small padding margin.
        Some(rect.inflate(10.0, 10.0))
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
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
