// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders multi-colored y-axis labels in every layout mode to SVG files.
//!
//! Usage: `axlabel_demo [OUT_DIR]` (defaults to `axlabel_demo_out`).

#[cfg(feature = "parley")]
mod parley_measurer;
mod svg;

use std::path::PathBuf;

use axlabel::{
    AxisSide, HorizontalAlign, LabelError, LayoutMode, ParseError, PlotCanvas, TextMeasurer,
    VerticalAlign, YLabelSpec, parse_colors,
};
use kurbo::Rect;

/// Rendered cases as `(mode, side, ha, va)`, written as they would be given on a command line.
const CASES: &[Case] = &[
    ("line", "ax1", "center", "bottom"),
    ("line", "ax2", "center", "bottom"),
    ("rows", "ax1", "left", "bottom"),
    ("rows", "ax1", "center", "top"),
    ("rows", "ax2", "right", "bottom"),
    ("cols", "ax1", "center", "bottom"),
    ("cols", "ax2", "center", "top"),
];

type Case = (&'static str, &'static str, &'static str, &'static str);

const TEXTS: [&str; 3] = ["Voltage [V]", "Current [A]", "Power [W]"];
const COLORS: [&str; 3] = ["r", "g", "#1f77b4"];

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("axlabel_demo_out"), PathBuf::from);
    std::fs::create_dir_all(&out_dir).expect("create output directory");

    for case in CASES {
        let (mode, side, ha, va) = case;
        let name = format!("{mode}_{side}_{ha}_{va}.svg");
        let svg = match render_case(case) {
            Ok(svg) => svg,
            Err(err) => {
                eprintln!("{name}: {err}");
                continue;
            }
        };
        let path = out_dir.join(&name);
        std::fs::write(&path, svg).expect("write svg");
        println!("wrote {}", path.display());
    }
}

fn label_for(&(mode, side, ha, va): &Case) -> Result<YLabelSpec, ParseError> {
    Ok(YLabelSpec::new(TEXTS, parse_colors(COLORS)?)
        .with_mode(mode.parse::<LayoutMode>()?)
        .with_side(side.parse::<AxisSide>()?)
        .with_ha(ha.parse::<HorizontalAlign>()?)
        .with_va(va.parse::<VerticalAlign>()?)
        .with_separator(", "))
}

fn render_case(case: &Case) -> Result<String, LabelError<axlabel::CanvasError>> {
    let label = label_for(case)?;
    let mut canvas = PlotCanvas::new(Rect::new(180.0, 30.0, 580.0, 330.0), demo_measurer())
        .with_x_range(0.0, 10.0)
        .with_y_range(-1.0, 1.0);
    label.draw(&mut canvas)?;
    Ok(svg::SvgScene::from_canvas(&canvas).to_svg_string())
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(parley_measurer::ParleyTextMeasurer::new())
    }
    #[cfg(not(feature = "parley"))]
    {
        Box::new(axlabel::HeuristicTextMeasurer)
    }
}
