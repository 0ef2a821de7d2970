// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-colored y-axis labels.
//!
//! A y-axis often describes several series at once ("voltage, current, power"),
//! each drawn in its own color. This crate places such labels next to the axis:
//! - **Measure**: probe every label (and a phantom axis label) through a
//!   [`LabelSurface`] to get extents in data coordinates.
//! - **Arrange**: compute a starting cursor from the layout mode and alignment,
//!   then advance it label by label so segments do not overlap.
//!
//! The surface is an explicit, caller-owned context. [`PlotCanvas`] is a
//! ready-made surface for a single plot panel; tests and other backends can
//! implement [`LabelSurface`] directly.
//!
//! ```
//! use axlabel::{HeuristicTextMeasurer, LayoutMode, PlotCanvas, YLabelSpec, parse_colors};
//! use kurbo::Rect;
//!
//! let mut canvas = PlotCanvas::new(Rect::new(60.0, 20.0, 460.0, 320.0), HeuristicTextMeasurer)
//!     .with_y_range(0.0, 10.0);
//! let colors = parse_colors(["r", "b"]).unwrap();
//! YLabelSpec::new(["voltage", "current"], colors)
//!     .with_mode(LayoutMode::Rows)
//!     .draw(&mut canvas)
//!     .unwrap();
//! assert_eq!(canvas.marks().len(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod canvas;
mod color;
mod error;
mod layout;
mod mark;
mod measure;
mod options;
mod surface;
#[cfg(test)]
mod test_surface;

pub use axlabel_text::{
    FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextExtent, TextMeasurer,
    TextMetrics, TextStyle,
};
pub use canvas::{AxisGutter, CanvasError, PlotCanvas};
pub use color::{SEPARATOR_COLOR, parse_color, parse_colors};
pub use error::{LabelError, ParseError};
pub use layout::{AnchorSpan, YLabelSpec};
pub use mark::LabelMark;
pub use measure::{
    Extents, PHANTOM_LABEL, PROBE_ANCHOR, half_axis_coord, measure_texts, reference_box,
};
pub use options::{Axis, AxisSide, HorizontalAlign, LayoutMode, VerticalAlign};
pub use surface::{ExtentMeasurer, LabelSurface, TextProbe};
