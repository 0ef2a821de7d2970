// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering surface labels are measured against and drawn onto.

use kurbo::{Point, Rect};

use crate::{Axis, AxisSide, LabelMark};

/// A text measurement request.
///
/// A probe is never drawn; it only exists to ask for the bounding box that the
/// text would occupy if it were drawn centered on `pos`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextProbe<'a> {
    /// Text content.
    pub text: &'a str,
    /// Font size in display units.
    pub font_size: f64,
    /// Counter-clockwise rotation in degrees.
    pub angle: f64,
    /// Center of the probe in data coordinates.
    pub pos: Point,
}

/// The single capability needed to measure label text.
pub trait ExtentMeasurer {
    /// Error raised when a measurement cannot be taken.
    type Error;

    /// Returns the data-space bounding box of `probe`.
    ///
    /// This must not leave anything visible behind.
    fn text_extent(&mut self, probe: &TextProbe<'_>) -> Result<Rect, Self::Error>;
}

/// A plot panel that labels can be laid out against and drawn onto.
///
/// All rectangles and points are in data coordinates.
pub trait LabelSurface: ExtentMeasurer {
    /// Current `(min, max)` value range of `axis`.
    fn axis_range(&self, axis: Axis) -> (f64, f64);

    /// Bounding box of the y-axis decorations (ticks and tick labels) on `side`.
    fn y_axis_box(&mut self, side: AxisSide) -> Result<Rect, Self::Error>;

    /// Bounding box `probe` would occupy if it were the y-axis label on `side`.
    ///
    /// `probe.pos` is ignored; the surface decides where an axis label goes.
    fn axis_label_box(
        &mut self,
        side: AxisSide,
        probe: &TextProbe<'_>,
    ) -> Result<Rect, Self::Error>;

    /// Draws a visible label token.
    fn draw_text(&mut self, mark: LabelMark) -> Result<(), Self::Error>;
}
