// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single plot panel usable as a [`LabelSurface`].
//!
//! The canvas knows where the data rectangle sits in display coordinates
//! (y down, typically pixels), the current data ranges, and how much room the
//! y-axis ticks and tick labels take. Text is measured in display units with a
//! [`TextMeasurer`] and converted to data units through the inverse of the
//! data transform.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect};
use thiserror::Error;

use crate::{
    Axis, AxisSide, ExtentMeasurer, HorizontalAlign, LabelMark, LabelSurface, TextExtent,
    TextMeasurer, TextProbe, TextStyle, VerticalAlign,
};

/// Errors raised by [`PlotCanvas`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    /// A data range or the plot rectangle is degenerate, so display boxes cannot
    /// be mapped back to data coordinates.
    #[error("data transform is not invertible")]
    SingularTransform,
    /// A computed box or position is not finite.
    #[error("non-finite text geometry")]
    NonFinite,
}

/// Space taken by the y-axis decorations, in display units.
///
/// Defaults follow common plotting conventions: 3.5 tick length, 3.5 tick
/// padding, room for four-character tick labels and 4 units between tick
/// labels and the axis label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGutter {
    /// Tick mark length.
    pub tick_size: f64,
    /// Gap between tick ends and tick labels.
    pub tick_padding: f64,
    /// Width reserved for tick labels.
    pub tick_label_width: f64,
    /// Gap between tick labels and the axis label.
    pub label_padding: f64,
}

impl AxisGutter {
    /// Total width of ticks plus tick labels.
    pub fn width(&self) -> f64 {
        (self.tick_size + self.tick_padding + self.tick_label_width).max(0.0)
    }
}

impl Default for AxisGutter {
    fn default() -> Self {
        Self {
            tick_size: 3.5,
            tick_padding: 3.5,
            tick_label_width: 24.0,
            label_padding: 4.0,
        }
    }
}

/// A plot panel that records drawn label marks.
#[derive(Clone, Debug)]
pub struct PlotCanvas<M> {
    plot: Rect,
    x_range: (f64, f64),
    y_range: (f64, f64),
    gutter: AxisGutter,
    style: TextStyle,
    measurer: M,
    marks: Vec<LabelMark>,
}

impl<M: TextMeasurer> PlotCanvas<M> {
    /// Creates a canvas whose data rectangle occupies `plot` (display units, y down).
    ///
    /// Both data ranges start as `(0, 1)`.
    pub fn new(plot: Rect, measurer: M) -> Self {
        Self {
            plot: plot.abs(),
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            gutter: AxisGutter::default(),
            style: TextStyle::default(),
            measurer,
            marks: Vec::new(),
        }
    }

    /// Sets the x data range.
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = (min, max);
        self
    }

    /// Sets the y data range.
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = (min, max);
        self
    }

    /// Sets the y-axis gutter geometry.
    pub fn with_gutter(mut self, gutter: AxisGutter) -> Self {
        self.gutter = gutter;
        self
    }

    /// Sets the base text style. Its font size is replaced per measurement.
    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// The data rectangle in display units.
    pub fn plot(&self) -> Rect {
        self.plot
    }

    /// The y-axis gutter geometry.
    pub fn gutter(&self) -> AxisGutter {
        self.gutter
    }

    /// Marks drawn so far, in drawing order.
    pub fn marks(&self) -> &[LabelMark] {
        &self.marks
    }

    /// Removes and returns every drawn mark.
    pub fn take_marks(&mut self) -> Vec<LabelMark> {
        core::mem::take(&mut self.marks)
    }

    /// The transform from data to display coordinates.
    pub fn data_transform(&self) -> Affine {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let sx = self.plot.width() / (x1 - x0);
        let sy = self.plot.height() / (y1 - y0);
        Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            self.plot.x0 - x0 * sx,
            self.plot.y1 + y0 * sy,
        ])
    }

    /// Maps a data point to display coordinates.
    pub fn to_display(&self, p: Point) -> Point {
        self.data_transform() * p
    }

    /// Maps a display rectangle to the data rectangle enclosing it.
    pub fn rect_to_data(&self, rect: Rect) -> Result<Rect, CanvasError> {
        let transform = self.data_transform();
        let det = transform.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(CanvasError::SingularTransform);
        }
        let out = transform.inverse().transform_rect_bbox(rect);
        if [out.x0, out.y0, out.x1, out.y1].iter().all(|v| v.is_finite()) {
            Ok(out)
        } else {
            Err(CanvasError::NonFinite)
        }
    }

    /// The display rectangle covered by the y-axis ticks and tick labels on `side`.
    pub fn y_axis_rect(&self, side: AxisSide) -> Rect {
        let w = self.gutter.width();
        match side {
            AxisSide::Primary => {
                Rect::new(self.plot.x0 - w, self.plot.y0, self.plot.x0, self.plot.y1)
            }
            AxisSide::Secondary => {
                Rect::new(self.plot.x1, self.plot.y0, self.plot.x1 + w, self.plot.y1)
            }
        }
    }

    fn display_extent(&self, text: &str, font_size: f64, angle: f64) -> TextExtent {
        let mut style = self.style.clone();
        style.font_size = font_size;
        self.measurer.measure(text, &style).rotated_extent(angle)
    }

    /// The display rectangle a drawn mark occupies.
    ///
    /// Alignment applies to the rotated bounding box, so a `bottom`/`center`
    /// mark has the bottom edge of its box on `pos` and is centered on it
    /// horizontally regardless of rotation.
    pub fn mark_bounds(&self, mark: &LabelMark) -> Rect {
        let ext = self.display_extent(&mark.text, mark.font_size, mark.angle);
        let p = self.to_display(mark.pos);
        let x0 = match mark.align {
            HorizontalAlign::Left => p.x,
            HorizontalAlign::Center => p.x - ext.width / 2.0,
            HorizontalAlign::Right => p.x - ext.width,
        };
        let y0 = match mark.baseline {
            VerticalAlign::Bottom => p.y - ext.height,
            VerticalAlign::Top => p.y,
        };
        Rect::new(x0, y0, x0 + ext.width, y0 + ext.height)
    }
}

impl<M: TextMeasurer> ExtentMeasurer for PlotCanvas<M> {
    type Error = CanvasError;

    fn text_extent(&mut self, probe: &TextProbe<'_>) -> Result<Rect, Self::Error> {
        let ext = self.display_extent(probe.text, probe.font_size, probe.angle);
        let center = self.to_display(probe.pos);
        let rect = Rect::from_center_size(center, (ext.width, ext.height));
        self.rect_to_data(rect)
    }
}

impl<M: TextMeasurer> LabelSurface for PlotCanvas<M> {
    fn axis_range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => self.x_range,
            Axis::Y => self.y_range,
        }
    }

    fn y_axis_box(&mut self, side: AxisSide) -> Result<Rect, Self::Error> {
        self.rect_to_data(self.y_axis_rect(side))
    }

    fn axis_label_box(
        &mut self,
        side: AxisSide,
        probe: &TextProbe<'_>,
    ) -> Result<Rect, Self::Error> {
        let axis = self.y_axis_rect(side);
        let ext = self.display_extent(probe.text, probe.font_size, probe.angle);
        let pad = self.gutter.label_padding;
        let cx = match side {
            AxisSide::Primary => axis.x0 - pad - ext.width / 2.0,
            AxisSide::Secondary => axis.x1 + pad + ext.width / 2.0,
        };
        let center = Point::new(cx, self.plot.center().y);
        self.rect_to_data(Rect::from_center_size(center, (ext.width, ext.height)))
    }

    fn draw_text(&mut self, mark: LabelMark) -> Result<(), Self::Error> {
        if !(mark.pos.x.is_finite() && mark.pos.y.is_finite()) {
            return Err(CanvasError::NonFinite);
        }
        log::trace!("draw {:?} at {:?}", mark.text, mark.pos);
        self.marks.push(mark);
        Ok(())
    }
}
