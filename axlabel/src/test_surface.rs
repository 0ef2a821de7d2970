// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic [`LabelSurface`] for unit tests.
//!
//! Unrotated text is `0.25` units wide per character and `0.5` units tall
//! unless a height is set for it with [`RecordingSurface::with_line_height`].
//! Boxes are returned at the origin so widths and heights are exact.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use thiserror::Error;

use crate::{Axis, AxisSide, ExtentMeasurer, LabelMark, LabelSurface, TextProbe};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("measurement budget exhausted")]
pub(crate) struct MeasureFailed;

#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub(crate) x_range: (f64, f64),
    pub(crate) y_range: (f64, f64),
    pub(crate) axis_box: Rect,
    pub(crate) label_box: Rect,
    pub(crate) fail_after: Option<usize>,
    pub(crate) line_heights: Vec<(String, f64)>,
    pub(crate) measured: Vec<(String, f64)>,
    pub(crate) label_requests: Vec<(AxisSide, String)>,
    pub(crate) drawn: Vec<LabelMark>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self {
            x_range: (0.0, 1.0),
            y_range: (0.0, 10.0),
            axis_box: Rect::new(-1.0, 0.0, 0.0, 10.0),
            label_box: Rect::new(-1.5, 3.0, -1.25, 7.0),
            fail_after: None,
            line_heights: Vec::new(),
            measured: Vec::new(),
            label_requests: Vec::new(),
            drawn: Vec::new(),
        }
    }

    pub(crate) fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = (min, max);
        self
    }

    pub(crate) fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = (min, max);
        self
    }

    /// Fails every measurement after the first `n`.
    pub(crate) fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub(crate) fn width_of(text: &str) -> f64 {
        0.25 * text.chars().count() as f64
    }

    pub(crate) const LINE_HEIGHT: f64 = 0.5;

    /// Gives `text` its own unrotated height.
    pub(crate) fn with_line_height(mut self, text: &str, height: f64) -> Self {
        self.line_heights.push((text.into(), height));
        self
    }

    pub(crate) fn height_of(&self, text: &str) -> f64 {
        self.line_heights
            .iter()
            .find(|(t, _)| t == text)
            .map_or(Self::LINE_HEIGHT, |&(_, h)| h)
    }

    pub(crate) fn drawn_texts(&self) -> Vec<&str> {
        self.drawn.iter().map(|m| m.text.as_str()).collect()
    }
}

impl ExtentMeasurer for RecordingSurface {
    type Error = MeasureFailed;

    fn text_extent(&mut self, probe: &TextProbe<'_>) -> Result<Rect, Self::Error> {
        if self.fail_after.is_some_and(|n| self.measured.len() >= n) {
            return Err(MeasureFailed);
        }
        self.measured.push((probe.text.into(), probe.angle));
        let (w, h) = (Self::width_of(probe.text), self.height_of(probe.text));
        let (w, h) = if probe.angle == 90.0 { (h, w) } else { (w, h) };
        Ok(Rect::new(0.0, 0.0, w, h))
    }
}

impl LabelSurface for RecordingSurface {
    fn axis_range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => self.x_range,
            Axis::Y => self.y_range,
        }
    }

    fn y_axis_box(&mut self, _side: AxisSide) -> Result<Rect, Self::Error> {
        Ok(self.axis_box)
    }

    fn axis_label_box(
        &mut self,
        side: AxisSide,
        probe: &TextProbe<'_>,
    ) -> Result<Rect, Self::Error> {
        self.label_requests.push((side, probe.text.into()));
        Ok(self.label_box)
    }

    fn draw_text(&mut self, mark: LabelMark) -> Result<(), Self::Error> {
        self.drawn.push(mark);
        Ok(())
    }
}
