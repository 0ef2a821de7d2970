// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placed label tokens.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;

use crate::{HorizontalAlign, VerticalAlign};

/// One visible label token, positioned in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelMark {
    /// Text content (unshaped).
    pub text: String,
    /// Fill color.
    pub fill: Color,
    /// Anchor position in data coordinates.
    pub pos: Point,
    /// Font size in display units.
    pub font_size: f64,
    /// Counter-clockwise rotation in degrees.
    pub angle: f64,
    /// Horizontal alignment of the rotated bounding box at `pos`.
    pub align: HorizontalAlign,
    /// Vertical alignment of the rotated bounding box at `pos`.
    pub baseline: VerticalAlign,
}

impl LabelMark {
    /// Creates a black, unrotated, bottom-center aligned mark.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: css::BLACK,
            pos,
            font_size: 12.0,
            angle: 0.0,
            align: HorizontalAlign::Center,
            baseline: VerticalAlign::Bottom,
        }
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }
}
