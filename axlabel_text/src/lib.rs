// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis label layout.
//!
//! Placing labels next to an axis needs the size of each label before anything
//! is drawn. Shaping and glyph layout stay downstream, so layout code depends
//! on the tiny [`TextMeasurer`] interface defined here.
//!
//! Measurements are taken on unrotated, single-line text. Labels drawn at an
//! angle use [`TextMetrics::rotated_extent`] to get the axis-aligned box of the
//! rotated line.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
mod float;

#[cfg(not(feature = "std"))]
use float::FloatExt;

/// A minimal text measurement interface.
///
/// Implementations can be heuristic (fast, but inaccurate) or backed by a
/// shaping engine.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for alloc::boxed::Box<T> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in display units (typically points or pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"DejaVu Sans"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty line.
    pub const EMPTY: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }

    /// Returns the unrotated box of the line.
    #[must_use]
    pub fn extent(&self) -> TextExtent {
        TextExtent {
            width: self.advance_width,
            height: self.line_height(),
        }
    }

    /// Returns the axis-aligned box enclosing the line rotated by `angle` degrees.
    ///
    /// Multiples of 90° are exact (width and height swap at 90° and 270°).
    #[must_use]
    pub fn rotated_extent(&self, angle: f64) -> TextExtent {
        self.extent().rotated(angle)
    }
}

/// Width/height of an axis-aligned text box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl TextExtent {
    /// Returns the axis-aligned box enclosing this box rotated by `angle` degrees.
    #[must_use]
    pub fn rotated(self, angle: f64) -> Self {
        let quarter = angle % 90.0;
        if quarter == 0.0 {
            let half_turns = angle % 180.0;
            return if half_turns == 0.0 {
                self
            } else {
                Self {
                    width: self.height,
                    height: self.width,
                }
            };
        }

        let rad = angle.to_radians();
        let (s, c) = (rad.sin().abs(), rad.cos().abs());
        Self {
            width: self.width * c + self.height * s,
            height: self.width * s + self.height * c,
        }
    }
}

/// A tiny heuristic text measurer suitable for demos, tests and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::EMPTY;
        }
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        let ascent = 0.8 * style.font_size;
        let descent = 0.2 * style.font_size;
        TextMetrics {
            advance_width,
            ascent,
            descent,
            leading: 0.0,
        }
    }
}
