// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label colors.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use peniko::color::{Srgb, parse_color as parse_css_color};

use crate::ParseError;

/// Color used for separator tokens in [`LayoutMode::Line`](crate::LayoutMode::Line).
pub const SEPARATOR_COLOR: Color = css::BLACK;

/// Parses a color given as a single-letter plot code or any CSS color string.
///
/// The single-letter codes are the classic plotting shorthands:
/// `b`, `g`, `r`, `c`, `m`, `y`, `k` and `w`.
pub fn parse_color(s: &str) -> Result<Color, ParseError> {
    let s = s.trim();
    let code = match s {
        "b" => Some(Color::from_rgb8(0, 0, 255)),
        "g" => Some(Color::from_rgb8(0, 128, 0)),
        "r" => Some(Color::from_rgb8(255, 0, 0)),
        "c" => Some(Color::from_rgb8(0, 191, 191)),
        "m" => Some(Color::from_rgb8(191, 0, 191)),
        "y" => Some(Color::from_rgb8(191, 191, 0)),
        "k" => Some(css::BLACK),
        "w" => Some(css::WHITE),
        _ => None,
    };
    if let Some(color) = code {
        return Ok(color);
    }
    parse_css_color(s)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| ParseError::new("color", s, "a single-letter plot code or a CSS color"))
}

/// Parses every color in `codes`, stopping at the first invalid one.
pub fn parse_colors<I, S>(codes: I) -> Result<Vec<Color>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes.into_iter().map(|s| parse_color(s.as_ref())).collect()
}
