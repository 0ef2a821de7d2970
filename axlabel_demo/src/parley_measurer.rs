// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed [`TextMeasurer`] for shaping-aware label extents.

use std::borrow::Cow;
use std::cell::RefCell;

use axlabel::{FontFamily, FontStyle, TextMeasurer, TextMetrics, TextStyle};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};

/// Measures single-line labels with Parley's default system font configuration.
pub(crate) struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
}

impl ParleyTextMeasurer {
    pub(crate) fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
        }
    }
}

fn font_stack(family: &FontFamily) -> FontStack<'_> {
    FontStack::from(match family {
        FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
        FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
        FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
        FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
    })
}

fn font_style(style: FontStyle) -> ParleyFontStyle {
    match style {
        FontStyle::Normal => ParleyFontStyle::Normal,
        FontStyle::Italic => ParleyFontStyle::Italic,
        FontStyle::Oblique => ParleyFontStyle::Oblique(None),
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        // Labels never need more than f32 range; non-finite sizes measure as empty.
        if text.is_empty() || !style.font_size.is_finite() {
            return TextMetrics::EMPTY;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Font sizes are far inside f32 range"
        )]
        let font_size = style.font_size.max(0.0) as f32;

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();
        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(font_size));
        builder.push_default(StyleProperty::FontStack(font_stack(&style.font_family)));
        builder.push_default(StyleProperty::FontStyle(font_style(style.font_style)));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return TextMetrics::EMPTY;
        };
        let m = line.metrics();
        TextMetrics {
            advance_width: f64::from(m.advance),
            ascent: f64::from(m.ascent),
            descent: f64::from(m.descent),
            leading: f64::from(m.leading),
        }
    }
}
