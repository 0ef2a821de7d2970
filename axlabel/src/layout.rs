// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label layout.
//!
//! [`YLabelSpec`] follows a measure/arrange shape:
//! - **Measure**: the y midpoint, the y-axis box, a phantom axis label (the
//!   reference box) and every label token are queried from the surface.
//! - **Arrange**: a starting cursor is derived from the layout mode and
//!   alignment, then each token is placed at the cursor and the cursor advances
//!   by that token's extent plus the spacing.
//!
//! Rows are emitted in reverse input order starting from the bottom, so reading
//! top to bottom matches the input order.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::measure::{half_axis_coord, measure_texts, reference_box};
use crate::{
    Axis, AxisSide, HorizontalAlign, LabelError, LabelMark, LabelSurface, LayoutMode,
    SEPARATOR_COLOR, VerticalAlign,
};

/// Horizontal anchor coordinates derived from the reference box.
///
/// On the secondary side the span is mirrored (`x0` and `x1` swap roles) and
/// shifted right by the widest label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorSpan {
    /// Far edge of the span. Layout only places tokens against `x1`; this is
    /// kept for callers drawing extra guides beside the label.
    pub x0: f64,
    /// Anchor labels are placed against.
    pub x1: f64,
}

impl AnchorSpan {
    /// Computes the span for `side` from the reference box and the widest label.
    pub fn new(side: AxisSide, reference: Rect, max_width: f64) -> Self {
        match side {
            AxisSide::Primary => Self {
                x0: reference.x0,
                x1: reference.x1,
            },
            AxisSide::Secondary => Self {
                x0: reference.x1 + max_width,
                x1: reference.x0 + max_width,
            },
        }
    }
}

/// A multi-colored y-axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct YLabelSpec {
    /// Label texts, in reading order.
    pub texts: Vec<String>,
    /// One color per text.
    pub colors: Vec<Color>,
    /// Arrangement of the segments.
    pub mode: LayoutMode,
    /// Which y-axis the label belongs to.
    pub side: AxisSide,
    /// Horizontal alignment. Selects the starting x in [`LayoutMode::Rows`] and
    /// is passed through to every drawn token.
    pub ha: HorizontalAlign,
    /// Vertical alignment. Used by [`LayoutMode::Rows`] and [`LayoutMode::Cols`].
    pub va: VerticalAlign,
    /// Separator drawn between segments in [`LayoutMode::Line`].
    pub separator: String,
    /// Color of separator tokens.
    pub separator_color: Color,
    /// Font size in display units.
    pub font_size: f64,
    /// Correction added to the starting x, in data units.
    pub x_corr: f64,
    /// Correction added to the starting y, in data units.
    pub y_corr: f64,
    /// Gap between consecutive tokens, in data units.
    pub spacing: f64,
}

impl YLabelSpec {
    /// Creates a label with default options: `line` mode on the primary side,
    /// centered, separator `", "`, 12pt, spacing `0.005`.
    pub fn new<T, S>(texts: T, colors: impl IntoIterator<Item = Color>) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            colors: colors.into_iter().collect(),
            mode: LayoutMode::Line,
            side: AxisSide::Primary,
            ha: HorizontalAlign::Center,
            va: VerticalAlign::Bottom,
            separator: String::from(", "),
            separator_color: SEPARATOR_COLOR,
            font_size: 12.0,
            x_corr: 0.0,
            y_corr: 0.0,
            spacing: 0.005,
        }
    }

    /// Sets the layout mode.
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the axis side.
    pub fn with_side(mut self, side: AxisSide) -> Self {
        self.side = side;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_ha(mut self, ha: HorizontalAlign) -> Self {
        self.ha = ha;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_va(mut self, va: VerticalAlign) -> Self {
        self.va = va;
        self
    }

    /// Sets the separator used in [`LayoutMode::Line`].
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the separator color.
    pub fn with_separator_color(mut self, color: Color) -> Self {
        self.separator_color = color;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the position corrections.
    pub fn with_correction(mut self, x_corr: f64, y_corr: f64) -> Self {
        self.x_corr = x_corr;
        self.y_corr = y_corr;
        self
    }

    /// Sets the gap between tokens.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    fn validate<E>(&self) -> Result<(), LabelError<E>> {
        if self.texts.len() != self.colors.len() {
            return Err(LabelError::SizeMismatch {
                texts: self.texts.len(),
                colors: self.colors.len(),
            });
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(LabelError::InvalidValue {
                name: "font size",
                value: self.font_size,
            });
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(LabelError::InvalidValue {
                name: "spacing",
                value: self.spacing,
            });
        }
        for (name, value) in [("x correction", self.x_corr), ("y correction", self.y_corr)] {
            if !value.is_finite() {
                return Err(LabelError::InvalidValue { name, value });
            }
        }
        Ok(())
    }

    /// Measures against `surface` and returns the tokens to draw, in drawing order.
    ///
    /// Nothing is drawn. Arguments are validated before the surface is touched.
    pub fn layout<S>(&self, surface: &mut S) -> Result<Vec<LabelMark>, LabelError<S::Error>>
    where
        S: LabelSurface + ?Sized,
    {
        self.validate::<S::Error>()?;
        if self.texts.is_empty() {
            return Ok(Vec::new());
        }

        let n = self.texts.len();
        let rotation = self.mode.rotation();
        let middle = half_axis_coord(&*surface, Axis::Y);
        let axis_box = surface
            .y_axis_box(self.side)
            .map_err(LabelError::Surface)?;
        let reference =
            reference_box(&mut *surface, self.side, self.font_size).map_err(LabelError::Surface)?;
        let labels = measure_texts(&mut *surface, self.texts.as_slice(), rotation, self.font_size)
            .map_err(LabelError::Surface)?;
        let anchor = AnchorSpan::new(self.side, reference, labels.max_width());

        let (tokens, extents, start) = match self.mode {
            LayoutMode::Rows => {
                let tokens: Vec<(&str, Color)> = self
                    .texts
                    .iter()
                    .map(String::as_str)
                    .zip(self.colors.iter().copied())
                    .rev()
                    .collect();
                let max_width = labels.max_width();
                let x = match self.ha {
                    HorizontalAlign::Left => anchor.x1 - max_width,
                    HorizontalAlign::Center => anchor.x1 - max_width / 2.0,
                    HorizontalAlign::Right => anchor.x1,
                };
                let half_height = labels.total_height() / 2.0;
                let y = match self.va {
                    VerticalAlign::Bottom => middle - half_height,
                    VerticalAlign::Top => axis_box.y1 - half_height,
                };
                (tokens, labels.reversed(), Point::new(x, y))
            }
            LayoutMode::Cols => {
                let tokens: Vec<(&str, Color)> = self
                    .texts
                    .iter()
                    .map(String::as_str)
                    .zip(self.colors.iter().copied())
                    .collect();
                let x = match self.side {
                    AxisSide::Primary => {
                        axis_box.x0 - (n - 1) as f64 * (labels.widths[0] + self.spacing)
                    }
                    AxisSide::Secondary => anchor.x1 - labels.max_width(),
                };
                let y = match self.va {
                    VerticalAlign::Bottom => middle,
                    VerticalAlign::Top => axis_box.y1 - labels.min_height(),
                };
                (tokens, labels, Point::new(x, y))
            }
            LayoutMode::Line => {
                let tokens = interleave(
                    self.texts
                        .iter()
                        .map(String::as_str)
                        .zip(self.colors.iter().copied()),
                    (self.separator.as_str(), self.separator_color),
                );
                let texts: Vec<&str> = tokens.iter().map(|(t, _)| *t).collect();
                let extents = measure_texts(&mut *surface, texts.as_slice(), rotation, self.font_size)
                    .map_err(LabelError::Surface)?;
                let x = match self.side {
                    AxisSide::Primary => anchor.x1,
                    AxisSide::Secondary => anchor.x1 - extents.max_width(),
                };
                let y = middle - extents.total_height() / 2.0;
                (tokens, extents, Point::new(x, y))
            }
        };

        let start = start + Vec2::new(self.x_corr, self.y_corr);
        log::debug!(
            "{} y-label: {} tokens, anchor {:?}, start {:?}",
            self.mode,
            tokens.len(),
            anchor,
            start
        );

        let mut cursor = start;
        let mut out = Vec::with_capacity(tokens.len());
        for (i, (text, fill)) in tokens.into_iter().enumerate() {
            log::trace!("token {text:?} at {cursor:?}");
            out.push(
                LabelMark::new(cursor, text)
                    .with_fill(fill)
                    .with_font_size(self.font_size)
                    .with_angle(rotation)
                    .with_align(self.ha),
            );
            cursor += if self.mode.stacks_vertically() {
                Vec2::new(0.0, extents.heights[i] + self.spacing)
            } else {
                Vec2::new(extents.widths[i] + self.spacing, 0.0)
            };
        }
        Ok(out)
    }

    /// Lays out the label and draws every token onto `surface`.
    pub fn draw<S>(&self, surface: &mut S) -> Result<(), LabelError<S::Error>>
    where
        S: LabelSurface + ?Sized,
    {
        for mark in self.layout(surface)? {
            surface.draw_text(mark).map_err(LabelError::Surface)?;
        }
        Ok(())
    }
}

/// Puts `sep` between every pair of adjacent items (`n` items become `2n - 1`).
fn interleave<T: Copy>(items: impl IntoIterator<Item = T>, sep: T) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.is_empty() {
            out.push(sep);
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::test_surface::{MeasureFailed, RecordingSurface};

    const H: f64 = RecordingSurface::LINE_HEIGHT;

    fn w(text: &str) -> f64 {
        RecordingSurface::width_of(text)
    }

    fn spec(texts: &[&str]) -> YLabelSpec {
        let palette = [css::RED, css::GREEN, css::BLUE, css::ORANGE];
        YLabelSpec::new(
            texts.iter().copied(),
            palette.iter().copied().take(texts.len()),
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interleave_puts_separator_between_items() {
        assert_eq!(interleave([1, 2, 3], 0), vec![1, 0, 2, 0, 3]);
        assert_eq!(interleave([7], 0), vec![7]);
        assert!(interleave(core::iter::empty::<i32>(), 0).is_empty());
    }

    #[test]
    fn mismatched_lengths_fail_before_measuring() {
        let mut s = RecordingSurface::new();
        let label = YLabelSpec::new(["a", "b", "c"], [css::RED, css::BLUE]);
        let err = label.draw(&mut s).unwrap_err();
        assert!(matches!(
            err,
            LabelError::SizeMismatch {
                texts: 3,
                colors: 2
            }
        ));
        assert!(err.is_argument_error());
        assert!(s.measured.is_empty());
        assert!(s.label_requests.is_empty());
        assert!(s.drawn.is_empty());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let mut s = RecordingSurface::new();
        for label in [
            spec(&["a"]).with_font_size(0.0),
            spec(&["a"]).with_font_size(f64::NAN),
            spec(&["a"]).with_spacing(-1.0),
            spec(&["a"]).with_correction(f64::INFINITY, 0.0),
        ] {
            let err = label.draw(&mut s).unwrap_err();
            assert!(matches!(err, LabelError::InvalidValue { .. }));
        }
        assert!(s.measured.is_empty());
    }

    fn draw_with_mode(
        s: &mut RecordingSurface,
        mode: &str,
    ) -> Result<(), LabelError<MeasureFailed>> {
        let mode: LayoutMode = mode.parse()?;
        spec(&["a", "b"]).with_mode(mode).draw(s)
    }

    #[test]
    fn unknown_mode_string_never_reaches_the_surface() {
        let mut s = RecordingSurface::new();
        let err = draw_with_mode(&mut s, "diagonal").unwrap_err();
        assert!(matches!(err, LabelError::InvalidArgument(_)));
        assert!(s.measured.is_empty());
        assert!(s.label_requests.is_empty());
        assert!(s.drawn.is_empty());

        draw_with_mode(&mut s, "rows").unwrap();
        assert_eq!(s.drawn_texts(), ["b", "a"]);
    }

    #[test]
    fn empty_label_set_is_a_no_op() {
        let mut s = RecordingSurface::new();
        spec(&[]).draw(&mut s).unwrap();
        assert!(s.measured.is_empty());
        assert!(s.drawn.is_empty());
    }

    #[test]
    fn rows_draw_in_reverse_and_advance_by_height() {
        let mut s = RecordingSurface::new();
        let label = spec(&["alpha", "be", "gamma!"])
            .with_mode(LayoutMode::Rows)
            .with_spacing(0.125);
        label.draw(&mut s).unwrap();

        assert_eq!(s.drawn_texts(), ["gamma!", "be", "alpha"]);
        assert_eq!(s.drawn[0].fill, css::BLUE);
        assert_eq!(s.drawn[2].fill, css::RED);
        assert!(s.drawn.iter().all(|m| m.angle == 0.0));
        assert!(s.drawn.iter().all(|m| m.baseline == VerticalAlign::Bottom));

        // Bottom-aligned rows are centered on the y midpoint.
        let first = s.drawn[0].pos;
        assert!(close(first.y, 5.0 - 3.0 * H / 2.0));

        // Three heights plus two gaps from the first bottom to the last top.
        let last = s.drawn[2].pos;
        assert!(close(last.y + H - first.y, 3.0 * H + 2.0 * 0.125));
        assert!(s.drawn.iter().all(|m| m.pos.x == first.x));
    }

    #[test]
    fn rows_horizontal_alignment_offsets_from_reference_box() {
        let widest = w("gamma!");
        let ref_x1 = RecordingSurface::new().label_box.x1;
        for (ha, expected) in [
            (HorizontalAlign::Left, ref_x1 - widest),
            (HorizontalAlign::Center, ref_x1 - widest / 2.0),
            (HorizontalAlign::Right, ref_x1),
        ] {
            let mut s = RecordingSurface::new();
            let marks = spec(&["alpha", "gamma!"])
                .with_mode(LayoutMode::Rows)
                .with_ha(ha)
                .layout(&mut s)
                .unwrap();
            assert!(close(marks[0].pos.x, expected), "{ha:?}");
            assert!(marks.iter().all(|m| m.align == ha));
        }
    }

    #[test]
    fn rows_top_alignment_uses_axis_box_top() {
        let mut s = RecordingSurface::new();
        s.axis_box = Rect::new(-1.0, 0.0, 0.0, 8.0);
        let marks = spec(&["a", "b"])
            .with_mode(LayoutMode::Rows)
            .with_va(VerticalAlign::Top)
            .layout(&mut s)
            .unwrap();
        assert!(close(marks[0].pos.y, 8.0 - H));
    }

    #[test]
    fn cols_advance_by_width() {
        let mut s = RecordingSurface::new();
        let label = spec(&["one", "three", "xy"])
            .with_mode(LayoutMode::Cols)
            .with_spacing(0.25);
        label.draw(&mut s).unwrap();

        assert_eq!(s.drawn_texts(), ["one", "three", "xy"]);
        assert!(s.drawn.iter().all(|m| m.angle == 90.0));

        // Rotated text is one line height wide.
        let first = s.drawn[0].pos;
        let last = s.drawn[2].pos;
        assert!(close(last.x + H - first.x, 3.0 * H + 2.0 * 0.25));
        assert!(close(first.x, -1.0 - 2.0 * (H + 0.25)));
        assert!(close(first.y, 5.0));
    }

    #[test]
    fn rows_advance_by_the_height_of_each_drawn_token() {
        let mut s = RecordingSurface::new()
            .with_line_height("alpha", 0.5)
            .with_line_height("be", 1.0)
            .with_line_height("gamma!", 0.125);
        let marks = spec(&["alpha", "be", "gamma!"])
            .with_mode(LayoutMode::Rows)
            .with_spacing(0.25)
            .layout(&mut s)
            .unwrap();

        let texts: Vec<&str> = marks.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["gamma!", "be", "alpha"]);
        let ys: Vec<f64> = marks.iter().map(|m| m.pos.y).collect();
        for (got, want) in ys.iter().zip([4.1875, 4.5625, 5.8125]) {
            assert!(close(*got, want), "{ys:?}");
        }
        for pair in marks.windows(2) {
            let step = pair[1].pos.y - pair[0].pos.y;
            assert!(close(step, s.height_of(&pair[0].text) + 0.25), "{}", pair[0].text);
        }
    }

    #[test]
    fn cols_start_from_the_first_width_and_advance_by_each_width() {
        // Rotated, the line height becomes the width.
        let mut s = RecordingSurface::new()
            .with_line_height("one", 0.25)
            .with_line_height("three", 0.75)
            .with_line_height("xy", 0.5);
        let marks = spec(&["one", "three", "xy"])
            .with_mode(LayoutMode::Cols)
            .with_spacing(0.125)
            .layout(&mut s)
            .unwrap();

        let xs: Vec<f64> = marks.iter().map(|m| m.pos.x).collect();
        assert!(close(xs[0], s.axis_box.x0 - 2.0 * (0.25 + 0.125)), "{xs:?}");
        for (got, want) in xs.iter().zip([-1.75, -1.375, -0.5]) {
            assert!(close(*got, want), "{xs:?}");
        }
        assert!(marks.iter().all(|m| m.pos.y == marks[0].pos.y));
    }

    #[test]
    fn cols_on_the_secondary_side_start_at_the_reference_box() {
        let mut s = RecordingSurface::new()
            .with_line_height("one", 0.25)
            .with_line_height("three", 0.75);
        let marks = spec(&["one", "three"])
            .with_mode(LayoutMode::Cols)
            .with_side(AxisSide::Secondary)
            .with_spacing(0.125)
            .layout(&mut s)
            .unwrap();

        // The anchor moves right by the widest label, the start moves back by it.
        assert!(close(marks[0].pos.x, s.label_box.x0));
        assert!(close(marks[1].pos.x - marks[0].pos.x, 0.25 + 0.125));
    }

    #[test]
    fn cols_top_alignment_drops_by_shortest_label() {
        let mut s = RecordingSurface::new();
        let marks = spec(&["one", "three"])
            .with_mode(LayoutMode::Cols)
            .with_va(VerticalAlign::Top)
            .layout(&mut s)
            .unwrap();
        assert!(close(marks[0].pos.y, 10.0 - w("one")));
    }

    #[test]
    fn line_interleaves_black_separators() {
        let mut s = RecordingSurface::new();
        let label = YLabelSpec::new(["A", "B"], [css::RED, css::BLUE]).with_separator(", ");
        label.draw(&mut s).unwrap();

        assert_eq!(s.drawn_texts(), ["A", ", ", "B"]);
        let fills: Vec<Color> = s.drawn.iter().map(|m| m.fill).collect();
        assert_eq!(fills, [css::RED, css::BLACK, css::BLUE]);
        assert!(s.drawn.iter().all(|m| m.angle == 90.0));
    }

    #[test]
    fn line_is_centered_on_the_axis_midpoint() {
        let mut s = RecordingSurface::new();
        let label = spec(&["volts", "amps"]).with_separator(" | ");
        let marks = label.layout(&mut s).unwrap();
        assert_eq!(marks.len(), 3);

        let total = w("volts") + w(" | ") + w("amps");
        assert!(close(marks[0].pos.y, 5.0 - total / 2.0));
        assert!(close(marks[0].pos.x, s.label_box.x1));
        assert!(marks.iter().all(|m| m.pos.x == marks[0].pos.x));
        // Labels are measured, then the token sequence is measured again.
        assert_eq!(s.measured.len(), 2 + 3);
    }

    #[test]
    fn line_advances_by_each_token_height() {
        let mut s = RecordingSurface::new();
        let marks = spec(&["volts", "amps", "hz"])
            .with_separator(" | ")
            .with_spacing(0.125)
            .layout(&mut s)
            .unwrap();

        let texts: Vec<&str> = marks.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["volts", " | ", "amps", " | ", "hz"]);
        let steps: Vec<f64> = marks.windows(2).map(|p| p[1].pos.y - p[0].pos.y).collect();
        let expected = [
            w("volts") + 0.125,
            w(" | ") + 0.125,
            w("amps") + 0.125,
            w(" | ") + 0.125,
        ];
        assert_eq!(steps.len(), expected.len());
        for (got, want) in steps.iter().zip(expected) {
            assert!(close(*got, want), "{steps:?}");
        }
    }

    #[test]
    fn line_on_the_secondary_side_backs_off_by_the_widest_token() {
        // The separator is wider than any label once rotated.
        let mut s = RecordingSurface::new()
            .with_line_height("volts", 0.75)
            .with_line_height("amps", 0.5)
            .with_line_height(" | ", 1.0);
        let marks = spec(&["volts", "amps"])
            .with_separator(" | ")
            .with_side(AxisSide::Secondary)
            .layout(&mut s)
            .unwrap();

        let expected = s.label_box.x0 + 0.75 - 1.0;
        assert!(marks.iter().all(|m| close(m.pos.x, expected)));
    }

    #[test]
    fn token_counts_per_mode() {
        for (mode, expected) in [
            (LayoutMode::Rows, 4),
            (LayoutMode::Cols, 4),
            (LayoutMode::Line, 7),
        ] {
            let mut s = RecordingSurface::new();
            spec(&["a", "b", "c", "d"])
                .with_mode(mode)
                .draw(&mut s)
                .unwrap();
            assert_eq!(s.drawn.len(), expected, "{mode}");
        }
    }

    #[test]
    fn secondary_side_mirrors_and_shifts_anchor() {
        let reference = Rect::new(2.0, 3.0, 2.5, 7.0);
        let primary = AnchorSpan::new(AxisSide::Primary, reference, 1.25);
        let secondary = AnchorSpan::new(AxisSide::Secondary, reference, 1.25);
        assert_eq!(secondary.x0 - primary.x1, 1.25);
        assert_eq!(secondary.x1 - primary.x0, 1.25);

        let texts = ["short", "much longer"];
        let place = |side| {
            let mut s = RecordingSurface::new();
            spec(&texts)
                .with_mode(LayoutMode::Rows)
                .with_ha(HorizontalAlign::Right)
                .with_side(side)
                .layout(&mut s)
                .unwrap()[0]
                .pos
                .x
        };
        let label_box = RecordingSurface::new().label_box;
        assert!(close(place(AxisSide::Primary), label_box.x1));
        assert!(close(
            place(AxisSide::Secondary),
            label_box.x0 + w("much longer")
        ));
    }

    #[test]
    fn corrections_shift_every_token() {
        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        let base = spec(&["a", "bb"]).with_mode(LayoutMode::Rows);
        let plain = base.layout(&mut a).unwrap();
        let moved = base.with_correction(0.5, -2.0).layout(&mut b).unwrap();
        for (p, m) in plain.iter().zip(&moved) {
            assert!(close(m.pos.x - p.pos.x, 0.5));
            assert!(close(m.pos.y - p.pos.y, -2.0));
        }
    }

    #[test]
    fn surface_failure_propagates_without_drawing() {
        let mut s = RecordingSurface::new().failing_after(1);
        let err = spec(&["a", "b"]).draw(&mut s).unwrap_err();
        assert!(matches!(err, LabelError::Surface(MeasureFailed)));
        assert!(!err.is_argument_error());
        assert!(s.drawn.is_empty());
    }
}
