// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry queries and text probes against a [`LabelSurface`].
//!
//! Everything here returns data-space quantities, so layout code can add
//! measured extents straight onto axis coordinates.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::{Axis, AxisSide, ExtentMeasurer, LabelSurface, TextProbe};

/// Text of the phantom y-axis label used to find the reference box.
pub const PHANTOM_LABEL: &str = "this is vertical label";

/// Fixed data-space point at which measurement probes are centered.
pub const PROBE_ANCHOR: Point = Point::new(0.5, 0.5);

/// Returns the midpoint of the current value range of `axis`.
pub fn half_axis_coord<S: LabelSurface + ?Sized>(surface: &S, axis: Axis) -> f64 {
    let (min, max) = surface.axis_range(axis);
    (min + max) / 2.0
}

/// Per-text widths and heights, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extents {
    /// Data-space widths.
    pub widths: SmallVec<[f64; 8]>,
    /// Data-space heights.
    pub heights: SmallVec<[f64; 8]>,
}

impl Extents {
    /// Number of measured texts.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns `true` when nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Largest width, or `0` when empty.
    pub fn max_width(&self) -> f64 {
        fold_or_zero(&self.widths, f64::max)
    }

    /// Smallest width, or `0` when empty.
    pub fn min_width(&self) -> f64 {
        fold_or_zero(&self.widths, f64::min)
    }

    /// Largest height, or `0` when empty.
    pub fn max_height(&self) -> f64 {
        fold_or_zero(&self.heights, f64::max)
    }

    /// Smallest height, or `0` when empty.
    pub fn min_height(&self) -> f64 {
        fold_or_zero(&self.heights, f64::min)
    }

    /// Sum of all widths.
    pub fn total_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Sum of all heights.
    pub fn total_height(&self) -> f64 {
        self.heights.iter().sum()
    }

    fn push(&mut self, bbox: Rect) {
        self.widths.push(bbox.width());
        self.heights.push(bbox.height());
    }

    pub(crate) fn reversed(&self) -> Self {
        Self {
            widths: self.widths.iter().rev().copied().collect(),
            heights: self.heights.iter().rev().copied().collect(),
        }
    }
}

fn fold_or_zero(values: &[f64], f: fn(f64, f64) -> f64) -> f64 {
    let mut it = values.iter().copied();
    match it.next() {
        Some(first) => it.fold(first, f),
        None => 0.0,
    }
}

/// Measures every text in `texts` at [`PROBE_ANCHOR`] with the given rotation and font size.
///
/// Probes run one after another; a failure aborts the remaining ones.
pub fn measure_texts<M, S>(
    measurer: &mut M,
    texts: &[S],
    angle: f64,
    font_size: f64,
) -> Result<Extents, M::Error>
where
    M: ExtentMeasurer + ?Sized,
    S: AsRef<str>,
{
    let mut out = Extents::default();
    for text in texts {
        let probe = TextProbe {
            text: text.as_ref(),
            font_size,
            angle,
            pos: PROBE_ANCHOR,
        };
        let bbox = measurer.text_extent(&probe)?;
        log::trace!(
            "probe {:?} at {angle}deg: {} x {}",
            probe.text,
            bbox.width(),
            bbox.height()
        );
        out.push(bbox);
    }
    Ok(out)
}

/// Returns the box a default y-axis label on `side` would occupy.
///
/// This anchors label placement without requiring a real axis label to exist.
pub fn reference_box<S: LabelSurface + ?Sized>(
    surface: &mut S,
    side: AxisSide,
    font_size: f64,
) -> Result<Rect, S::Error> {
    let probe = TextProbe {
        text: PHANTOM_LABEL,
        font_size,
        angle: 90.0,
        pos: PROBE_ANCHOR,
    };
    surface.axis_label_box(side, &probe)
}
