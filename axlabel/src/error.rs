// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// A textual option (axis, side, mode, alignment, color) that is not one of the accepted values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} `{value}`, expected {expected}")]
pub struct ParseError {
    /// What was being parsed (e.g. `"layout mode"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Human readable list of accepted values.
    pub expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}

/// Errors returned when laying out or drawing labels.
///
/// `E` is the error type of the [`LabelSurface`](crate::LabelSurface) in use.
#[derive(Debug, Error)]
pub enum LabelError<E> {
    /// The number of label texts and colors differ.
    #[error("got {texts} label texts but {colors} colors, the counts must match")]
    SizeMismatch {
        /// Number of texts.
        texts: usize,
        /// Number of colors.
        colors: usize,
    },
    /// A textual option could not be parsed.
    #[error(transparent)]
    InvalidArgument(#[from] ParseError),
    /// A numeric option is out of range (non-finite, or negative where it must not be).
    #[error("invalid {name}: {value}")]
    InvalidValue {
        /// Option name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The rendering surface failed to measure or draw.
    #[error("rendering surface failed")]
    Surface(#[source] E),
}

impl<E> LabelError<E> {
    /// Returns `true` for failures raised by argument validation (before any drawing).
    pub fn is_argument_error(&self) -> bool {
        !matches!(self, Self::Surface(_))
    }
}
