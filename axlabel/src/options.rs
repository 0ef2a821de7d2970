// Copyright 2025 the Axlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label layout options.
//!
//! Every option is a closed enum. The textual forms parse through [`FromStr`],
//! which is where invalid values are rejected.

use core::fmt;
use core::str::FromStr;

use crate::ParseError;

/// A plot axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl FromStr for Axis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(ParseError::new("axis", s, "`x` or `y`")),
        }
    }
}

/// Which y-axis the labels belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisSide {
    /// The main y-axis, left of the plot.
    #[default]
    Primary,
    /// A twin y-axis, right of the plot.
    Secondary,
}

impl FromStr for AxisSide {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" | "ax1" => Ok(Self::Primary),
            "secondary" | "ax2" => Ok(Self::Secondary),
            _ => Err(ParseError::new(
                "axis side",
                s,
                "`primary` (`ax1`) or `secondary` (`ax2`)",
            )),
        }
    }
}

/// How the label segments are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// All segments on one rotated baseline, joined by a separator.
    #[default]
    Line,
    /// Segments stacked vertically, each horizontal.
    Rows,
    /// Segments side by side, each rotated to read bottom-to-top.
    Cols,
}

impl LayoutMode {
    /// Text rotation in degrees (counter-clockwise) used by this mode.
    pub fn rotation(self) -> f64 {
        match self {
            Self::Rows => 0.0,
            Self::Cols | Self::Line => 90.0,
        }
    }

    /// Returns `true` when the cursor advances along y.
    pub fn stacks_vertically(self) -> bool {
        matches!(self, Self::Rows | Self::Line)
    }

    /// Returns the textual form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rows => "rows",
            Self::Cols => "cols",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "rows" => Ok(Self::Rows),
            "cols" => Ok(Self::Cols),
            _ => Err(ParseError::new(
                "layout mode",
                s,
                "`line`, `rows` or `cols`",
            )),
        }
    }
}

/// Horizontal alignment of a label's bounding box relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Box starts at the position.
    Left,
    /// Box is centered on the position.
    #[default]
    Center,
    /// Box ends at the position.
    Right,
}

impl FromStr for HorizontalAlign {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ParseError::new(
                "horizontal alignment",
                s,
                "`left`, `center` or `right`",
            )),
        }
    }
}

/// Vertical alignment of a label's bounding box relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// Box hangs below the position.
    Top,
    /// Box sits on the position.
    #[default]
    Bottom,
}

impl FromStr for VerticalAlign {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseError::new("vertical alignment", s, "`top` or `bottom`")),
        }
    }
}
