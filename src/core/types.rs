use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart axis. `X` is the independent axis, `Y` the dependent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// One value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Builds a pair by evaluating `f` once per axis, `X` first.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        let x = f(Axis::X);
        let y = f(Axis::Y);
        Self { x, y }
    }

    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> AxisPair<U> {
        AxisPair {
            x: f(Axis::X, self.x),
            y: f(Axis::Y, self.y),
        }
    }

    #[must_use]
    pub fn each_ref(&self) -> AxisPair<&T> {
        AxisPair {
            x: &self.x,
            y: &self.y,
        }
    }
}

impl<T> Index<Axis> for AxisPair<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Axis> for AxisPair<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

/// Per-axis `(start, end)` extent in draw order.
///
/// `start > end` is legal and means the axis runs reversed.
pub type Domain = AxisPair<(f64, f64)>;

/// Screen edge an axis is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    /// Orientation used when an axis component does not set one.
    #[must_use]
    pub const fn default_for(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::Bottom,
            Axis::Y => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingSides {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Padding given either as one number for every side or per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Sides(PaddingSides),
}

impl Default for Padding {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl Padding {
    #[must_use]
    pub fn sides(self) -> PaddingSides {
        match self {
            Self::Uniform(value) => PaddingSides {
                top: value,
                bottom: value,
                left: value,
                right: value,
            },
            Self::Sides(sides) => sides,
        }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.sides().left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.sides().right
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.sides().top
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.sides().bottom
    }
}

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}
