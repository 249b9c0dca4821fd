use std::fmt;
use std::sync::Arc;

use crate::core::Datum;
use crate::render::Color;

type StyleFn<T> = Arc<dyn Fn(&Datum, bool) -> T + Send + Sync>;

/// A style attribute that is either fixed or computed from the datum and
/// its active (highlighted) state.
#[derive(Clone)]
pub enum StyleValue<T> {
    Fixed(T),
    Computed(StyleFn<T>),
}

impl<T: Copy> StyleValue<T> {
    pub fn computed(f: impl Fn(&Datum, bool) -> T + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    #[must_use]
    pub fn evaluate(&self, datum: &Datum, active: bool) -> T {
        match self {
            Self::Fixed(value) => *value,
            Self::Computed(f) => f(datum, active),
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for StyleValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Style as supplied by the caller, before evaluation.
#[derive(Debug, Clone, Default)]
pub struct StyleSpec {
    pub stroke: Option<StyleValue<Color>>,
    pub fill: Option<StyleValue<Color>>,
    pub stroke_width: Option<StyleValue<f64>>,
    /// Stroke width of wicks; wicks use `stroke_width` when unset.
    pub wick_stroke_width: Option<StyleValue<f64>>,
    /// Fixed candle body width, bypassing the computed one.
    pub width: Option<StyleValue<f64>>,
    pub opacity: Option<StyleValue<f64>>,
}

impl StyleSpec {
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<StyleValue<Color>>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<StyleValue<Color>>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: impl Into<StyleValue<f64>>) -> Self {
        self.stroke_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_wick_stroke_width(mut self, width: impl Into<StyleValue<f64>>) -> Self {
        self.wick_stroke_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<StyleValue<f64>>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: impl Into<StyleValue<f64>>) -> Self {
        self.opacity = Some(opacity.into());
        self
    }

    /// Resolves every attribute for `datum`. Stroke defaults to black.
    #[must_use]
    pub fn evaluate(&self, datum: &Datum, active: bool) -> Style {
        let eval_color = |value: &Option<StyleValue<Color>>| {
            value.as_ref().map(|value| value.evaluate(datum, active))
        };
        let eval_number = |value: &Option<StyleValue<f64>>| {
            value.as_ref().map(|value| value.evaluate(datum, active))
        };

        Style {
            stroke: eval_color(&self.stroke).unwrap_or(Color::BLACK),
            fill: eval_color(&self.fill),
            stroke_width: eval_number(&self.stroke_width),
            wick_stroke_width: eval_number(&self.wick_stroke_width),
            width: eval_number(&self.width),
            opacity: eval_number(&self.opacity),
        }
    }
}

/// Evaluated style of one drawn shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: Color,
    pub fill: Option<Color>,
    pub stroke_width: Option<f64>,
    pub wick_stroke_width: Option<f64>,
    pub width: Option<f64>,
    pub opacity: Option<f64>,
}

impl Style {
    /// Wick variant: stroke width taken from `wick_stroke_width` when set.
    #[must_use]
    pub fn for_wick(self) -> Self {
        Self {
            stroke_width: self.wick_stroke_width.or(self.stroke_width),
            ..self
        }
    }

    /// Inline CSS declarations, e.g. `stroke:rgba(0,0,0,1);stroke-width:2`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut declarations = vec![format!("stroke:{}", self.stroke.to_css())];
        if let Some(fill) = self.fill {
            declarations.push(format!("fill:{}", fill.to_css()));
        }
        if let Some(width) = self.stroke_width {
            declarations.push(format!("stroke-width:{width}"));
        }
        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity:{opacity}"));
        }
        declarations.join(";")
    }
}
