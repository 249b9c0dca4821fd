use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Datum, Padding};
use crate::error::ChartResult;
use crate::render::{Style, StyleSpec};

const DEFAULT_SHAPE_RENDERING: &str = "auto";
const DEFAULT_WICK_ROLE: &str = "presentation";

/// Inputs of one candle, in pixel space.
#[derive(Debug, Clone)]
pub struct CandleProps {
    /// Horizontal center of body and wicks.
    pub x: f64,
    /// Top edge of the body.
    pub y: f64,
    /// Upper bound of the body; the high wick ends here.
    pub y1: f64,
    /// Lower bound of the body; the low wick starts here.
    pub y2: f64,
    pub high_wick: f64,
    pub low_wick: f64,
    pub candle_height: f64,
    /// Width available to the whole series.
    pub width: f64,
    pub padding: Padding,
    /// Number of candles sharing `width`.
    pub data_len: usize,
    pub datum: Arc<Datum>,
    pub active: bool,
    pub style: StyleSpec,
    pub class_name: Option<String>,
    pub role: Option<String>,
    pub shape_rendering: Option<String>,
}

impl CandleProps {
    /// Props with an empty style and no padding; geometry is set per field.
    #[must_use]
    pub fn new(datum: Arc<Datum>, width: f64, data_len: usize) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            y1: 0.0,
            y2: 0.0,
            high_wick: 0.0,
            low_wick: 0.0,
            candle_height: 0.0,
            width,
            padding: Padding::default(),
            data_len,
            datum,
            active: false,
            style: StyleSpec::default(),
            class_name: None,
            role: None,
            shape_rendering: None,
        }
    }
}

/// Style and width derived from props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleAttributes {
    pub style: Style,
    pub candle_width: f64,
}

/// Evaluates the style and picks the body width.
///
/// A non-zero style width wins. Otherwise a candle takes half of its band:
/// `0.5 * (width - 2 * padding_left) / data_len`.
#[must_use]
pub fn candle_attributes(props: &CandleProps) -> CandleAttributes {
    let style = props.style.evaluate(&props.datum, props.active);
    let padding = props.padding.left();
    let candle_width = style
        .width
        .filter(|width| *width != 0.0 && !width.is_nan())
        .unwrap_or_else(|| 0.5 * (props.width - 2.0 * padding) / props.data_len.max(1) as f64);
    CandleAttributes {
        style,
        candle_width,
    }
}

/// Which end of the body a wick hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WickKind {
    High,
    Low,
}

/// Zero-width vertical line from the body to a high/low extreme.
#[derive(Debug, Clone, PartialEq)]
pub struct WickShape {
    pub kind: WickKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: Style,
    pub role: String,
    pub shape_rendering: String,
    pub class_name: Option<String>,
}

/// Candle body rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: Style,
    pub role: Option<String>,
    pub shape_rendering: String,
    pub class_name: Option<String>,
}

/// Drawing backend for candles.
///
/// Geometry and style are computed by [`Candle`]; implementors only decide
/// how a wick and a body become output.
pub trait CandleRenderTarget {
    fn render_wick(&mut self, wick: &WickShape) -> ChartResult<()>;

    fn render_candle(&mut self, candle: &CandleShape) -> ChartResult<()>;
}

/// Fields whose change forces a re-render.
#[derive(Debug, Clone)]
struct WatchedFields {
    class_name: Option<String>,
    candle_height: f64,
    x: f64,
    y: f64,
    y1: f64,
    y2: f64,
    datum: Arc<Datum>,
}

impl WatchedFields {
    fn of(props: &CandleProps) -> Self {
        Self {
            class_name: props.class_name.clone(),
            candle_height: props.candle_height,
            x: props.x,
            y: props.y,
            y1: props.y1,
            y2: props.y2,
            datum: Arc::clone(&props.datum),
        }
    }
}

impl PartialEq for WatchedFields {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.candle_height == other.candle_height
            && self.x == other.x
            && self.y == other.y
            && self.y1 == other.y1
            && self.y2 == other.y2
            && Arc::ptr_eq(&self.datum, &other.datum)
    }
}

/// One candlestick: a body and two wicks.
///
/// Derived attributes are cached together with the watched props they were
/// computed from. [`Candle::update`] replaces props, key and attributes in
/// one step, and only when something visible changed.
#[derive(Debug, Clone)]
pub struct Candle {
    props: CandleProps,
    watched: WatchedFields,
    attributes: CandleAttributes,
}

impl Candle {
    #[must_use]
    pub fn mount(props: CandleProps) -> Self {
        let attributes = candle_attributes(&props);
        let watched = WatchedFields::of(&props);
        Self {
            props,
            watched,
            attributes,
        }
    }

    /// Offers new props; returns `true` when they were committed.
    ///
    /// Changes limited to unwatched props (wick extents, padding, role,
    /// shape rendering) are not committed.
    pub fn update(&mut self, next: CandleProps) -> bool {
        let attributes = candle_attributes(&next);
        let watched = WatchedFields::of(&next);
        if watched == self.watched && attributes == self.attributes {
            trace!(x = next.x, "candle unchanged; skipping render");
            return false;
        }

        trace!(
            x = next.x,
            candle_width = attributes.candle_width,
            "candle changed; committing"
        );
        self.props = next;
        self.watched = watched;
        self.attributes = attributes;
        true
    }

    #[must_use]
    pub fn props(&self) -> &CandleProps {
        &self.props
    }

    #[must_use]
    pub fn attributes(&self) -> CandleAttributes {
        self.attributes
    }

    #[must_use]
    pub fn candle_width(&self) -> f64 {
        self.attributes.candle_width
    }

    #[must_use]
    pub fn candle_shape(&self) -> CandleShape {
        let props = &self.props;
        CandleShape {
            x: props.x - self.attributes.candle_width / 2.0,
            y: props.y,
            width: self.attributes.candle_width,
            height: props.candle_height,
            style: self.attributes.style,
            role: props.role.clone(),
            shape_rendering: shape_rendering(props),
            class_name: props.class_name.clone(),
        }
    }

    #[must_use]
    pub fn wick_shape(&self, kind: WickKind) -> WickShape {
        let props = &self.props;
        let (y1, y2) = match kind {
            WickKind::High => (props.y1, props.high_wick),
            WickKind::Low => (props.low_wick, props.y2),
        };
        WickShape {
            kind,
            x1: props.x,
            y1,
            x2: props.x,
            y2,
            style: self.attributes.style.for_wick(),
            role: props
                .role
                .clone()
                .unwrap_or_else(|| DEFAULT_WICK_ROLE.to_owned()),
            shape_rendering: shape_rendering(props),
            class_name: props.class_name.clone(),
        }
    }

    /// High wick, low wick, in draw order.
    #[must_use]
    pub fn wick_shapes(&self) -> SmallVec<[WickShape; 2]> {
        [WickKind::High, WickKind::Low]
            .into_iter()
            .map(|kind| self.wick_shape(kind))
            .collect()
    }

    /// Emits the high wick, the low wick, then the body.
    pub fn render<T: CandleRenderTarget + ?Sized>(&self, target: &mut T) -> ChartResult<()> {
        for wick in self.wick_shapes() {
            target.render_wick(&wick)?;
        }
        target.render_candle(&self.candle_shape())
    }
}

fn shape_rendering(props: &CandleProps) -> String {
    props
        .shape_rendering
        .clone()
        .unwrap_or_else(|| DEFAULT_SHAPE_RENDERING.to_owned())
}
