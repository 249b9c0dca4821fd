mod candle;
mod frame;
mod null_renderer;
mod primitives;
mod series;
mod style;
mod svg;

pub use candle::{
    Candle, CandleAttributes, CandleProps, CandleRenderTarget, CandleShape, WickKind, WickShape,
    candle_attributes,
};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive};
pub use series::{CandleSeries, candle_props_for_layout};
pub use style::{Style, StyleSpec, StyleValue};
pub use svg::SvgGroup;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from layout and candle logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
