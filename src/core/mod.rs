pub mod candlestick;
pub mod datum;
pub mod scale;
pub mod string_map;
pub mod tick_format;
pub mod types;

pub use candlestick::{CandleGeometry, Ohlc, project_candles};
pub use datum::{Datum, Value, contains_only_strings, contains_strings};
pub use scale::{DEFAULT_TICK_COUNT, LinearScale, Scale};
pub use string_map::StringMap;
pub use tick_format::TickFormatter;
pub use types::{
    Axis, AxisOrientation, AxisPair, Domain, Padding, PaddingSides, Viewport,
};
