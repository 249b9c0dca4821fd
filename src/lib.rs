//! chart-compose: declarative chart composition.
//!
//! A chart is described as a tree of [`compose::Component`]s. The
//! [`compose`] helpers pick its axes and derive domains, categorical string
//! maps, ticks, tick formatters and axis offsets; [`render`] turns OHLC data
//! into candlestick shapes for SVG or backend-agnostic render frames.

pub mod compose;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use compose::{ChartLayout, ChartProps, Component, DefaultAxes};
pub use error::{ChartError, ChartResult};
