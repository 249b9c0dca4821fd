use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::datum::decimal_to_f64;
use crate::core::{Datum, LinearScale, Scale, StringMap};
use crate::error::{ChartError, ChartResult};

/// Open/high/low/close prices of one candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Ohlc {
    /// Builds validated prices.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimal(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub x: f64,
    /// Pixel of `max(open, close)`.
    pub y1: f64,
    /// Pixel of `min(open, close)`.
    pub y2: f64,
    pub high_wick: f64,
    pub low_wick: f64,
    pub is_bullish: bool,
}

impl CandleGeometry {
    /// Topmost body pixel.
    #[must_use]
    pub fn body_top(self) -> f64 {
        self.y1.min(self.y2)
    }

    #[must_use]
    pub fn body_height(self) -> f64 {
        (self.y1 - self.y2).abs()
    }
}

/// Projects candle data through the chart scales.
///
/// Pure and side-effect free. Fails on the first datum without OHLC prices
/// or with an x value that cannot be resolved.
pub fn project_candles(
    data: &[Arc<Datum>],
    x_scale: LinearScale,
    y_scale: LinearScale,
    x_string_map: Option<&StringMap>,
) -> ChartResult<Vec<CandleGeometry>> {
    #[cfg(feature = "parallel-projection")]
    {
        data.par_iter()
            .map(|datum| project_single_candle(datum, x_scale, y_scale, x_string_map))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        data.iter()
            .map(|datum| project_single_candle(datum, x_scale, y_scale, x_string_map))
            .collect()
    }
}

fn project_single_candle(
    datum: &Datum,
    x_scale: LinearScale,
    y_scale: LinearScale,
    x_string_map: Option<&StringMap>,
) -> ChartResult<CandleGeometry> {
    let ohlc = datum
        .ohlc
        .ok_or_else(|| ChartError::InvalidData("candle datum must carry ohlc".to_owned()))?;
    let x = datum.x.resolve(x_string_map).ok_or_else(|| {
        ChartError::InvalidData(format!("candle x value {:?} cannot be resolved", datum.x))
    })?;

    Ok(CandleGeometry {
        x: x_scale.map(x),
        y1: y_scale.map(ohlc.open.max(ohlc.close)),
        y2: y_scale.map(ohlc.open.min(ohlc.close)),
        high_wick: y_scale.map(ohlc.high),
        low_wick: y_scale.map(ohlc.low),
        is_bullish: ohlc.is_bullish(),
    })
}
