use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Ohlc, StringMap};
use crate::error::{ChartError, ChartResult};

/// Raw data value: numeric, or a categorical string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Encodes a timestamp as unix seconds with millisecond precision.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::Number(datetime_to_unix_seconds(time))
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        decimal_to_f64(value, "value").map(Self::Number)
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Resolves to a plottable number. Strings go through `string_map` and
    /// resolve to `None` when unmapped; non-finite numbers never resolve.
    #[must_use]
    pub fn resolve(&self, string_map: Option<&StringMap>) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(text) => string_map
                .and_then(|map| map.position(text))
                .map(f64::from),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// `true` for a non-empty slice made only of strings.
#[must_use]
pub fn contains_only_strings(values: &[Value]) -> bool {
    !values.is_empty() && values.iter().all(Value::is_text)
}

/// `true` when at least one entry is a string.
#[must_use]
pub fn contains_strings(values: &[Value]) -> bool {
    values.iter().any(Value::is_text)
}

/// One data point of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub x: Value,
    pub y: Value,
    /// Categorical name for the x position, set by data generators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ohlc: Option<Ohlc>,
}

impl Datum {
    #[must_use]
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            x_name: None,
            y_name: None,
            ohlc: None,
        }
    }

    /// Candle datum; `y` carries the close price.
    #[must_use]
    pub fn candle(x: impl Into<Value>, ohlc: Ohlc) -> Self {
        Self {
            x: x.into(),
            y: Value::Number(ohlc.close),
            x_name: None,
            y_name: None,
            ohlc: Some(ohlc),
        }
    }

    #[must_use]
    pub fn with_x_name(mut self, name: impl Into<String>) -> Self {
        self.x_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_y_name(mut self, name: impl Into<String>) -> Self {
        self.y_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn value(&self, axis: Axis) -> &Value {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    #[must_use]
    pub fn name(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::X => self.x_name.as_deref(),
            Axis::Y => self.y_name.as_deref(),
        }
    }

    /// Numeric extent this datum covers on `axis`.
    ///
    /// Candles span `low..=high` on the dependent axis.
    #[must_use]
    pub fn extent(&self, axis: Axis, string_map: Option<&StringMap>) -> Option<(f64, f64)> {
        if axis == Axis::Y {
            if let Some(ohlc) = self.ohlc {
                return Some((ohlc.low, ohlc.high));
            }
        }
        self.value(axis)
            .resolve(string_map)
            .map(|value| (value, value))
    }
}

pub(crate) fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub(crate) fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
