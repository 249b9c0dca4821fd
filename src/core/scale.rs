use serde::{Deserialize, Serialize};

use crate::core::TickFormatter;
use crate::error::{ChartError, ChartResult};

/// Tick count used when a caller does not ask for a specific density.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Per-axis mapping from data space to pixel space.
pub trait Scale {
    fn map(&self, value: f64) -> f64;

    fn invert(&self, pixel: f64) -> f64;

    /// Formatter the scale prefers for its own ticks, if any.
    fn tick_format(&self) -> Option<TickFormatter> {
        None
    }
}

/// Linear mapping of `domain` onto `range`.
///
/// Either interval may run backwards; the y axis of a chart typically maps
/// onto a descending pixel range. `tick_count` is the density both the
/// scale's ticks and its label formatter are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default = "default_tick_count")]
    tick_count: usize,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || domain_start == domain_end
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(ChartError::InvalidScale {
                domain_start,
                domain_end,
                range_start,
                range_end,
            });
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
            tick_count: DEFAULT_TICK_COUNT,
        })
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn tick_count(self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Round tick values covering the domain, ordered like the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let reversed = self.domain_end < self.domain_start;
        let (lo, hi) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let step = tick_step(lo, hi, count);
        let mut ticks = Vec::new();
        if step >= 1.0 {
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            ticks.extend((first..=last).map(|i| i as f64 * step));
        } else {
            // Divide by the inverse step so decimal ticks come out exact.
            let inverse = (1.0 / step).round();
            let first = (lo * inverse).ceil() as i64;
            let last = (hi * inverse).floor() as i64;
            ticks.extend((first..=last).map(|i| i as f64 / inverse));
        }

        if reversed {
            ticks.reverse();
        }
        ticks
    }

    /// Fixed-precision formatter matching the step of `ticks(count)`.
    #[must_use]
    pub fn tick_format_for(self, count: usize) -> TickFormatter {
        let step = tick_step(self.domain_start, self.domain_end, count);
        let precision = (-step.log10().floor()).max(0.0) as usize;
        TickFormatter::Fixed { precision }
    }
}

impl Scale for LinearScale {
    fn map(&self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    fn tick_format(&self) -> Option<TickFormatter> {
        Some(self.tick_format_for(self.tick_count))
    }
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

/// Step in the 1/2/5 x 10^k family closest to `span / count`.
fn tick_step(start: f64, end: f64, count: usize) -> f64 {
    let raw = (end - start).abs() / count.max(1) as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}
