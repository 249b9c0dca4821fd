use std::sync::Arc;

use tracing::debug;

use crate::compose::{ChartLayout, ChartProps};
use crate::core::{Datum, project_candles};
use crate::error::ChartResult;
use crate::render::{Candle, CandleProps, CandleRenderTarget, StyleSpec};

/// Per-datum candle props for a chart layout.
///
/// Every candle shares the chart width and padding, so candle widths split
/// the plot evenly between `data.len()` bands.
pub fn candle_props_for_layout(
    data: &[Arc<Datum>],
    layout: &ChartLayout,
    chart: &ChartProps,
    style: &StyleSpec,
) -> ChartResult<Vec<CandleProps>> {
    let scale = &layout.calculated.scale;
    let geometry = project_candles(
        data,
        scale.x,
        scale.y,
        layout.calculated.string_map.x.as_ref(),
    )?;

    Ok(data
        .iter()
        .zip(geometry)
        .map(|(datum, candle)| CandleProps {
            x: candle.x,
            y: candle.body_top(),
            y1: candle.y1,
            y2: candle.y2,
            high_wick: candle.high_wick,
            low_wick: candle.low_wick,
            candle_height: candle.body_height(),
            padding: chart.padding,
            style: style.clone(),
            ..CandleProps::new(Arc::clone(datum), chart.width, data.len())
        })
        .collect())
}

/// Candles of one series, each with its own update gate.
#[derive(Debug, Clone, Default)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    #[must_use]
    pub fn new(props: Vec<CandleProps>) -> Self {
        Self {
            candles: props.into_iter().map(Candle::mount).collect(),
        }
    }

    /// Offers new props to every candle and returns how many committed.
    ///
    /// Candles beyond the previous length are mounted and count as commits;
    /// surplus candles are dropped.
    pub fn update(&mut self, props: Vec<CandleProps>) -> usize {
        let previous_len = self.candles.len();
        self.candles.truncate(props.len());

        let mut committed = 0;
        for (index, next) in props.into_iter().enumerate() {
            match self.candles.get_mut(index) {
                Some(candle) => {
                    if candle.update(next) {
                        committed += 1;
                    }
                }
                None => {
                    self.candles.push(Candle::mount(next));
                    committed += 1;
                }
            }
        }

        debug!(
            previous_len,
            len = self.candles.len(),
            committed,
            "updated candle series"
        );
        committed
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn render<T: CandleRenderTarget + ?Sized>(&self, target: &mut T) -> ChartResult<()> {
        for candle in &self.candles {
            candle.render(target)?;
        }
        Ok(())
    }
}
