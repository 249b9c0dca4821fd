use std::sync::Arc;

use chart_compose::core::{Datum, LinearScale, Ohlc, Padding, project_candles};
use chart_compose::render::{Candle, CandleProps, WickKind, candle_attributes};
use proptest::prelude::*;

proptest! {
    #[test]
    fn projected_candle_keeps_body_inside_wicks(
        base in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        open_factor in 0.0f64..1.0,
        close_factor in 0.0f64..1.0
    ) {
        let low = base;
        let high = base + span;
        let open = low + open_factor * span;
        let close = low + close_factor * span;

        let datum = Arc::new(Datum::candle(0.0, Ohlc::new(open, high, low, close).expect("ohlc")));
        let x_scale = LinearScale::new((-1.0, 1.0), (0.0, 400.0)).expect("x scale");
        let y_scale = LinearScale::new((low, high), (300.0, 0.0)).expect("y scale");

        let projected = project_candles(&[datum], x_scale, y_scale, None).expect("projection");
        let c = projected[0];

        prop_assert!(c.high_wick <= c.body_top() + 1e-9);
        prop_assert!(c.body_top() + c.body_height() <= c.low_wick + 1e-9);
        prop_assert!(c.body_height() >= 0.0);
        prop_assert_eq!(c.is_bullish, close >= open);
    }

    #[test]
    fn computed_width_splits_the_band(
        width in 50.0f64..2_000.0,
        padding in 0.0f64..20.0,
        data_len in 1usize..200
    ) {
        let datum = Arc::new(Datum::new(0.0, 0.0));
        let props = CandleProps {
            padding: Padding::Uniform(padding),
            ..CandleProps::new(datum, width, data_len)
        };

        let candle_width = candle_attributes(&props).candle_width;
        let expected = 0.5 * (width - 2.0 * padding) / data_len as f64;
        prop_assert!((candle_width - expected).abs() <= 1e-9);
        prop_assert!(candle_width * data_len as f64 <= width);
    }

    #[test]
    fn wick_changes_alone_never_commit(
        high_wick in -500.0f64..500.0,
        low_wick in -500.0f64..500.0
    ) {
        let datum = Arc::new(Datum::new(0.0, 0.0));
        let props = CandleProps {
            x: 10.0,
            y: 20.0,
            y1: 20.0,
            y2: 30.0,
            candle_height: 10.0,
            ..CandleProps::new(datum, 400.0, 10)
        };
        let mut candle = Candle::mount(props.clone());

        let mut next = props;
        next.high_wick = high_wick;
        next.low_wick = low_wick;
        prop_assert!(!candle.update(next));
        prop_assert_eq!(candle.wick_shape(WickKind::High).y2, 0.0);
    }
}
