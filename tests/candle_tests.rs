use std::sync::Arc;

use approx::assert_abs_diff_eq;
use chart_compose::core::{Datum, Ohlc, Padding, PaddingSides};
use chart_compose::render::{
    Candle, CandleProps, CandleRenderTarget, CandleShape, Color, StyleSpec, StyleValue, WickKind,
    WickShape, candle_attributes,
};
use chart_compose::ChartResult;

fn datum() -> Arc<Datum> {
    Arc::new(Datum::candle(
        1.0,
        Ohlc::new(10.0, 20.0, 5.0, 15.0).expect("ohlc"),
    ))
}

fn base_props(datum: Arc<Datum>) -> CandleProps {
    CandleProps {
        x: 50.0,
        y: 20.0,
        y1: 20.0,
        y2: 40.0,
        high_wick: 5.0,
        low_wick: 60.0,
        candle_height: 20.0,
        padding: Padding::Uniform(10.0),
        ..CandleProps::new(datum, 100.0, 4)
    }
}

#[derive(Default)]
struct RecordingTarget {
    events: Vec<String>,
}

impl CandleRenderTarget for RecordingTarget {
    fn render_wick(&mut self, wick: &WickShape) -> ChartResult<()> {
        self.events.push(format!("wick:{:?}", wick.kind));
        Ok(())
    }

    fn render_candle(&mut self, _candle: &CandleShape) -> ChartResult<()> {
        self.events.push("body".to_owned());
        Ok(())
    }
}

#[test]
fn width_is_half_the_band_without_style_width() {
    let attributes = candle_attributes(&base_props(datum()));
    assert_abs_diff_eq!(attributes.candle_width, 10.0, epsilon = 1e-9);
}

#[test]
fn style_width_overrides_computed_width() {
    let mut props = base_props(datum());
    props.style = StyleSpec::default().with_width(7.0);
    assert_abs_diff_eq!(candle_attributes(&props).candle_width, 7.0, epsilon = 1e-9);

    props.style = StyleSpec::default().with_width(0.0);
    assert_abs_diff_eq!(candle_attributes(&props).candle_width, 10.0, epsilon = 1e-9);
}

#[test]
fn only_left_padding_narrows_the_band() {
    let mut props = base_props(datum());
    props.padding = Padding::Sides(PaddingSides {
        top: 0.0,
        bottom: 0.0,
        left: 30.0,
        right: 0.0,
    });
    assert_abs_diff_eq!(candle_attributes(&props).candle_width, 5.0, epsilon = 1e-9);
}

#[test]
fn body_is_centered_on_x() {
    let candle = Candle::mount(base_props(datum()));
    let body = candle.candle_shape();

    assert_abs_diff_eq!(body.x, 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.y, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.width, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.height, 20.0, epsilon = 1e-9);
    assert_eq!(body.role, None);
    assert_eq!(body.shape_rendering, "auto");
}

#[test]
fn wicks_hang_from_the_body_edges() {
    let candle = Candle::mount(base_props(datum()));

    let high = candle.wick_shape(WickKind::High);
    assert_eq!((high.x1, high.y1, high.x2, high.y2), (50.0, 20.0, 50.0, 5.0));
    assert_eq!(high.role, "presentation");

    let low = candle.wick_shape(WickKind::Low);
    assert_eq!((low.x1, low.y1, low.x2, low.y2), (50.0, 60.0, 50.0, 40.0));
}

#[test]
fn wick_stroke_width_overrides_stroke_width_for_wicks_only() {
    let mut props = base_props(datum());
    props.style = StyleSpec::default()
        .with_stroke_width(2.0)
        .with_wick_stroke_width(1.0);
    let candle = Candle::mount(props);

    assert_eq!(candle.wick_shape(WickKind::High).style.stroke_width, Some(1.0));
    assert_eq!(candle.candle_shape().style.stroke_width, Some(2.0));

    let mut props = base_props(datum());
    props.style = StyleSpec::default().with_stroke_width(3.0);
    let candle = Candle::mount(props);
    assert_eq!(candle.wick_shape(WickKind::Low).style.stroke_width, Some(3.0));
}

#[test]
fn stroke_defaults_to_black() {
    let candle = Candle::mount(base_props(datum()));
    assert_eq!(candle.attributes().style.stroke, Color::BLACK);
    assert_eq!(candle.attributes().style.fill, None);
}

#[test]
fn computed_style_sees_datum_and_active_state() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let green = Color::rgb(0.0, 1.0, 0.0);
    let style = StyleSpec::default()
        .with_fill(StyleValue::computed(move |datum: &Datum, _active| {
            match datum.ohlc {
                Some(ohlc) if ohlc.is_bullish() => green,
                _ => red,
            }
        }))
        .with_stroke_width(StyleValue::computed(|_datum: &Datum, active| {
            if active { 3.0_f64 } else { 1.0 }
        }));

    let mut props = base_props(datum());
    props.style = style;
    let idle = Candle::mount(props.clone());
    assert_eq!(idle.attributes().style.fill, Some(green));
    assert_eq!(idle.attributes().style.stroke_width, Some(1.0));

    props.active = true;
    let active = Candle::mount(props);
    assert_eq!(active.attributes().style.stroke_width, Some(3.0));
}

#[test]
fn identical_props_do_not_commit() {
    let props = base_props(datum());
    let mut candle = Candle::mount(props.clone());
    assert!(!candle.update(props));
}

#[test]
fn new_datum_identity_commits_even_with_equal_contents() {
    let mut candle = Candle::mount(base_props(datum()));
    assert!(candle.update(base_props(datum())));
}

#[test]
fn unwatched_wick_extent_change_is_not_committed() {
    let props = base_props(datum());
    let mut candle = Candle::mount(props.clone());

    let mut next = props;
    next.high_wick = 1.0;
    assert!(!candle.update(next));
    assert_eq!(candle.wick_shape(WickKind::High).y2, 5.0);
}

#[test]
fn watched_changes_commit_and_refresh_shapes() {
    let props = base_props(datum());
    let mut candle = Candle::mount(props.clone());

    let mut next = props.clone();
    next.class_name = Some("up".to_owned());
    assert!(candle.update(next));
    assert_eq!(candle.candle_shape().class_name.as_deref(), Some("up"));

    let mut wider = props;
    wider.class_name = Some("up".to_owned());
    wider.width = 200.0;
    assert!(candle.update(wider));
    assert_abs_diff_eq!(candle.candle_width(), 22.5, epsilon = 1e-9);
}

#[test]
fn render_emits_high_wick_low_wick_then_body() {
    let candle = Candle::mount(base_props(datum()));
    let mut target = RecordingTarget::default();

    candle.render(&mut target).expect("render");

    assert_eq!(target.events, vec!["wick:High", "wick:Low", "body"]);
}
