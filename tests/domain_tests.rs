use chart_compose::compose::{
    ChartProps, Component, FALLBACK_DOMAIN, create_string_map, get_domain,
    get_domain_from_children,
};
use chart_compose::core::{Axis, AxisOrientation, Datum, Ohlc};

fn points(values: &[(f64, f64)]) -> Component {
    Component::series(
        "points",
        values.iter().map(|(x, y)| Datum::new(*x, *y)).collect(),
    )
}

#[test]
fn domain_covers_all_data_children() {
    let props = ChartProps::default();
    let children = vec![
        points(&[(1.0, 4.0), (3.0, 2.0)]),
        Component::group("g", vec![points(&[(5.0, 10.0)])]),
    ];

    assert_eq!(get_domain(&props, &children, Axis::X, None), (1.0, 5.0));
    assert_eq!(get_domain(&props, &children, Axis::Y, None), (2.0, 10.0));
}

#[test]
fn chart_domain_override_wins() {
    let props = ChartProps::default().with_domain(Axis::Y, (-5.0, 5.0));
    let children = vec![points(&[(1.0, 100.0)])];

    assert_eq!(get_domain(&props, &children, Axis::Y, None), (-5.0, 5.0));
}

#[test]
fn component_domain_hint_replaces_its_data() {
    let props = ChartProps::default();
    let children = vec![
        points(&[(1.0, 100.0)]).with_domain(Axis::Y, (0.0, 50.0)),
        points(&[(2.0, 20.0)]),
    ];

    assert_eq!(
        get_domain_from_children(&props, &children, Axis::Y, None),
        (0.0, 50.0)
    );
}

#[test]
fn candle_data_spans_low_to_high() {
    let props = ChartProps::default();
    let children = vec![Component::series(
        "candles",
        vec![
            Datum::candle(1.0, Ohlc::new(10.0, 14.0, 8.0, 12.0).expect("ohlc")),
            Datum::candle(2.0, Ohlc::new(12.0, 20.0, 11.0, 19.0).expect("ohlc")),
        ],
    )];

    assert_eq!(get_domain(&props, &children, Axis::Y, None), (8.0, 20.0));
    assert_eq!(get_domain(&props, &children, Axis::X, None), (1.0, 2.0));
}

#[test]
fn categorical_values_resolve_through_string_map() {
    let props = ChartProps::default();
    let children = vec![Component::series(
        "bars",
        vec![
            Datum::new("a", 1.0),
            Datum::new("b", 3.0),
            Datum::new("c", 2.0),
        ],
    )];
    let string_map = create_string_map(&children, Axis::X);

    assert_eq!(
        get_domain(&props, &children, Axis::X, string_map.as_ref()),
        (1.0, 3.0)
    );
}

#[test]
fn axis_tick_values_extend_their_axis_only() {
    let props = ChartProps::default();
    let children = vec![
        points(&[(2.0, 2.0), (5.0, 3.0)]),
        Component::axis("x").with_tick_values(vec![0.0.into(), 10.0.into()]),
    ];

    assert_eq!(get_domain(&props, &children, Axis::X, None), (0.0, 10.0));
    assert_eq!(get_domain(&props, &children, Axis::Y, None), (2.0, 3.0));
}

#[test]
fn top_independent_axis_reverses_dependent_domain() {
    let props = ChartProps::default();
    let children = vec![
        points(&[(0.0, 1.0), (4.0, 9.0)]),
        Component::axis("x").with_orientation(AxisOrientation::Top),
        Component::dependent_axis("y"),
    ];

    assert_eq!(get_domain(&props, &children, Axis::Y, None), (9.0, 1.0));
    assert_eq!(get_domain(&props, &children, Axis::X, None), (0.0, 4.0));
}

#[test]
fn empty_tree_uses_fallback_domain() {
    let props = ChartProps::default();
    assert_eq!(get_domain(&props, &[], Axis::X, None), FALLBACK_DOMAIN);
}
