use approx::assert_abs_diff_eq;
use chart_compose::compose::{ChartLayout, ChartProps, Component, DefaultAxes};
use chart_compose::core::{AxisOrientation, Datum, Padding};

fn props() -> ChartProps {
    ChartProps::new(400.0, 300.0).with_padding(Padding::Uniform(50.0))
}

fn points(values: &[(f64, f64)]) -> Component {
    Component::series(
        "points",
        values.iter().map(|(x, y)| Datum::new(*x, *y)).collect(),
    )
}

#[test]
fn axes_cross_at_origin_for_positive_data() {
    let children = vec![points(&[(0.0, 0.0), (10.0, 100.0)])];
    let layout = ChartLayout::compute(&props(), &children, &DefaultAxes::default())
        .expect("layout");

    assert_abs_diff_eq!(layout.axis_offset.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.axis_offset.y, 50.0, epsilon = 1e-9);
}

#[test]
fn origin_is_zero_when_domain_straddles_it() {
    let children = vec![points(&[(-10.0, 0.0), (10.0, 100.0)])];
    let layout = ChartLayout::compute(&props(), &children, &DefaultAxes::default())
        .expect("layout");

    assert_abs_diff_eq!(layout.axis_offset.x, 200.0, epsilon = 1e-9);
}

#[test]
fn origin_clamps_to_domain_minimum_above_zero() {
    let children = vec![points(&[(5.0, 0.0), (10.0, 100.0)])];
    let layout = ChartLayout::compute(&props(), &children, &DefaultAxes::default())
        .expect("layout");

    assert_abs_diff_eq!(layout.axis_offset.x, 50.0, epsilon = 1e-9);
}

#[test]
fn right_dependent_axis_measures_from_the_right_edge() {
    let children = vec![
        points(&[(0.0, 0.0), (10.0, 100.0)]),
        Component::axis("x"),
        Component::dependent_axis("y").with_orientation(AxisOrientation::Right),
    ];
    let layout = ChartLayout::compute(&props(), &children, &DefaultAxes::default())
        .expect("layout");

    assert_eq!(layout.calculated.domain.x, (10.0, 0.0));
    assert_abs_diff_eq!(layout.axis_offset.x, 50.0, epsilon = 1e-9);
}

#[test]
fn explicit_non_zero_offset_wins() {
    let children = vec![
        points(&[(0.0, 0.0), (10.0, 100.0)]),
        Component::axis("x").with_offset(Some(120.0), None),
        Component::dependent_axis("y").with_offset(None, Some(0.0)),
    ];
    let layout = ChartLayout::compute(&props(), &children, &DefaultAxes::default())
        .expect("layout");

    assert_abs_diff_eq!(layout.axis_offset.x, 120.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.axis_offset.y, 50.0, epsilon = 1e-9);
}
