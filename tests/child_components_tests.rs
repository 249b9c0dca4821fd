use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chart_compose::compose::{
    Component, DefaultAxes, get_axis_component, get_axis_orientations, get_child_components,
    get_data_components,
};
use chart_compose::core::{Axis, AxisOrientation, Datum};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, count.load(Ordering::SeqCst))
}

fn series(name: &str) -> Component {
    Component::series(name, vec![Datum::new(1.0, 2.0), Datum::new(2.0, 4.0)])
}

#[test]
fn empty_children_fall_back_to_default_axes() {
    let defaults = DefaultAxes::default();
    let out = get_child_components(&[], &defaults);
    assert_eq!(out, vec![defaults.independent.clone(), defaults.dependent.clone()]);
}

#[test]
fn children_without_axes_get_defaults_appended() {
    let defaults = DefaultAxes::default();
    let children = vec![series("a"), series("b")];

    let out = get_child_components(&children, &defaults);

    let names: Vec<&str> = out.iter().map(Component::name).collect();
    assert_eq!(
        names,
        vec![
            "a",
            "b",
            "default-independent-axis",
            "default-dependent-axis"
        ]
    );
}

#[test]
fn duplicate_axes_keep_first_of_each_kind_and_warn() {
    let defaults = DefaultAxes::default();
    let children = vec![
        Component::axis("x-first"),
        series("a"),
        Component::axis("x-second"),
        Component::dependent_axis("y-only"),
        series("b"),
    ];

    let (out, warnings) = count_warnings(|| get_child_components(&children, &defaults));

    let names: Vec<&str> = out.iter().map(Component::name).collect();
    assert_eq!(names, vec!["a", "b", "x-first", "y-only"]);
    assert_eq!(warnings, 1);
}

#[test]
fn duplicate_dependent_axes_without_independent_axis_omit_it() {
    let defaults = DefaultAxes::default();
    let children = vec![
        Component::dependent_axis("y-first"),
        Component::dependent_axis("y-second"),
        series("a"),
    ];

    let (out, warnings) = count_warnings(|| get_child_components(&children, &defaults));

    let names: Vec<&str> = out.iter().map(Component::name).collect();
    assert_eq!(names, vec!["a", "y-first"]);
    assert_eq!(warnings, 1);
}

#[test]
fn single_axes_leave_children_untouched() {
    let defaults = DefaultAxes::default();
    let children = vec![
        series("a"),
        Component::dependent_axis("y"),
        Component::axis("x"),
    ];

    let (out, warnings) = count_warnings(|| get_child_components(&children, &defaults));

    assert_eq!(out, children);
    assert_eq!(warnings, 0);
}

#[test]
fn data_components_exclude_axes_in_order() {
    let children = vec![
        series("a"),
        Component::axis("x"),
        Component::group("g", vec![series("nested")]),
    ];

    let names: Vec<String> = get_data_components(&children)
        .iter()
        .map(|component| component.name().to_owned())
        .collect();
    assert_eq!(names, vec!["a", "g"]);
}

#[test]
fn axis_lookup_and_orientations_use_first_matching_axis() {
    let children = vec![
        Component::dependent_axis("y").with_orientation(AxisOrientation::Right),
        Component::axis("x-first").with_orientation(AxisOrientation::Top),
        Component::axis("x-second"),
    ];

    assert_eq!(
        get_axis_component(&children, Axis::X).map(Component::name),
        Some("x-first")
    );
    let orientations = get_axis_orientations(&children);
    assert_eq!(orientations.x, AxisOrientation::Top);
    assert_eq!(orientations.y, AxisOrientation::Right);

    let defaults = get_axis_orientations(&[series("a")]);
    assert_eq!(defaults.x, AxisOrientation::Bottom);
    assert_eq!(defaults.y, AxisOrientation::Left);
}
