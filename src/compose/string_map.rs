use tracing::debug;

use crate::core::{Axis, StringMap, Value};

use super::{Component, ComponentVisitor, Descend, get_axis_component, walk};

/// Builds the categorical string map for `axis`.
///
/// Strings are gathered in this order: tick values of the axis component
/// (its tick labels when it has no tick values), category lists of every
/// top-level child, then data strings found by a depth-first walk. Returns
/// `None` when no strings turn up anywhere.
pub fn create_string_map(children: &[Component], axis: Axis) -> Option<StringMap> {
    let tick_strings = get_axis_component(children, axis)
        .map(strings_from_axis)
        .unwrap_or_default();

    let category_strings: Vec<String> = children
        .iter()
        .flat_map(|child| strings_from_categories(child, axis))
        .collect();

    let mut collector = DataStringCollector {
        axis,
        strings: Vec::new(),
    };
    walk(children, &mut collector);

    let map = StringMap::from_strings(
        tick_strings
            .into_iter()
            .chain(category_strings)
            .chain(collector.strings),
    );
    debug!(
        axis = axis.as_str(),
        entries = map.as_ref().map_or(0, StringMap::len),
        "built string map"
    );
    map
}

fn strings_from_axis(component: &Component) -> Vec<String> {
    let props = component.props();
    match &props.tick_values {
        Some(values) => text_values(values),
        None => props.tick_labels.clone().unwrap_or_default(),
    }
}

fn strings_from_categories(component: &Component, axis: Axis) -> Vec<String> {
    component
        .props()
        .categories
        .as_ref()
        .and_then(|categories| categories.for_axis(axis))
        .map(text_values)
        .unwrap_or_default()
}

fn text_values(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_text)
        .map(str::to_owned)
        .collect()
}

struct DataStringCollector {
    axis: Axis,
    strings: Vec<String>,
}

impl ComponentVisitor for DataStringCollector {
    fn visit(&mut self, component: &Component) -> Descend {
        if let Some(data) = &component.props().data {
            self.strings.extend(
                data.iter()
                    .filter_map(|datum| datum.value(self.axis).as_text())
                    .map(str::to_owned),
            );
            return Descend::Skip;
        }

        if let Some(data) = component.generated_data() {
            self.strings.extend(
                data.iter()
                    .filter_map(|datum| datum.name(self.axis))
                    .map(str::to_owned),
            );
            return Descend::Skip;
        }

        if component.children().is_empty() {
            Descend::Skip
        } else {
            Descend::Children
        }
    }
}
