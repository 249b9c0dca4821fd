use crate::core::{
    Axis, Scale, TickFormatter, Value, contains_only_strings, contains_strings,
};

use super::{CalculatedProps, Component};

/// Ticks pinned by the axis component's tick values.
///
/// String-only tick values are converted through the axis string map when
/// one exists; unknown strings are dropped. Returns `None` when the
/// component has no tick values.
pub fn get_ticks_from_axis(
    calculated: &CalculatedProps,
    axis: Axis,
    component: &Component,
) -> Option<Vec<f64>> {
    let tick_values = component.props().tick_values.as_ref()?;
    match calculated.string_map[axis].as_ref() {
        Some(string_map) if contains_only_strings(tick_values) => Some(
            tick_values
                .iter()
                .filter_map(|tick| string_map.map_value(tick))
                .collect(),
        ),
        _ => Some(numeric_values(tick_values)),
    }
}

/// Ticks implied by the data: categories first, then every string-map
/// position. `None` lets the axis pick its own ticks.
pub fn get_ticks_from_data(calculated: &CalculatedProps, axis: Axis) -> Option<Vec<f64>> {
    let string_map = calculated.string_map[axis].as_ref();
    let from_categories = calculated.categories[axis].as_deref().map(|categories| {
        if contains_only_strings(categories) {
            categories
                .iter()
                .filter_map(|category| string_map.and_then(|map| map.map_value(category)))
                .collect()
        } else {
            numeric_values(categories)
        }
    });

    match from_categories {
        Some(ticks) if !ticks.is_empty() => Some(ticks),
        _ => string_map.map(|map| map.values()),
    }
}

pub fn get_ticks(
    calculated: &CalculatedProps,
    axis: Axis,
    component: Option<&Component>,
) -> Option<Vec<f64>> {
    component
        .and_then(|component| get_ticks_from_axis(calculated, axis, component))
        .or_else(|| get_ticks_from_data(calculated, axis))
}

/// Label formatter for the ticks of `axis`.
///
/// Numeric tick values print as is. A categorical axis looks names up by
/// position in a table padded with one empty label at each end, so position
/// 0 and position `len + 1` render blank. Anything else uses the scale's
/// formatter.
pub fn get_tick_format(
    component: Option<&Component>,
    axis: Axis,
    calculated: &CalculatedProps,
) -> TickFormatter {
    let tick_values = component.and_then(|component| component.props().tick_values.as_ref());
    if tick_values.is_some_and(|values| !contains_strings(values)) {
        return TickFormatter::Identity;
    }

    if let Some(string_map) = &calculated.string_map[axis] {
        return TickFormatter::Categorical(string_map.padded_tick_names());
    }

    calculated.scale[axis]
        .tick_format()
        .unwrap_or(TickFormatter::Identity)
}

fn numeric_values(values: &[Value]) -> Vec<f64> {
    values.iter().filter_map(Value::as_number).collect()
}
