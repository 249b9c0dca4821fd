use tracing::warn;

use crate::core::{Axis, AxisOrientation, AxisPair};

use super::{Component, DefaultAxes};

/// Resolves the component list a chart renders.
///
/// - no children: the two default axes
/// - no axis children: the children followed by both default axes
/// - several axes of one kind: data children, then the first independent and
///   the first dependent axis (a warning is logged)
/// - otherwise the children as given
pub fn get_child_components(children: &[Component], defaults: &DefaultAxes) -> Vec<Component> {
    if children.is_empty() {
        return vec![defaults.independent.clone(), defaults.dependent.clone()];
    }

    let (dependent_axes, independent_axes): (Vec<&Component>, Vec<&Component>) = children
        .iter()
        .filter(|child| child.is_axis())
        .partition(|axis| axis.props().dependent_axis);

    if dependent_axes.is_empty() && independent_axes.is_empty() {
        let mut out = children.to_vec();
        out.push(defaults.independent.clone());
        out.push(defaults.dependent.clone());
        return out;
    }

    if dependent_axes.len() > 1 || independent_axes.len() > 1 {
        warn!(
            independent_axes = independent_axes.len(),
            dependent_axes = dependent_axes.len(),
            "only one axis component of each axis type is allowed in a chart; \
             only the first axis will be used, compose multi-axis charts manually"
        );
        let mut out = get_data_components(children);
        out.extend(independent_axes.first().map(|axis| (*axis).clone()));
        out.extend(dependent_axes.first().map(|axis| (*axis).clone()));
        return out;
    }

    children.to_vec()
}

/// All non-axis components, in order.
pub fn get_data_components(children: &[Component]) -> Vec<Component> {
    children
        .iter()
        .filter(|child| !child.is_axis())
        .cloned()
        .collect()
}

/// First axis component drawing `axis`.
pub fn get_axis_component(children: &[Component], axis: Axis) -> Option<&Component> {
    children
        .iter()
        .find(|child| child.axis_kind() == Some(axis))
}

/// Orientation of `component`, or the axis default.
#[must_use]
pub fn get_orientation(component: Option<&Component>, axis: Axis) -> AxisOrientation {
    component
        .and_then(|component| component.props().orientation)
        .unwrap_or(AxisOrientation::default_for(axis))
}

pub fn get_axis_orientations(children: &[Component]) -> AxisPair<AxisOrientation> {
    AxisPair::from_fn(|axis| get_orientation(get_axis_component(children, axis), axis))
}
