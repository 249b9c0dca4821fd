use crate::core::{Axis, AxisOrientation, AxisPair, Scale};

use super::{CalculatedProps, ChartProps, ComponentProps, get_orientation};

/// Pixel offsets that make the two axes cross at the data origin.
///
/// The origin on each axis is the lower domain bound clamped to be at least
/// zero. A non-zero `offset_x` / `offset_y` on the axis component overrides
/// the computed value.
pub fn get_axis_offset(props: &ChartProps, calculated: &CalculatedProps) -> AxisPair<f64> {
    let origin = calculated
        .domain
        .map(|_, (start, end)| start.min(end).max(0.0));
    let orientations = AxisPair::from_fn(|axis| {
        get_orientation(calculated.axis_components[axis].as_ref(), axis)
    });

    let orientation_offset = AxisPair::new(
        if orientations.y == AxisOrientation::Left {
            0.0
        } else {
            props.width
        },
        if orientations.x == AxisOrientation::Bottom {
            props.height
        } else {
            0.0
        },
    );
    let computed = AxisPair::from_fn(|axis| {
        (orientation_offset[axis] - calculated.scale[axis].map(origin[axis])).abs()
    });

    let explicit = |axis: Axis, pick: fn(&ComponentProps) -> Option<f64>| {
        calculated.axis_components[axis]
            .as_ref()
            .and_then(|component| pick(component.props()))
            .filter(|offset| *offset != 0.0 && !offset.is_nan())
    };

    AxisPair::new(
        explicit(Axis::X, |axis_props| axis_props.offset_x).unwrap_or(computed.x),
        explicit(Axis::Y, |axis_props| axis_props.offset_y).unwrap_or(computed.y),
    )
}
