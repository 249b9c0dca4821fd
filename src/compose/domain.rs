use crate::core::{Axis, AxisOrientation, AxisPair, Datum, StringMap, Value};

use super::{ChartProps, Component, ComponentVisitor, Descend, Role, get_axis_orientations, walk};

/// Domain used when nothing in the tree contributes an extent.
pub const FALLBACK_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Oriented domain of `axis` for a chart made of `children`.
pub fn get_domain(
    props: &ChartProps,
    children: &[Component],
    axis: Axis,
    string_map: Option<&StringMap>,
) -> (f64, f64) {
    let domain = get_domain_from_children(props, children, axis, string_map);
    let orientations = get_axis_orientations(children);
    orient_domain(domain, &orientations, axis)
}

/// Combined `(min, max)` over the tree, unless the chart pins the domain.
pub fn get_domain_from_children(
    props: &ChartProps,
    children: &[Component],
    axis: Axis,
    string_map: Option<&StringMap>,
) -> (f64, f64) {
    if let Some(domain) = props.domain[axis] {
        return domain;
    }

    let mut collector = ExtentCollector {
        axis,
        string_map,
        extent: None,
    };
    walk(children, &mut collector);
    collector.extent.unwrap_or(FALLBACK_DOMAIN)
}

/// Reverses the domain of `axis` when the other axis sits on its
/// non-standard edge (y on the right, or x on the top).
#[must_use]
pub fn orient_domain(
    domain: (f64, f64),
    orientations: &AxisPair<AxisOrientation>,
    axis: Axis,
) -> (f64, f64) {
    let standard = matches!(
        orientations[axis.other()],
        AxisOrientation::Bottom | AxisOrientation::Left
    );
    if standard { domain } else { (domain.1, domain.0) }
}

struct ExtentCollector<'a> {
    axis: Axis,
    string_map: Option<&'a StringMap>,
    extent: Option<(f64, f64)>,
}

impl ExtentCollector<'_> {
    fn include(&mut self, (lo, hi): (f64, f64)) {
        let (lo, hi) = (lo.min(hi), lo.max(hi));
        self.extent = Some(match self.extent {
            Some((min, max)) => (min.min(lo), max.max(hi)),
            None => (lo, hi),
        });
    }

    fn include_values(&mut self, values: &[Value]) {
        for value in values {
            if let Some(resolved) = value.resolve(self.string_map) {
                self.include((resolved, resolved));
            }
        }
    }

    fn include_data<'d>(&mut self, data: impl IntoIterator<Item = &'d Datum>) {
        for datum in data {
            if let Some(extent) = datum.extent(self.axis, self.string_map) {
                self.include(extent);
            }
        }
    }
}

impl ComponentVisitor for ExtentCollector<'_> {
    fn visit(&mut self, component: &Component) -> Descend {
        let props = component.props();
        if let Some(hint) = props.domain[self.axis] {
            self.include(hint);
            return Descend::Skip;
        }

        if component.role() == Role::Axis {
            if component.axis_kind() == Some(self.axis) {
                if let Some(values) = &props.tick_values {
                    self.include_values(values);
                }
            }
            return Descend::Skip;
        }

        if let Some(categories) = props
            .categories
            .as_ref()
            .and_then(|categories| categories.for_axis(self.axis))
        {
            self.include_values(categories);
        }

        if let Some(data) = &props.data {
            self.include_data(data.iter().map(|datum| &**datum));
            return Descend::Skip;
        }

        if let Some(data) = component.generated_data() {
            self.include_data(&data);
            return Descend::Skip;
        }

        Descend::Children
    }
}

#[cfg(test)]
mod tests {
    use super::orient_domain;
    use crate::core::{Axis, AxisOrientation, AxisPair};

    #[test]
    fn top_x_axis_reverses_dependent_domain() {
        let orientations = AxisPair::new(AxisOrientation::Top, AxisOrientation::Left);
        assert_eq!(orient_domain((0.0, 5.0), &orientations, Axis::Y), (5.0, 0.0));
        assert_eq!(orient_domain((0.0, 5.0), &orientations, Axis::X), (0.0, 5.0));
    }

    #[test]
    fn right_y_axis_reverses_independent_domain() {
        let orientations = AxisPair::new(AxisOrientation::Bottom, AxisOrientation::Right);
        assert_eq!(orient_domain((1.0, 3.0), &orientations, Axis::X), (3.0, 1.0));
        assert_eq!(orient_domain((1.0, 3.0), &orientations, Axis::Y), (1.0, 3.0));
    }
}
