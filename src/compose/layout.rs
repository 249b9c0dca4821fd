use std::collections::HashSet;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Axis, AxisPair, DEFAULT_TICK_COUNT, Domain, LinearScale, Padding, StringMap, TickFormatter,
    Value, Viewport,
};
use crate::error::{ChartError, ChartResult};

use super::{
    Component, ComponentVisitor, DefaultAxes, Descend, create_string_map, get_axis_component,
    get_axis_offset, get_child_components, get_domain, get_tick_format, get_ticks, walk,
};

/// Chart container configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartProps {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: Padding,
    /// Pins the domain of an axis regardless of the data.
    #[serde(default)]
    pub domain: AxisPair<Option<(f64, f64)>>,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            domain: AxisPair::default(),
            tick_count: default_tick_count(),
        }
    }
}

impl ChartProps {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_domain(mut self, axis: Axis, domain: (f64, f64)) -> Self {
        self.domain[axis] = Some(domain);
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Pixel range the scale of `axis` maps onto; y runs bottom to top.
    #[must_use]
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        let sides = self.padding.sides();
        match axis {
            Axis::X => (sides.left, self.width - sides.right),
            Axis::Y => (self.height - sides.bottom, sides.top),
        }
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart props: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart props: {e}")))
    }
}

fn default_width() -> f64 {
    450.0
}

fn default_height() -> f64 {
    300.0
}

fn default_padding() -> Padding {
    Padding::Uniform(50.0)
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

/// Intermediate values the tick and offset helpers read.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedProps {
    pub axis_components: AxisPair<Option<Component>>,
    pub domain: Domain,
    pub scale: AxisPair<LinearScale>,
    pub string_map: AxisPair<Option<StringMap>>,
    pub categories: AxisPair<Option<Vec<Value>>>,
}

/// Everything sibling axis and series components need to draw a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub child_components: Vec<Component>,
    pub calculated: CalculatedProps,
    pub axis_offset: AxisPair<f64>,
    pub ticks: AxisPair<Vec<f64>>,
    pub tick_format: AxisPair<TickFormatter>,
}

impl ChartLayout {
    pub fn compute(
        props: &ChartProps,
        children: &[Component],
        defaults: &DefaultAxes,
    ) -> ChartResult<Self> {
        Viewport::new(props.width, props.height).validate()?;

        let child_components = get_child_components(children, defaults);
        let axis_components = AxisPair::from_fn(|axis| {
            get_axis_component(&child_components, axis).cloned()
        });
        let string_map = AxisPair::from_fn(|axis| create_string_map(&child_components, axis));
        let categories = AxisPair::from_fn(|axis| collect_categories(&child_components, axis));
        let domain = AxisPair::from_fn(|axis| {
            get_domain(props, &child_components, axis, string_map[axis].as_ref())
        });

        let scale = AxisPair::new(
            build_scale(props, Axis::X, domain.x)?,
            build_scale(props, Axis::Y, domain.y)?,
        );

        let calculated = CalculatedProps {
            axis_components,
            domain,
            scale,
            string_map,
            categories,
        };
        let axis_offset = get_axis_offset(props, &calculated);

        let ticks = AxisPair::from_fn(|axis| {
            let component = calculated.axis_components[axis].as_ref();
            get_ticks(&calculated, axis, component)
                .unwrap_or_else(|| {
                    let scale = calculated.scale[axis];
                    scale.ticks(scale.tick_count())
                })
        });
        let tick_format = AxisPair::from_fn(|axis| {
            get_tick_format(calculated.axis_components[axis].as_ref(), axis, &calculated)
        });

        debug!(
            children = child_components.len(),
            domain_x = ?calculated.domain.x,
            domain_y = ?calculated.domain.y,
            offset_x = axis_offset.x,
            offset_y = axis_offset.y,
            "computed chart layout"
        );

        Ok(Self {
            child_components,
            calculated,
            axis_offset,
            ticks,
            tick_format,
        })
    }

    /// Formatted labels for the ticks of `axis`.
    #[must_use]
    pub fn tick_labels(&self, axis: Axis) -> Vec<Option<String>> {
        self.tick_format[axis].format_all(&self.ticks[axis])
    }

    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            child_components: self
                .child_components
                .iter()
                .map(|component| component.name().to_owned())
                .collect(),
            domain: self.calculated.domain,
            axis_offset: self.axis_offset,
            string_map: self.calculated.string_map.clone(),
            ticks: self.ticks.clone(),
            tick_labels: AxisPair::from_fn(|axis| self.tick_labels(axis)),
        }
    }
}

/// Serializable summary of a layout for regression tests and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub child_components: Vec<String>,
    pub domain: Domain,
    pub axis_offset: AxisPair<f64>,
    pub string_map: AxisPair<Option<StringMap>>,
    pub ticks: AxisPair<Vec<f64>>,
    pub tick_labels: AxisPair<Vec<Option<String>>>,
}

impl LayoutSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse layout: {e}")))
    }
}

/// Builds the scale of `axis`, widening a single-value domain so the scale
/// stays invertible.
///
/// The padding grows with the magnitude of the value: a fixed unit vanishes
/// in rounding once the value is large.
fn build_scale(props: &ChartProps, axis: Axis, domain: (f64, f64)) -> ChartResult<LinearScale> {
    let domain = if domain.0 == domain.1 {
        let pad = (domain.0.abs() * f64::EPSILON * 2.0).max(1.0);
        (domain.0 - pad, domain.1 + pad)
    } else {
        domain
    };
    Ok(LinearScale::new(domain, props.range(axis))?.with_tick_count(props.tick_count))
}

/// Distinct category values for `axis` across the whole tree, first
/// occurrence first.
fn collect_categories(children: &[Component], axis: Axis) -> Option<Vec<Value>> {
    let mut collector = CategoryCollector {
        axis,
        seen: HashSet::new(),
        values: Vec::new(),
    };
    walk(children, &mut collector);
    if collector.values.is_empty() {
        None
    } else {
        Some(collector.values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CategoryKey {
    Number(OrderedFloat<f64>),
    Text(String),
}

struct CategoryCollector {
    axis: Axis,
    seen: HashSet<CategoryKey>,
    values: Vec<Value>,
}

impl ComponentVisitor for CategoryCollector {
    fn visit(&mut self, component: &Component) -> Descend {
        let categories = component
            .props()
            .categories
            .as_ref()
            .and_then(|categories| categories.for_axis(self.axis));
        for value in categories.unwrap_or_default() {
            let key = match value {
                Value::Number(number) => CategoryKey::Number(OrderedFloat(*number)),
                Value::Text(text) => CategoryKey::Text(text.clone()),
            };
            if self.seen.insert(key) {
                self.values.push(value.clone());
            }
        }
        Descend::Children
    }
}
