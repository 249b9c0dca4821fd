use std::fmt;
use std::sync::Arc;

use crate::core::{Axis, AxisOrientation, AxisPair, Datum, Value};

/// What a component contributes to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Draws an axis; participates in axis selection.
    Axis,
    /// Plots data.
    Data,
    /// Holds nested components.
    Group,
}

/// Category list, either shared by both axes or given per axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Categories {
    Shared(Vec<Value>),
    PerAxis(AxisPair<Option<Vec<Value>>>),
}

impl Categories {
    #[must_use]
    pub fn for_axis(&self, axis: Axis) -> Option<&[Value]> {
        match self {
            Self::Shared(values) => Some(values),
            Self::PerAxis(pair) => pair[axis].as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProps {
    pub data: Option<Vec<Arc<Datum>>>,
    pub categories: Option<Categories>,
    /// Explicit extent hints; take precedence over data extents.
    pub domain: AxisPair<Option<(f64, f64)>>,
    pub dependent_axis: bool,
    pub orientation: Option<AxisOrientation>,
    pub tick_values: Option<Vec<Value>>,
    pub tick_labels: Option<Vec<String>>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

/// Capability of components that compute their data from props instead of
/// receiving it literally.
pub trait DataGenerator: fmt::Debug + Send + Sync {
    /// May return several series; callers flatten the result.
    fn generate(&self, props: &ComponentProps) -> Vec<Vec<Datum>>;
}

/// One node of a chart's component tree.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    role: Role,
    props: ComponentProps,
    children: Vec<Component>,
    data_generator: Option<Arc<dyn DataGenerator>>,
}

impl Component {
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            props: ComponentProps::default(),
            children: Vec::new(),
            data_generator: None,
        }
    }

    /// Independent (x) axis.
    #[must_use]
    pub fn axis(name: impl Into<String>) -> Self {
        Self::new(name, Role::Axis)
    }

    /// Dependent (y) axis.
    #[must_use]
    pub fn dependent_axis(name: impl Into<String>) -> Self {
        let mut component = Self::new(name, Role::Axis);
        component.props.dependent_axis = true;
        component
    }

    #[must_use]
    pub fn series(name: impl Into<String>, data: Vec<Datum>) -> Self {
        Self::new(name, Role::Data).with_data(data)
    }

    #[must_use]
    pub fn group(name: impl Into<String>, children: Vec<Component>) -> Self {
        Self::new(name, Role::Group).with_children(children)
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<Datum>) -> Self {
        self.props.data = Some(data.into_iter().map(Arc::new).collect());
        self
    }

    /// Keeps datum identities, so repeated layouts hand out the same `Arc`s.
    #[must_use]
    pub fn with_shared_data(mut self, data: Vec<Arc<Datum>>) -> Self {
        self.props.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Categories) -> Self {
        self.props.categories = Some(categories);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, axis: Axis, domain: (f64, f64)) -> Self {
        self.props.domain[axis] = Some(domain);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.props.orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn with_tick_values(mut self, values: Vec<Value>) -> Self {
        self.props.tick_values = Some(values);
        self
    }

    #[must_use]
    pub fn with_tick_labels(mut self, labels: Vec<String>) -> Self {
        self.props.tick_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset_x: Option<f64>, offset_y: Option<f64>) -> Self {
        self.props.offset_x = offset_x;
        self.props.offset_y = offset_y;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_data_generator(mut self, generator: Arc<dyn DataGenerator>) -> Self {
        self.data_generator = Some(generator);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_axis(&self) -> bool {
        self.role == Role::Axis
    }

    #[must_use]
    pub fn props(&self) -> &ComponentProps {
        &self.props
    }

    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    #[must_use]
    pub fn data_generator(&self) -> Option<&dyn DataGenerator> {
        self.data_generator.as_deref()
    }

    /// Axis this component draws, `None` for non-axis components.
    #[must_use]
    pub fn axis_kind(&self) -> Option<Axis> {
        if !self.is_axis() {
            return None;
        }
        Some(if self.props.dependent_axis {
            Axis::Y
        } else {
            Axis::X
        })
    }

    /// Runs the data generator, flattened.
    #[must_use]
    pub fn generated_data(&self) -> Option<Vec<Datum>> {
        self.data_generator()
            .map(|generator| generator.generate(&self.props).into_iter().flatten().collect())
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        let same_generator = match (&self.data_generator, &other.data_generator) {
            (None, None) => true,
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        };
        same_generator
            && self.name == other.name
            && self.role == other.role
            && self.props == other.props
            && self.children == other.children
    }
}

/// Axis components substituted when a chart does not bring its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultAxes {
    pub independent: Component,
    pub dependent: Component,
}

impl Default for DefaultAxes {
    fn default() -> Self {
        Self {
            independent: Component::axis("default-independent-axis"),
            dependent: Component::dependent_axis("default-dependent-axis"),
        }
    }
}

/// Visitor decision after looking at one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Children,
    Skip,
}

pub trait ComponentVisitor {
    fn visit(&mut self, component: &Component) -> Descend;
}

/// Depth-first, pre-order walk over `components` and whatever subtrees the
/// visitor asks to enter.
pub fn walk<V: ComponentVisitor + ?Sized>(components: &[Component], visitor: &mut V) {
    for component in components {
        if visitor.visit(component) == Descend::Children {
            walk(component.children(), visitor);
        }
    }
}
