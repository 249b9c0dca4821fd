//! Chart composition: inspects a chart's component tree to pick its axes and
//! derive domains, categorical string maps, ticks, tick formatters and axis
//! offsets.
//!
//! The helpers are stateless. [`ChartLayout::compute`] runs them in order for
//! one layout pass.

mod children;
mod component;
mod domain;
mod layout;
mod offset;
mod string_map;
mod ticks;

pub use children::{
    get_axis_component, get_axis_orientations, get_child_components, get_data_components,
    get_orientation,
};
pub use component::{
    Categories, Component, ComponentProps, ComponentVisitor, DataGenerator, DefaultAxes, Descend,
    Role, walk,
};
pub use domain::{FALLBACK_DOMAIN, get_domain, get_domain_from_children, orient_domain};
pub use layout::{CalculatedProps, ChartLayout, ChartProps, LayoutSnapshot};
pub use offset::get_axis_offset;
pub use string_map::create_string_map;
pub use ticks::{get_tick_format, get_ticks, get_ticks_from_axis, get_ticks_from_data};
