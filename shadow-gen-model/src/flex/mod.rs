//! Flex message model: components, containers, and layout units.

pub mod component;
pub mod container;
pub mod unit;
