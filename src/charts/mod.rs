//! Chart registry and chart configuration model

pub mod config;
mod spec;

pub use spec::{by_key, registry, ChartShape, ChartSpec};
