//! axis-rs: axis auto-ranging and tick generation engine.
//!
//! This crate provides the framework-independent numeric core of an
//! interactive charting axis: range resolution (fixed, auto, auto-grow),
//! "nice" tick-unit selection, major/minor tick generation for linear,
//! logarithmic, and time scales, label formatting, label-overlap
//! resolution, and a bounded tick-mark cache. A host UI layer supplies
//! pixel dimensions and text metrics and draws whatever the engine hands
//! back.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisEngine, AxisEngineConfig};
pub use error::{AxisError, AxisResult};
