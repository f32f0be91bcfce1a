pub mod axis_config;
pub mod axis_engine;
pub mod label_format;
pub mod overlap_resolver;
pub mod text_measure;
pub mod tick_mark;
mod validation;

pub use axis_config::{AxisEngineConfig, AxisScaleKind};
pub use axis_engine::AxisEngine;
pub use overlap_resolver::OverlapPolicy;
pub use text_measure::{CharCellMeasurer, LabelExtent, LabelMeasurer};
pub use tick_mark::{TickMark, TickMarkCacheStats};
