pub mod range;
pub mod side;
pub mod ticks;
pub mod units;

pub use range::{AxisRange, DataRange, RangeMode};
pub use side::Side;
pub use units::MetricPrefix;
