use serde::{Deserialize, Serialize};

use super::overlap_resolver::OverlapPolicy;
use super::validation::{ensure_finite_non_negative, ensure_finite_positive};
use crate::core::ticks::{DEFAULT_MINOR_TICK_COUNT, MAX_TICK_COUNT};
use crate::core::{RangeMode, Side};
use crate::error::{AxisError, AxisResult};

/// Value-to-position law of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisScaleKind {
    #[default]
    Linear,
    /// Decade-based ticks; non-positive bounds are clamped, never accepted.
    Logarithmic,
    /// Unix-second values with calendar labels; minor ticks are suppressed.
    Time,
}

/// Construction-time configuration for an [`super::AxisEngine`].
///
/// Every field can also be changed later through the engine setters; this
/// struct exists so hosts can describe an axis declaratively and persist
/// the description (it round-trips through serde).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisEngineConfig {
    pub side: Side,
    pub scale_kind: AxisScaleKind,
    pub range_mode: RangeMode,
    pub min: f64,
    pub max: f64,
    /// Fraction of the data span added on each side under the auto modes.
    pub auto_range_padding: f64,
    /// Snap auto bounds outward to multiples of the tick unit.
    pub auto_range_rounding: bool,
    /// Minor subdivisions per major interval.
    pub minor_tick_count: usize,
    pub max_major_tick_count: usize,
    /// Minimum pixel gap between adjacent tick labels.
    pub tick_label_gap: f64,
    /// Approximate label footprint along the axis, in pixels, used before
    /// real measurements exist.
    pub tick_label_size: f64,
    /// Label rotation in degrees from horizontal.
    pub tick_label_rotation: f64,
    pub overlap_policy: OverlapPolicy,
    pub inverted: bool,
    /// Divisor applied to values before formatting. Must stay positive.
    pub unit_scaling: f64,
    /// Derive a metric prefix (and `unit_scaling`) from the range magnitude.
    pub auto_unit_scaling: bool,
    pub name: String,
    pub unit: Option<String>,
}

impl Default for AxisEngineConfig {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            scale_kind: AxisScaleKind::Linear,
            range_mode: RangeMode::Auto,
            min: -1.0,
            max: 1.0,
            auto_range_padding: 0.0,
            auto_range_rounding: false,
            minor_tick_count: DEFAULT_MINOR_TICK_COUNT,
            max_major_tick_count: MAX_TICK_COUNT,
            tick_label_gap: 3.0,
            tick_label_size: 12.0,
            tick_label_rotation: 0.0,
            overlap_policy: OverlapPolicy::SkipAlternate,
            inverted: false,
            unit_scaling: 1.0,
            auto_unit_scaling: false,
            name: String::new(),
            unit: None,
        }
    }
}

impl AxisEngineConfig {
    #[must_use]
    pub fn new(side: Side, scale_kind: AxisScaleKind) -> Self {
        Self {
            side,
            scale_kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self.range_mode = RangeMode::Fixed;
        self
    }

    #[must_use]
    pub fn with_range_mode(mut self, mode: RangeMode) -> Self {
        self.range_mode = mode;
        self
    }

    #[must_use]
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    pub(crate) fn validate(self) -> AxisResult<Self> {
        ensure_finite_non_negative(self.auto_range_padding, "auto range padding")?;
        ensure_finite_positive(self.unit_scaling, "unit scaling")?;
        ensure_finite_non_negative(self.tick_label_gap, "tick label gap")?;
        ensure_finite_positive(self.tick_label_size, "tick label size")?;
        if !self.tick_label_rotation.is_finite() {
            return Err(AxisError::InvalidConfig(
                "tick label rotation must be finite".to_owned(),
            ));
        }
        if self.max_major_tick_count < 2 {
            return Err(AxisError::InvalidConfig(
                "max major tick count must be >= 2".to_owned(),
            ));
        }
        Ok(self)
    }
}
