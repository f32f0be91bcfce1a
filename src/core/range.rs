use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::side::Side;
use crate::core::ticks::preferred_tick_unit;

/// Ratio used to substitute unusable bounds on logarithmic axes
/// (`min = max / 1e6` and the symmetric rule for `max`).
pub(crate) const LOG_BOUND_RATIO: f64 = 1.0e6;

/// How the effective axis range is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RangeMode {
    /// User-supplied `[min, max]`, passed through verbatim.
    Fixed,
    /// Bounds track the observed data range on every pass.
    #[default]
    Auto,
    /// Bounds expand to include new data but never shrink.
    AutoGrow,
}

/// Immutable snapshot of one resolved axis range.
///
/// A fresh instance is produced by every resolution pass; previous
/// snapshots are discarded rather than mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub axis_length: f64,
    /// Pixels per data unit; negative for vertical sides (pixel 0 at top).
    pub scale: f64,
    pub tick_unit: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(min: f64, max: f64, axis_length: f64, scale: f64, tick_unit: f64) -> Self {
        Self {
            min,
            max,
            axis_length,
            scale,
            tick_unit,
        }
    }

    /// All-NaN placeholder used before the first resolution pass and for
    /// inputs too degenerate to resolve.
    #[must_use]
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Observed data min/max accumulator feeding the auto range modes.
///
/// Non-finite samples are skipped. An empty accumulator reports
/// `is_defined() == false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    min: f64,
    max: f64,
}

impl Default for DataRange {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl DataRange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widens the range to include `value`. Returns whether it changed.
    pub fn add(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let mut changed = false;
        if value < self.min {
            self.min = value;
            changed = true;
        }
        if value > self.max {
            self.max = value;
            changed = true;
        }
        changed
    }

    pub fn add_all(&mut self, values: &[f64]) -> bool {
        let mut changed = false;
        for value in values {
            changed |= self.add(*value);
        }
        changed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Inputs for one range resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct RangeRequest {
    pub mode: RangeMode,
    pub requested_min: f64,
    pub requested_max: f64,
    pub observed: DataRange,
    /// Previously resolved bounds; NaN on the first pass. Only `AutoGrow`
    /// consults these.
    pub previous_min: f64,
    pub previous_max: f64,
    /// Fraction of the span added on each side under the auto modes.
    pub padding: f64,
    /// Snap auto bounds outward to multiples of the tick unit.
    pub rounding: bool,
    pub axis_length: f64,
    /// Approximate label footprint along the axis, in pixels.
    pub label_size: f64,
    pub max_major_count: usize,
    /// Minor subdivisions per major interval; drives the flat-data span
    /// substitute.
    pub minor_divisions: usize,
    pub log_scale: bool,
    /// Explicit tick unit override for `Fixed` mode; NaN means "derive".
    pub tick_unit_hint: f64,
}

/// Resolves the effective axis range for one layout pass.
///
/// Pure function of its inputs: committing the result to axis state is the
/// caller's job. Degenerate inputs resolve to `AxisRange::undefined()`
/// rather than an error.
#[must_use]
pub fn resolve_range(request: &RangeRequest, side: Side) -> AxisRange {
    match request.mode {
        RangeMode::Fixed => resolve_fixed(request, side),
        RangeMode::Auto | RangeMode::AutoGrow => resolve_auto(request, side),
    }
}

fn resolve_fixed(request: &RangeRequest, side: Side) -> AxisRange {
    let (mut min, mut max) = ordered(request.requested_min, request.requested_max);
    if request.log_scale {
        match clamp_log_bounds(min, max) {
            Some(clamped) => (min, max) = clamped,
            None => return AxisRange::undefined(),
        }
    }

    let tick_unit = if request.tick_unit_hint.is_finite() && request.tick_unit_hint > 0.0 {
        request.tick_unit_hint
    } else {
        derive_tick_unit(request, min, max)
    };
    finish(request, side, min, max, tick_unit)
}

fn resolve_auto(request: &RangeRequest, side: Side) -> AxisRange {
    let (mut min, mut max) = if request.observed.is_defined() {
        (request.observed.min(), request.observed.max())
    } else {
        ordered(request.requested_min, request.requested_max)
    };

    if !min.is_finite() || !max.is_finite() {
        return AxisRange::undefined();
    }

    // flat data: substitute a nominal span so the tick generator never sees
    // a zero-width window on the auto paths
    if min == max {
        let half = min.abs().max(1.0) / request.minor_divisions.max(2) as f64;
        min -= half;
        max += half;
        debug!(value = min + half, "flat data range, substituting nominal span");
    }

    let padding = if request.padding.is_finite() && request.padding > 0.0 {
        request.padding
    } else {
        0.0
    };
    if request.log_scale {
        // multiplicative padding keeps log-space symmetry
        let pad_scale = 1.0 + padding;
        min /= pad_scale;
        max *= pad_scale;
        match clamp_log_bounds(min, max) {
            Some(clamped) => (min, max) = clamped,
            None => return AxisRange::undefined(),
        }
    } else {
        let pad = (max - min) * padding;
        min -= pad;
        max += pad;
    }

    if request.mode == RangeMode::AutoGrow
        && request.previous_min.is_finite()
        && request.previous_max.is_finite()
    {
        min = min.min(request.previous_min);
        max = max.max(request.previous_max);
    }

    // rounding uses the unit recomputed for the grown/padded bounds
    let tick_unit = derive_tick_unit(request, min, max);
    if request.rounding {
        if request.log_scale {
            min = 10_f64.powf(min.log10().floor());
            max = 10_f64.powf(max.log10().ceil());
        } else if tick_unit.is_finite() && tick_unit > 0.0 {
            min = (min / tick_unit).floor() * tick_unit;
            max = (max / tick_unit).ceil() * tick_unit;
        }
    }

    finish(request, side, min, max, tick_unit)
}

fn derive_tick_unit(request: &RangeRequest, min: f64, max: f64) -> f64 {
    if request.log_scale {
        // decade spacing in log10 space
        return 1.0;
    }
    preferred_tick_unit(
        request.axis_length,
        min,
        max,
        request.label_size,
        request.max_major_count,
    )
}

fn finish(request: &RangeRequest, side: Side, min: f64, max: f64, tick_unit: f64) -> AxisRange {
    AxisRange::new(
        min,
        max,
        request.axis_length,
        pixel_scale(request.axis_length, min, max, side),
        tick_unit,
    )
}

/// Pixels per data unit for the given side; negative for vertical sides so
/// that the minimum value sits at the bottom of the axis.
#[must_use]
pub fn pixel_scale(axis_length: f64, min: f64, max: f64, side: Side) -> f64 {
    let span = max - min;
    let scale = if side.is_vertical() {
        if span == 0.0 {
            -axis_length
        } else {
            -(axis_length / span)
        }
    } else if span == 0.0 {
        axis_length
    } else {
        axis_length / span
    };
    if scale == 0.0 { -1.0 } else { scale }
}

/// Substitute for an unusable lower bound on a logarithmic axis.
///
/// Non-positive or non-finite candidates become `current_max / 1e6` when the
/// upper bound is usable; `None` refuses the assignment outright.
#[must_use]
pub fn log_lower_bound_substitute(candidate: f64, current_max: f64) -> Option<f64> {
    if candidate.is_finite() && candidate > 0.0 {
        return Some(candidate);
    }
    if current_max.is_finite() && current_max > 0.0 {
        Some(current_max / LOG_BOUND_RATIO)
    } else {
        None
    }
}

/// Substitute for an unusable upper bound on a logarithmic axis.
#[must_use]
pub fn log_upper_bound_substitute(candidate: f64, current_min: f64) -> Option<f64> {
    if candidate.is_finite() && candidate > 0.0 {
        return Some(candidate);
    }
    if current_min.is_finite() && current_min > 0.0 {
        Some(current_min * LOG_BOUND_RATIO)
    } else {
        None
    }
}

fn clamp_log_bounds(min: f64, max: f64) -> Option<(f64, f64)> {
    let max = log_upper_bound_substitute(max, min)?;
    let min = log_lower_bound_substitute(min, max)?;
    Some((min, max))
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a.is_finite() && b.is_finite() && a > b {
        (b, a)
    } else {
        (a, b)
    }
}

