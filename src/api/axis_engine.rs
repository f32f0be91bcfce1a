use std::sync::RwLock;

use tracing::{debug, warn};

use super::axis_config::{AxisEngineConfig, AxisScaleKind};
use super::label_format::{format_tick_label, resolve_formatter};
use super::overlap_resolver::{OverlapPolicy, resolve_overlap};
use super::text_measure::{CharCellMeasurer, LabelExtent, LabelMeasurer};
use super::tick_mark::{LabelTickCache, TickMark, TickMarkCacheStats, ValueTickCache};
use crate::core::range::{
    AxisRange, DataRange, RangeMode, RangeRequest, log_lower_bound_substitute,
    log_upper_bound_substitute, resolve_range,
};
use crate::core::side::Side;
use crate::core::ticks::{
    DEFAULT_MINOR_TICK_COUNT, log_major_tick_values, log_minor_tick_values, major_tick_values,
    minor_tick_values,
};
use crate::core::units::{MetricPrefix, axis_label};
use crate::error::{AxisError, AxisResult};

const ALL_PREFIXES: [MetricPrefix; 17] = [
    MetricPrefix::Yotta,
    MetricPrefix::Zetta,
    MetricPrefix::Exa,
    MetricPrefix::Peta,
    MetricPrefix::Tera,
    MetricPrefix::Giga,
    MetricPrefix::Mega,
    MetricPrefix::Kilo,
    MetricPrefix::None,
    MetricPrefix::Milli,
    MetricPrefix::Micro,
    MetricPrefix::Nano,
    MetricPrefix::Pico,
    MetricPrefix::Femto,
    MetricPrefix::Atto,
    MetricPrefix::Zepto,
    MetricPrefix::Yocto,
];

/// Stateful axis facade: owns the configuration, the observed data range,
/// the resolved range snapshot, and the tick-mark sequences.
///
/// The engine follows a two-state lifecycle: any mutation marks it invalid,
/// [`AxisEngine::recompute_ticks`] transitions it back to valid. Getters are
/// usable in either state but only authoritative while valid. All methods
/// are synchronous and must be driven from a single thread.
pub struct AxisEngine<M: LabelMeasurer = CharCellMeasurer> {
    measurer: M,
    config: AxisEngineConfig,
    width: f64,
    height: f64,
    tick_unit_override: Option<f64>,
    observed: DataRange,
    resolved: AxisRange,
    old_axis_length: f64,
    old_min: f64,
    old_max: f64,
    old_tick_unit: f64,
    old_unit_scaling: f64,
    old_scale_kind: AxisScaleKind,
    major_values: Vec<f64>,
    minor_values: Vec<f64>,
    major_marks: Vec<TickMark>,
    minor_marks: Vec<TickMark>,
    label_cache: LabelTickCache,
    value_cache: ValueTickCache,
    unit_prefix: MetricPrefix,
    label_overlap: bool,
    font_scale: f64,
    valid: bool,
}

impl AxisEngine<CharCellMeasurer> {
    /// Engine with the default configuration and the char-cell measurer.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CharCellMeasurer::default(), AxisEngineConfig::default())
            .expect("default configuration is valid")
    }
}

impl<M: LabelMeasurer> AxisEngine<M> {
    pub fn new(measurer: M, config: AxisEngineConfig) -> AxisResult<Self> {
        let mut config = config.validate()?;
        if config.scale_kind == AxisScaleKind::Time {
            config.minor_tick_count = 0;
        }
        if config.scale_kind == AxisScaleKind::Logarithmic {
            if let Some(max) = log_upper_bound_substitute(config.max, config.min) {
                config.max = max;
            }
            if let Some(min) = log_lower_bound_substitute(config.min, config.max) {
                config.min = min;
            }
        }

        Ok(Self {
            measurer,
            config,
            width: f64::NAN,
            height: f64::NAN,
            tick_unit_override: None,
            observed: DataRange::new(),
            resolved: AxisRange::undefined(),
            old_axis_length: f64::NAN,
            old_min: f64::NAN,
            old_max: f64::NAN,
            old_tick_unit: f64::NAN,
            old_unit_scaling: f64::NAN,
            old_scale_kind: AxisScaleKind::Linear,
            major_values: Vec::new(),
            minor_values: Vec::new(),
            major_marks: Vec::new(),
            minor_marks: Vec::new(),
            label_cache: LabelTickCache::default(),
            value_cache: ValueTickCache::default(),
            unit_prefix: MetricPrefix::None,
            label_overlap: false,
            font_scale: 1.0,
            valid: false,
        })
    }

    // ---- dimensions and orientation ------------------------------------

    /// Updates the pixel dimensions of the region the axis is laid out in.
    ///
    /// Zero and non-finite sizes are accepted (transient during resize) and
    /// simply produce no ticks; negative sizes are a programmer error.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> AxisResult<()> {
        if width < 0.0 || height < 0.0 {
            return Err(AxisError::InvalidDimensions { width, height });
        }
        if !bits_equal(width, self.width) || !bits_equal(height, self.height) {
            self.width = width;
            self.height = height;
            self.invalidate();
        }
        Ok(())
    }

    /// Axis length in pixels along the tick direction, derived from the side.
    #[must_use]
    pub fn length(&self) -> f64 {
        if self.config.side.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.config.side
    }

    pub fn set_side(&mut self, side: Side) {
        if side != self.config.side {
            self.config.side = side;
            self.invalidate();
        }
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.config.inverted
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        if inverted != self.config.inverted {
            self.config.inverted = inverted;
            self.invalidate();
        }
    }

    // ---- range state ---------------------------------------------------

    /// Effective lower bound: the resolved auto bound when an auto mode has
    /// run, otherwise the user-requested value.
    #[must_use]
    pub fn min(&self) -> f64 {
        if self.config.range_mode != RangeMode::Fixed && self.resolved.is_defined() {
            self.resolved.min
        } else {
            self.config.min
        }
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        if self.config.range_mode != RangeMode::Fixed && self.resolved.is_defined() {
            self.resolved.max
        } else {
            self.config.max
        }
    }

    /// Last resolved range snapshot; `AxisRange::undefined()` before the
    /// first recompute.
    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.resolved
    }

    /// Sets the user range. Returns whether either bound changed.
    pub fn set_range(&mut self, min: f64, max: f64) -> bool {
        self.set_min(min) | self.set_max(max)
    }

    /// Sets the user lower bound. On a logarithmic axis an unusable value is
    /// substituted with `max / 1e6` (or refused when that is unusable too).
    pub fn set_min(&mut self, value: f64) -> bool {
        let value = if self.config.scale_kind == AxisScaleKind::Logarithmic {
            match log_lower_bound_substitute(value, self.max()) {
                Some(substituted) => substituted,
                None => return false,
            }
        } else {
            value
        };
        if bits_equal(value, self.config.min) {
            return false;
        }
        self.config.min = value;
        self.invalidate();
        true
    }

    pub fn set_max(&mut self, value: f64) -> bool {
        let value = if self.config.scale_kind == AxisScaleKind::Logarithmic {
            match log_upper_bound_substitute(value, self.min()) {
                Some(substituted) => substituted,
                None => return false,
            }
        } else {
            value
        };
        if bits_equal(value, self.config.max) {
            return false;
        }
        self.config.max = value;
        self.invalidate();
        true
    }

    #[must_use]
    pub fn range_mode(&self) -> RangeMode {
        self.config.range_mode
    }

    /// Switches the range mode in one assignment; `Auto` and `AutoGrow`
    /// can never be active simultaneously by construction.
    pub fn set_range_mode(&mut self, mode: RangeMode) {
        if mode != self.config.range_mode {
            self.config.range_mode = mode;
            self.invalidate();
        }
    }

    #[must_use]
    pub fn is_auto_ranging(&self) -> bool {
        self.config.range_mode == RangeMode::Auto
    }

    pub fn set_auto_ranging(&mut self, enabled: bool) {
        if enabled {
            self.set_range_mode(RangeMode::Auto);
        } else if self.config.range_mode == RangeMode::Auto {
            self.set_range_mode(RangeMode::Fixed);
        }
    }

    #[must_use]
    pub fn is_auto_grow_ranging(&self) -> bool {
        self.config.range_mode == RangeMode::AutoGrow
    }

    pub fn set_auto_grow_ranging(&mut self, enabled: bool) {
        if enabled {
            self.set_range_mode(RangeMode::AutoGrow);
        } else if self.config.range_mode == RangeMode::AutoGrow {
            self.set_range_mode(RangeMode::Fixed);
        }
    }

    pub fn set_auto_range_padding(&mut self, padding: f64) -> AxisResult<()> {
        super::validation::ensure_finite_non_negative(padding, "auto range padding")?;
        if !bits_equal(padding, self.config.auto_range_padding) {
            self.config.auto_range_padding = padding;
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_auto_range_rounding(&mut self, rounding: bool) {
        if rounding != self.config.auto_range_rounding {
            self.config.auto_range_rounding = rounding;
            self.invalidate();
        }
    }

    // ---- observed data -------------------------------------------------

    /// Widens the observed data range with `values`; non-finite samples are
    /// skipped. Returns whether the range changed.
    pub fn observe(&mut self, values: &[f64]) -> bool {
        let changed = self.observed.add_all(values);
        if changed && self.config.range_mode != RangeMode::Fixed {
            self.invalidate();
        }
        changed
    }

    pub fn observe_value(&mut self, value: f64) -> bool {
        let changed = self.observed.add(value);
        if changed && self.config.range_mode != RangeMode::Fixed {
            self.invalidate();
        }
        changed
    }

    /// Scans a shared data source under its read lock.
    ///
    /// The lock is held only for the min/max scan and released before any
    /// tick generation. A poisoned lock skips the scan with a warning.
    pub fn observe_locked(&mut self, source: &RwLock<Vec<f64>>) -> bool {
        let scanned = match source.read() {
            Ok(values) => {
                let mut local = DataRange::new();
                local.add_all(&values);
                local
            }
            Err(_) => {
                warn!("data source lock poisoned, skipping range scan");
                return false;
            }
        };

        if !scanned.is_defined() {
            return false;
        }
        let changed = self.observed.add(scanned.min()) | self.observed.add(scanned.max());
        if changed && self.config.range_mode != RangeMode::Fixed {
            self.invalidate();
        }
        changed
    }

    #[must_use]
    pub fn observed_range(&self) -> DataRange {
        self.observed
    }

    pub fn clear_observed_range(&mut self) {
        self.observed.clear();
        if self.config.range_mode != RangeMode::Fixed {
            self.invalidate();
        }
    }

    // ---- tick configuration --------------------------------------------

    /// Spacing between major ticks from the last resolution pass.
    #[must_use]
    pub fn tick_unit(&self) -> f64 {
        self.resolved.tick_unit
    }

    /// Fixes the major tick spacing. Only honored in `Fixed` range mode;
    /// the auto modes always derive their own unit.
    pub fn set_tick_unit(&mut self, unit: f64) -> AxisResult<()> {
        super::validation::ensure_finite_positive(unit, "tick unit")?;
        if self.tick_unit_override != Some(unit) {
            self.tick_unit_override = Some(unit);
            self.invalidate();
        }
        Ok(())
    }

    #[must_use]
    pub fn minor_tick_count(&self) -> usize {
        self.effective_minor_count()
    }

    pub fn set_minor_tick_count(&mut self, count: usize) {
        if count != self.config.minor_tick_count {
            self.config.minor_tick_count = count;
            self.invalidate();
        }
    }

    pub fn set_max_major_tick_count(&mut self, count: usize) -> AxisResult<()> {
        if count < 2 {
            return Err(AxisError::InvalidConfig(
                "max major tick count must be >= 2".to_owned(),
            ));
        }
        if count != self.config.max_major_tick_count {
            self.config.max_major_tick_count = count;
            self.invalidate();
        }
        Ok(())
    }

    #[must_use]
    pub fn scale_kind(&self) -> AxisScaleKind {
        self.config.scale_kind
    }

    /// Switches the value-to-position law. Entering `Time` suppresses minor
    /// ticks; leaving it restores the default minor count. Entering
    /// `Logarithmic` clamps the current bounds positive.
    pub fn set_scale_kind(&mut self, kind: AxisScaleKind) {
        if kind == self.config.scale_kind {
            return;
        }
        let was_time = self.config.scale_kind == AxisScaleKind::Time;
        self.config.scale_kind = kind;
        match kind {
            AxisScaleKind::Time => self.config.minor_tick_count = 0,
            _ if was_time => self.config.minor_tick_count = DEFAULT_MINOR_TICK_COUNT,
            _ => {}
        }
        if kind == AxisScaleKind::Logarithmic {
            if let Some(max) = log_upper_bound_substitute(self.config.max, self.config.min) {
                self.config.max = max;
            }
            if let Some(min) = log_lower_bound_substitute(self.config.min, self.config.max) {
                self.config.min = min;
            }
        }
        self.invalidate();
    }

    pub fn set_overlap_policy(&mut self, policy: OverlapPolicy) {
        if policy != self.config.overlap_policy {
            self.config.overlap_policy = policy;
            self.invalidate();
        }
    }

    pub fn set_tick_label_gap(&mut self, gap: f64) -> AxisResult<()> {
        super::validation::ensure_finite_non_negative(gap, "tick label gap")?;
        if !bits_equal(gap, self.config.tick_label_gap) {
            self.config.tick_label_gap = gap;
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_tick_label_size(&mut self, size: f64) -> AxisResult<()> {
        super::validation::ensure_finite_positive(size, "tick label size")?;
        if !bits_equal(size, self.config.tick_label_size) {
            self.config.tick_label_size = size;
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_tick_label_rotation(&mut self, degrees: f64) -> AxisResult<()> {
        if !degrees.is_finite() {
            return Err(AxisError::InvalidConfig(
                "tick label rotation must be finite".to_owned(),
            ));
        }
        if !bits_equal(degrees, self.config.tick_label_rotation) {
            self.config.tick_label_rotation = degrees;
            self.invalidate();
        }
        Ok(())
    }

    // ---- unit scaling ---------------------------------------------------

    #[must_use]
    pub fn unit_scaling(&self) -> f64 {
        self.config.unit_scaling
    }

    /// Sets the divisor applied to values before formatting. Rejected for
    /// non-positive or non-finite values; overwritten on every recompute
    /// while auto unit scaling is active.
    pub fn set_unit_scaling(&mut self, scaling: f64) -> AxisResult<()> {
        super::validation::ensure_finite_positive(scaling, "unit scaling")?;
        if !bits_equal(scaling, self.config.unit_scaling) {
            self.config.unit_scaling = scaling;
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_unit_prefix(&mut self, prefix: MetricPrefix) {
        if !bits_equal(prefix.scaling(), self.config.unit_scaling) {
            self.config.unit_scaling = prefix.scaling();
            self.invalidate();
        }
    }

    #[must_use]
    pub fn is_auto_unit_scaling(&self) -> bool {
        self.config.auto_unit_scaling
    }

    pub fn set_auto_unit_scaling(&mut self, enabled: bool) {
        if enabled != self.config.auto_unit_scaling {
            self.config.auto_unit_scaling = enabled;
            self.invalidate();
        }
    }

    #[must_use]
    pub fn unit_prefix(&self) -> MetricPrefix {
        self.unit_prefix
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
    }

    pub fn set_unit(&mut self, unit: Option<String>) {
        self.config.unit = unit;
    }

    /// Axis title composed from name, unit, and the active metric prefix.
    #[must_use]
    pub fn axis_title(&self) -> String {
        axis_label(
            &self.config.name,
            self.config.unit.as_deref(),
            self.unit_prefix,
        )
    }

    // ---- lifecycle -----------------------------------------------------

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Forces a recomputation on the next [`AxisEngine::recompute_ticks`].
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Drops all tick marks, tick values, and both caches.
    pub fn invalidate_caches(&mut self) {
        self.major_values.clear();
        self.minor_values.clear();
        self.major_marks.clear();
        self.minor_marks.clear();
        self.label_cache.clear();
        self.value_cache.clear();
        self.invalidate();
    }

    #[must_use]
    pub fn config(&self) -> &AxisEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn major_tick_marks(&self) -> &[TickMark] {
        &self.major_marks
    }

    #[must_use]
    pub fn minor_tick_marks(&self) -> &[TickMark] {
        &self.minor_marks
    }

    /// Whether the last overlap pass found colliding labels.
    #[must_use]
    pub fn is_label_overlapping(&self) -> bool {
        self.label_overlap
    }

    /// Horizontal label squeeze factor from the `NarrowFont` policy.
    #[must_use]
    pub fn font_scale(&self) -> f64 {
        self.font_scale
    }

    #[must_use]
    pub fn label_cache_stats(&self) -> TickMarkCacheStats {
        self.label_cache.stats()
    }

    #[must_use]
    pub fn value_cache_stats(&self) -> TickMarkCacheStats {
        self.value_cache.stats()
    }

    // ---- value <-> pixel mapping ---------------------------------------

    /// Pixel position of `value` along the axis under the last resolved
    /// range. NaN when the range is undefined or the value is unmappable.
    #[must_use]
    pub fn display_position(&self, value: f64) -> f64 {
        self.position_in(self.resolved, self.length(), value)
    }

    /// Inverse of [`AxisEngine::display_position`].
    #[must_use]
    pub fn value_for_display(&self, pixel: f64) -> f64 {
        let axis_length = self.length();
        if !axis_length.is_finite() || axis_length <= 0.0 || !pixel.is_finite() {
            return f64::NAN;
        }
        let range = self.resolved;
        if !range.is_defined() {
            return f64::NAN;
        }

        let along = if self.config.side.is_horizontal() {
            pixel / axis_length
        } else {
            1.0 - pixel / axis_length
        };
        let normalized = if self.config.inverted {
            1.0 - along
        } else {
            along
        };

        match self.config.scale_kind {
            AxisScaleKind::Linear | AxisScaleKind::Time => {
                range.min + normalized * range.span()
            }
            AxisScaleKind::Logarithmic => {
                if range.min <= 0.0 {
                    return f64::NAN;
                }
                (range.min.ln() + normalized * (range.max.ln() - range.min.ln())).exp()
            }
        }
    }

    /// Pixel position of zero, or NaN when zero lies outside the range.
    #[must_use]
    pub fn zero_position(&self) -> f64 {
        if 0.0 < self.min() || 0.0 > self.max() {
            return f64::NAN;
        }
        self.display_position(0.0)
    }

    #[must_use]
    pub fn is_value_on_axis(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min() && value <= self.max()
    }

    // ---- the recompute pass --------------------------------------------

    /// Resolves the range and rebuilds the tick-mark sequences.
    ///
    /// With unchanged `(length, min, max, tick unit)` and a valid engine the
    /// previous sequences are reused verbatim. Degenerate inputs produce
    /// empty sequences, never an error.
    pub fn recompute_ticks(&mut self) {
        let axis_length = self.length();
        let range = resolve_range(&self.range_request(axis_length), self.config.side);

        let length_changed = !bits_equal(self.old_axis_length, axis_length);
        let range_changed = !bits_equal(self.old_min, range.min)
            || !bits_equal(self.old_max, range.max)
            || !bits_equal(self.old_tick_unit, range.tick_unit);
        if self.valid && !length_changed && !range_changed {
            return;
        }

        self.resolved = range;
        self.update_unit_scaling(range);

        if !range.is_defined() || !axis_length.is_finite() || axis_length <= 0.0 {
            debug!(
                axis_length,
                min = range.min,
                max = range.max,
                "degenerate axis inputs, producing no ticks"
            );
            self.major_values.clear();
            self.minor_values.clear();
            self.major_marks.clear();
            self.minor_marks.clear();
            self.commit_pass(axis_length, range);
            return;
        }

        let (major_values, minor_values) = self.tick_values_for(range);
        // labels depend on the scale kind and unit scaling, so the
        // reposition-only path requires those unchanged as well
        let values_unchanged = !self.major_marks.is_empty()
            && major_values == self.major_values
            && minor_values == self.minor_values
            && bits_equal(self.old_unit_scaling, self.config.unit_scaling)
            && self.old_scale_kind == self.config.scale_kind;

        if values_unchanged {
            self.reposition_marks(range, axis_length);
        } else {
            self.major_values = major_values;
            self.minor_values = minor_values;
            self.rebuild_marks(range, axis_length);
        }

        let outcome = resolve_overlap(
            &mut self.major_marks,
            self.config.side,
            axis_length,
            self.config.tick_label_gap,
            self.config.inverted,
            self.config.overlap_policy,
        );
        self.label_overlap = outcome.label_overlap;
        self.font_scale = outcome.font_scale;

        // refresh the caches with the final, measured marks
        for index in 0..self.major_marks.len() {
            let mark = self.major_marks[index].clone();
            self.label_cache.put(mark);
        }
        for index in 0..self.minor_marks.len() {
            let mark = self.minor_marks[index].clone();
            self.value_cache.put(mark);
        }

        self.commit_pass(axis_length, range);
    }

    fn commit_pass(&mut self, axis_length: f64, range: AxisRange) {
        self.old_axis_length = axis_length;
        self.old_min = range.min;
        self.old_max = range.max;
        self.old_tick_unit = range.tick_unit;
        self.old_unit_scaling = self.config.unit_scaling;
        self.old_scale_kind = self.config.scale_kind;
        self.valid = true;
    }

    fn range_request(&self, axis_length: f64) -> RangeRequest {
        RangeRequest {
            mode: self.config.range_mode,
            requested_min: self.config.min,
            requested_max: self.config.max,
            observed: self.observed,
            previous_min: if self.resolved.is_defined() {
                self.resolved.min
            } else {
                f64::NAN
            },
            previous_max: if self.resolved.is_defined() {
                self.resolved.max
            } else {
                f64::NAN
            },
            padding: self.config.auto_range_padding,
            rounding: self.config.auto_range_rounding,
            axis_length,
            label_size: self.config.tick_label_size,
            max_major_count: self.config.max_major_tick_count,
            minor_divisions: if self.config.minor_tick_count >= 2 {
                self.config.minor_tick_count
            } else {
                DEFAULT_MINOR_TICK_COUNT
            },
            log_scale: self.config.scale_kind == AxisScaleKind::Logarithmic,
            tick_unit_hint: self.tick_unit_override.unwrap_or(f64::NAN),
        }
    }

    fn effective_minor_count(&self) -> usize {
        if self.config.scale_kind == AxisScaleKind::Time {
            0
        } else {
            self.config.minor_tick_count
        }
    }

    fn tick_values_for(&self, range: AxisRange) -> (Vec<f64>, Vec<f64>) {
        match self.config.scale_kind {
            AxisScaleKind::Linear | AxisScaleKind::Time => {
                let majors = major_tick_values(
                    range.min,
                    range.max,
                    range.tick_unit,
                    self.config.max_major_tick_count,
                );
                let minors = minor_tick_values(
                    range.min,
                    range.max,
                    range.tick_unit,
                    self.effective_minor_count(),
                );
                (majors, minors)
            }
            AxisScaleKind::Logarithmic => {
                let majors = log_major_tick_values(
                    range.min,
                    range.max,
                    self.config.max_major_tick_count,
                );
                let minors = if self.effective_minor_count() == 0 {
                    Vec::new()
                } else {
                    log_minor_tick_values(range.min, range.max)
                };
                (majors, minors)
            }
        }
    }

    fn update_unit_scaling(&mut self, range: AxisRange) {
        if self.config.auto_unit_scaling && range.is_defined() {
            let magnitude = range.min.abs().max(range.max.abs());
            let prefix = MetricPrefix::for_magnitude(magnitude);
            self.unit_prefix = prefix;
            self.config.unit_scaling = prefix.scaling();
        } else {
            self.unit_prefix = matching_prefix(self.config.unit_scaling);
        }
    }

    fn reposition_marks(&mut self, range: AxisRange, axis_length: f64) {
        let positions: Vec<f64> = self
            .major_values
            .iter()
            .map(|&value| self.position_in(range, axis_length, value))
            .collect();
        let rotation = self.config.tick_label_rotation;
        for (mark, position) in self.major_marks.iter_mut().zip(positions) {
            mark.position = position;
            mark.rotation = rotation;
            mark.visible = true;
            mark.shift = 0.0;
        }

        let minor_positions: Vec<f64> = self
            .minor_values
            .iter()
            .map(|&value| self.position_in(range, axis_length, value))
            .collect();
        for (mark, position) in self.minor_marks.iter_mut().zip(minor_positions) {
            mark.position = position;
            mark.visible = true;
        }
    }

    fn rebuild_marks(&mut self, range: AxisRange, axis_length: f64) {
        let formatter = resolve_formatter(
            self.config.scale_kind,
            range.tick_unit / self.config.unit_scaling,
            range.span().abs(),
        );
        let rotation = self.config.tick_label_rotation;
        let unit_scaling = self.config.unit_scaling;

        let major_inputs: Vec<(f64, f64, String)> = self
            .major_values
            .iter()
            .map(|&value| {
                (
                    value,
                    self.position_in(range, axis_length, value),
                    format_tick_label(value / unit_scaling, formatter),
                )
            })
            .collect();

        let mut majors = Vec::with_capacity(major_inputs.len());
        for (value, position, label) in major_inputs {
            let mut mark = match self.label_cache.take(&label) {
                Some(mut cached) => {
                    cached.value = value;
                    cached
                }
                None => {
                    let extent = self.measured_extent(&label);
                    let mut created = TickMark::new(value, position, rotation, label);
                    created.width = extent.width;
                    created.height = extent.height;
                    created
                }
            };
            mark.position = position;
            mark.rotation = rotation;
            mark.visible = true;
            mark.shift = 0.0;
            majors.push(mark);
        }
        self.major_marks = majors;

        let minor_inputs: Vec<(f64, f64)> = self
            .minor_values
            .iter()
            .map(|&value| (value, self.position_in(range, axis_length, value)))
            .collect();

        let mut minors = Vec::with_capacity(minor_inputs.len());
        for (value, position) in minor_inputs {
            let mut mark = match self.value_cache.take(value) {
                Some(cached) => cached,
                None => TickMark::new(value, position, rotation, String::new()),
            };
            mark.position = position;
            mark.rotation = rotation;
            mark.visible = true;
            mark.shift = 0.0;
            minors.push(mark);
        }
        self.minor_marks = minors;
    }

    fn measured_extent(&self, label: &str) -> LabelExtent {
        let extent = self.measurer.measure(label);
        // a failing host measurer degrades to a zero footprint, not an error
        LabelExtent {
            width: if extent.width.is_finite() && extent.width >= 0.0 {
                extent.width
            } else {
                0.0
            },
            height: if extent.height.is_finite() && extent.height >= 0.0 {
                extent.height
            } else {
                0.0
            },
        }
    }

    fn position_in(&self, range: AxisRange, axis_length: f64, value: f64) -> f64 {
        if !range.is_defined() || !axis_length.is_finite() {
            return f64::NAN;
        }

        let normalized = match self.config.scale_kind {
            AxisScaleKind::Linear | AxisScaleKind::Time => {
                let span = range.span();
                if span == 0.0 {
                    0.5
                } else {
                    (value - range.min) / span
                }
            }
            AxisScaleKind::Logarithmic => {
                if value <= 0.0 || range.min <= 0.0 || range.max <= range.min {
                    return f64::NAN;
                }
                (value.ln() - range.min.ln()) / (range.max.ln() - range.min.ln())
            }
        };
        if !normalized.is_finite() {
            return f64::NAN;
        }

        let oriented = if self.config.inverted {
            1.0 - normalized
        } else {
            normalized
        };
        if self.config.side.is_horizontal() {
            oriented * axis_length
        } else {
            axis_length - oriented * axis_length
        }
    }
}

fn matching_prefix(unit_scaling: f64) -> MetricPrefix {
    ALL_PREFIXES
        .into_iter()
        .find(|prefix| {
            let scaling = prefix.scaling();
            (unit_scaling - scaling).abs() <= scaling * 1e-9
        })
        .unwrap_or(MetricPrefix::None)
}

fn bits_equal(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}
